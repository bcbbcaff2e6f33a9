use std::f64::consts::PI;

/// The smallest number of segments used to approximate an arc
pub const MIN_ARC_SEGMENTS: usize = 20;

///
/// The number of straight line segments used to approximate an arc of the specified radius
///
#[inline]
pub fn arc_segments(radius: f64) -> usize {
    let by_radius = (radius * 0.5) as i64;

    if by_radius > MIN_ARC_SEGMENTS as i64 {
        by_radius as usize
    } else {
        MIN_ARC_SEGMENTS
    }
}

///
/// Converts a pair of angles in degrees into a start and end angle in radians, such that sweeping from the
/// start to the end always goes counter-clockwise
///
#[inline]
pub fn arc_sweep(start_degrees: f64, end_degrees: f64) -> (f64, f64) {
    let start   = start_degrees.to_radians();
    let end     = end_degrees.to_radians();

    if end < start {
        (start, end + 2.0*PI)
    } else {
        (start, end)
    }
}

///
/// Returns the points along a circular arc, starting at `start_degrees` and sweeping counter-clockwise to `end_degrees`
///
/// Both end points are included, so this returns one more point than there are segments.
///
pub fn arc_points(center_x: f64, center_y: f64, radius: f64, start_degrees: f64, end_degrees: f64) -> impl Iterator<Item=(f64, f64)> {
    let segments        = arc_segments(radius);
    let (start, end)    = arc_sweep(start_degrees, end_degrees);

    (0..=segments).map(move |idx| {
        let angle = start + (end - start) * (idx as f64) / (segments as f64);

        (center_x + radius * angle.cos(), center_y + radius * angle.sin())
    })
}
