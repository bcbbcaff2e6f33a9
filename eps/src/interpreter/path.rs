///
/// A path being built up by the interpreter, in user space coordinates
///
/// A closed path is represented by a final point that's the same as the first point.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<(f64, f64)>,
}

impl Path {
    ///
    /// Creates an empty path
    ///
    pub fn new() -> Path {
        Path { points: vec![] }
    }

    /// The points in this path
    #[inline] pub fn points(&self) -> &[(f64, f64)] { &self.points }

    /// The number of points in this path
    #[inline] pub fn len(&self) -> usize { self.points.len() }

    /// True if there are no points in this path
    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// The first point in the path
    #[inline] pub fn first(&self) -> Option<(f64, f64)> { self.points.first().copied() }

    ///
    /// Adds a point to the end of the path
    ///
    #[inline]
    pub fn push(&mut self, point: (f64, f64)) {
        self.points.push(point);
    }

    ///
    /// Closes the path by adding its first point to the end. Paths with fewer than 2 points are left alone.
    ///
    /// Returns the point that was added, if the path was closed
    ///
    pub fn close(&mut self) -> Option<(f64, f64)> {
        if self.points.len() < 2 {
            return None;
        }

        let first = self.points[0];
        self.points.push(first);

        Some(first)
    }

    ///
    /// Removes all of the points from this path, returning them
    ///
    pub fn take(&mut self) -> Vec<(f64, f64)> {
        std::mem::take(&mut self.points)
    }

    ///
    /// Removes all of the points from this path
    ///
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
