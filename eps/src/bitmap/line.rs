use super::gray_bitmap::*;

impl GrayBitmap {
    ///
    /// Draws a one pixel wide line between two points using Bresenham's algorithm
    ///
    /// Both end points are drawn, and the line is the same regardless of which direction it's drawn in. End points can be
    /// anywhere: only the steps along the line that can land inside the bitmap are visited.
    ///
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: u8) {
        let dx      = ((x2 as i128) - (x1 as i128)).unsigned_abs();
        let dy      = ((y2 as i128) - (y1 as i128)).unsigned_abs();
        let step_x  = if x1 < x2 { 1 } else { -1 };
        let step_y  = if y1 < y2 { 1 } else { -1 };

        // The line advances by one pixel along its major axis on every step
        let x_major = dx >= dy;
        let (major_start, major_step, major_len, major_size, minor_start, minor_step, minor_len) = if x_major {
            (x1, step_x, dx, self.width(), y1, step_y, dy)
        } else {
            (y1, step_y, dy, self.height(), x1, step_x, dx)
        };

        let steps = match visible_steps(major_start, major_step, major_len, major_size) {
            Some(steps) => steps,
            None        => return,
        };

        for step in steps {
            let major = (major_start as i128) + (major_step as i128) * (step as i128);
            let minor = (minor_start as i128) + (minor_step as i128) * (minor_offset(step, major_len, minor_len) as i128);

            // Both coordinates lie between the end points, so they fit in an i64
            let (x, y) = if x_major { (major, minor) } else { (minor, major) };
            self.set_pixel(x as i64, y as i64, color);
        }
    }
}

///
/// The range of steps along the major axis where the line is within `0..size`
///
#[inline]
fn visible_steps(start: i64, step: i64, len: u128, size: usize) -> Option<std::ops::RangeInclusive<u128>> {
    if size == 0 {
        return None;
    }

    let start       = start as i128;
    let last        = (size - 1) as i128;
    let len         = len as i128;

    let (first_step, last_step) = if step > 0 {
        ((-start).max(0), (last - start).min(len))
    } else {
        ((start - last).max(0), start.min(len))
    };

    if first_step > last_step {
        None
    } else {
        Some((first_step as u128)..=(last_step as u128))
    }
}

///
/// How far the minor axis has moved after a number of steps along the major axis
///
/// This is the same as running the error accumulator for `step` iterations: `ceil((2*minor_len*step - major_len) / (2*major_len))`
///
#[inline]
fn minor_offset(step: u128, major_len: u128, minor_len: u128) -> u128 {
    if major_len == 0 {
        return 0;
    }

    // minor_len and step are both below 2^64, so the product fits
    let distance    = minor_len * step;
    let whole       = distance / major_len;
    let remainder   = distance % major_len;

    if 2 * remainder > major_len {
        whole + 1
    } else {
        whole
    }
}
