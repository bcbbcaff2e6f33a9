use super::gray_bitmap::*;
use super::arc::*;

use itertools::*;

impl GrayBitmap {
    ///
    /// Draws the outline of a circle using the midpoint algorithm
    ///
    pub fn draw_circle(&mut self, center_x: i64, center_y: i64, radius: i64, color: u8) {
        let mut x = 0;
        let mut y = radius;
        let mut d = 1 - radius;

        self.draw_circle_octants(center_x, center_y, x, y, color);

        while y > x {
            if d < 0 {
                d += 2*x + 3;
            } else {
                d += 2*(x - y) + 5;
                y -= 1;
            }
            x += 1;

            self.draw_circle_octants(center_x, center_y, x, y, color);
        }
    }

    ///
    /// Plots a point on the circle in each of the 8 octants
    ///
    #[inline]
    fn draw_circle_octants(&mut self, center_x: i64, center_y: i64, x: i64, y: i64, color: u8) {
        self.set_pixel(center_x + x, center_y + y, color);
        self.set_pixel(center_x - x, center_y + y, color);
        self.set_pixel(center_x + x, center_y - y, color);
        self.set_pixel(center_x - x, center_y - y, color);
        self.set_pixel(center_x + y, center_y + x, color);
        self.set_pixel(center_x - y, center_y + x, color);
        self.set_pixel(center_x + y, center_y - x, color);
        self.set_pixel(center_x - y, center_y - x, color);
    }

    ///
    /// Draws a circular arc as a series of straight lines, sweeping counter-clockwise from the start angle to the end angle (in degrees)
    ///
    /// This draws in device coordinates: the interpreter adds arcs to the current path instead of calling this directly
    ///
    pub fn draw_arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_degrees: f64, end_degrees: f64, color: u8) {
        let points = arc_points(center_x, center_y, radius, start_degrees, end_degrees)
            .map(|(x, y)| (x as i64, y as i64));

        for ((x1, y1), (x2, y2)) in points.tuple_windows() {
            self.draw_line(x1, y1, x2, y2, color);
        }
    }
}
