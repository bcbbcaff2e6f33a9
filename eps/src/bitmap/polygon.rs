use super::gray_bitmap::*;

use itertools::*;
use smallvec::*;

impl GrayBitmap {
    ///
    /// Fills a polygon using the even-odd rule
    ///
    /// The vertices are truncated to integer coordinates before filling, and the polygon is closed by an
    /// edge from the last point back to the first. Each scanline is filled between successive pairs of
    /// edge intersections (inclusive of both ends). Horizontal edges produce no intersections.
    ///
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: u8) {
        if points.is_empty() || self.height() == 0 {
            return;
        }

        let points = points.iter()
            .map(|(x, y)| (*x as i64, *y as i64))
            .collect::<Vec<_>>();

        let min_y = points.iter().map(|(_, y)| *y).min().unwrap_or(0);
        let max_y = points.iter().map(|(_, y)| *y).max().unwrap_or(0);

        // Scanlines outside the bitmap can't produce any visible pixels
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height() as i64 - 1);

        let mut intersections = SmallVec::<[i64; 8]>::new();

        for y in min_y..=max_y {
            intersections.clear();

            for ((x1, y1), (x2, y2)) in points.iter().copied().circular_tuple_windows() {
                if y1 == y2 {
                    continue;
                }

                if (y1 <= y && y <= y2) || (y2 <= y && y <= y1) {
                    // Vertices can be anywhere, so the differences are taken as floats
                    let x = (x1 as f64) + ((y as f64) - (y1 as f64)) * ((x2 as f64) - (x1 as f64)) / ((y2 as f64) - (y1 as f64));
                    intersections.push(x as i64);
                }
            }

            intersections.sort_unstable();

            // An unpaired final intersection is ignored
            for span in intersections.chunks_exact(2) {
                self.fill_span(y, span[0], span[1], color);
            }
        }
    }
}
