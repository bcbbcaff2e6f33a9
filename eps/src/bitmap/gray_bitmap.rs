use std::fmt;

/// The value of a pixel that has not been drawn on
pub const WHITE: u8 = 255;

/// The darkest value a pixel can have
pub const BLACK: u8 = 0;

///
/// An 8-bit grayscale bitmap, stored row by row starting at the top-left corner
///
/// Every operation that draws on the bitmap works in device coordinates and silently ignores
/// any pixel that lands outside of the bitmap: the geometry itself is never clipped.
///
#[derive(Clone, PartialEq, Eq)]
pub struct GrayBitmap {
    width:  usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayBitmap {
    ///
    /// Creates a new bitmap with every pixel set to white
    ///
    /// Panics if the number of pixels can't be represented in a `usize`. `BoundingBox::pixel_count()` can be used to check
    /// the size before creating a bitmap for a document.
    ///
    pub fn new(width: usize, height: usize) -> GrayBitmap {
        let num_pixels = match width.checked_mul(height) {
            Some(num_pixels)    => num_pixels,
            None                => panic!("A {}x{} bitmap has too many pixels to store", width, height),
        };

        GrayBitmap {
            width:  width,
            height: height,
            pixels: vec![WHITE; num_pixels],
        }
    }

    ///
    /// Creates a bitmap from a set of samples stored in rows (eg, the result of decoding an image)
    ///
    /// Returns `None` if the number of samples does not match the size of the bitmap
    ///
    pub fn from_samples(width: usize, height: usize, samples: Vec<u8>) -> Option<GrayBitmap> {
        if samples.len() != width * height {
            return None;
        }

        Some(GrayBitmap {
            width:  width,
            height: height,
            pixels: samples,
        })
    }

    /// The width of this bitmap in pixels
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The height of this bitmap in pixels
    #[inline] pub fn height(&self) -> usize { self.height }

    /// The samples making up this bitmap, in row order
    #[inline] pub fn samples(&self) -> &[u8] { &self.pixels }

    ///
    /// Iterates over the rows of this bitmap from top to bottom
    ///
    pub fn rows(&self) -> impl '_ + Iterator<Item=&[u8]> {
        let width = self.width;

        (0..self.height).map(move |y| &self.pixels[(y*width)..((y+1)*width)])
    }

    ///
    /// Maps a device coordinate to an index into the pixel array, if it's within the bounds of this bitmap
    ///
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u64) < (self.width as u64) && (y as u64) < (self.height as u64) {
            Some((y as usize) * self.width + (x as usize))
        } else {
            None
        }
    }

    ///
    /// Reads the pixel at the specified position, or returns `None` if the position is outside of the bitmap
    ///
    #[inline]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<u8> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    ///
    /// Writes a pixel to the bitmap. Writes outside of the bitmap have no effect.
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, value: u8) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = value;
        }
    }

    ///
    /// Fills the pixels in an inclusive range along a single row
    ///
    pub (super) fn fill_span(&mut self, y: i64, x1: i64, x2: i64, value: u8) {
        if y < 0 || (y as u64) >= (self.height as u64) || self.width == 0 {
            return;
        }

        // Only the part of the span that's inside the bitmap needs to be written
        let max_x   = (self.width - 1) as i64;
        let start   = x1.max(0);
        let end     = x2.min(max_x);

        if start > end {
            return;
        }

        let row_start = (y as usize) * self.width;
        self.pixels[(row_start + start as usize)..=(row_start + end as usize)].fill(value);
    }
}

impl fmt::Debug for GrayBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrayBitmap({}x{})", self.width, self.height)
    }
}
