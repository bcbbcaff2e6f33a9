use crate::error::*;

use std::fmt;

/// The largest width or height of an image (PNG stores dimensions as 31-bit values)
pub const MAX_IMAGE_DIMENSION: i64 = (1 << 31) - 1;

///
/// The extent of a drawing, as declared by its `%%BoundingBox:` header
///
/// The bounding box determines the size of the rendered image as well as the offset between user space and the
/// pixels in the image. It always describes at least one pixel, and is never wider or taller than `MAX_IMAGE_DIMENSION`.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    llx: i64,
    lly: i64,
    urx: i64,
    ury: i64,
}

impl BoundingBox {
    ///
    /// Creates a bounding box from its lower-left and upper-right corners
    ///
    pub fn new(llx: i64, lly: i64, urx: i64, ury: i64) -> Result<BoundingBox, FormatError> {
        // The corners can be anywhere in the range of an i64, so the size might not fit in one
        let width   = (urx as i128) - (llx as i128);
        let height  = (ury as i128) - (lly as i128);

        if width <= 0 || height <= 0 {
            return Err(FormatError::EmptyBoundingBox { width, height });
        }

        if width > (MAX_IMAGE_DIMENSION as i128) || height > (MAX_IMAGE_DIMENSION as i128) {
            return Err(FormatError::BoundingBoxTooLarge { width, height });
        }

        Ok(BoundingBox { llx, lly, urx, ury })
    }

    ///
    /// Parses the values following `%%BoundingBox:` in a header line
    ///
    pub fn parse(values: &str) -> Result<BoundingBox, FormatError> {
        let malformed = || FormatError::MalformedBoundingBox { line: values.trim().to_string() };

        let values = values.split_whitespace()
            .map(|value| value.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match values.as_slice() {
            [llx, lly, urx, ury]    => BoundingBox::new(*llx, *lly, *urx, *ury),
            _                       => Err(malformed()),
        }
    }

    #[inline] pub fn llx(&self) -> i64 { self.llx }
    #[inline] pub fn lly(&self) -> i64 { self.lly }
    #[inline] pub fn urx(&self) -> i64 { self.urx }
    #[inline] pub fn ury(&self) -> i64 { self.ury }

    /// The width of the image described by this bounding box in pixels
    #[inline] pub fn width(&self) -> usize { (self.urx - self.llx) as usize }

    /// The height of the image described by this bounding box in pixels
    #[inline] pub fn height(&self) -> usize { (self.ury - self.lly) as usize }

    ///
    /// The number of pixels in the image described by this bounding box, or `None` if it can't be counted in a `usize`
    ///
    #[inline]
    pub fn pixel_count(&self) -> Option<usize> {
        self.width().checked_mul(self.height())
    }

    ///
    /// Maps a point in user space (origin at the bottom-left) to device space (origin at the top-left of the image)
    ///
    #[inline]
    pub fn to_device(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let device_x = x - (self.llx as f64);
        let device_y = (self.height() as f64) - (y - (self.lly as f64));

        (device_x, device_y)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.llx, self.lly, self.urx, self.ury)
    }
}
