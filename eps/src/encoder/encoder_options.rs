///
/// How hard the compressor should work on the image data, from 0 (no compression) to 9 (maximum compression)
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Stores the image data without compressing it
    pub const NONE: CompressionLevel = CompressionLevel(0);

    /// Compresses the image data as much as possible
    pub const BEST: CompressionLevel = CompressionLevel(9);

    ///
    /// Creates a compression level, clamping it to the range 0-9
    ///
    pub fn new(level: u8) -> CompressionLevel {
        CompressionLevel(level.min(Self::BEST.0))
    }

    /// The compression level as a number
    #[inline] pub fn level(&self) -> u8 { self.0 }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::BEST
    }
}

///
/// `true` means compress as much as possible, `false` means don't compress
///
impl From<bool> for CompressionLevel {
    fn from(compress: bool) -> CompressionLevel {
        if compress { CompressionLevel::BEST } else { CompressionLevel::NONE }
    }
}

///
/// Settings for the PNG encoder
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PngEncoderOptions {
    pub compression: CompressionLevel,
}

impl PngEncoderOptions {
    ///
    /// Options that either compress the image data as much as possible or not at all
    ///
    pub fn with_compression(compress: bool) -> PngEncoderOptions {
        PngEncoderOptions {
            compression: compress.into(),
        }
    }
}
