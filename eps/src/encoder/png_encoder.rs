use super::chunk::*;
use super::compressor::*;
use super::encoder_options::*;
use crate::bitmap::*;
use crate::error::*;

use log::*;

use std::io::{Write};

/// The 8 bytes that start every PNG file
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// PNG color type for single-channel grayscale images
const COLOR_TYPE_GRAYSCALE: u8 = 0;

/// The only compression, filter and interlace methods written by this encoder
const METHOD_DEFAULT: u8 = 0;

/// Filter type byte that leaves a scanline as-is
const FILTER_NONE: u8 = 0;

/// Largest value allowed for the width or height of a PNG image
const MAX_DIMENSION: usize = (1 << 31) - 1;

///
/// Writes grayscale bitmaps as 8-bit PNG files
///
/// The output contains just three chunks: IHDR, a single IDAT with every scanline unfiltered, and IEND.
///
#[derive(Clone, Debug, Default)]
pub struct PngEncoder<TCompressor = ZlibCompressor>
where
    TCompressor: Compressor,
{
    options:    PngEncoderOptions,
    compressor: TCompressor,
}

impl PngEncoder<ZlibCompressor> {
    ///
    /// Creates an encoder that uses zlib to compress the image data
    ///
    pub fn new(options: PngEncoderOptions) -> Self {
        PngEncoder {
            options:    options,
            compressor: ZlibCompressor,
        }
    }
}

impl<TCompressor> PngEncoder<TCompressor>
where
    TCompressor: Compressor,
{
    ///
    /// Creates an encoder that uses a custom compressor for the image data
    ///
    pub fn with_compressor(options: PngEncoderOptions, compressor: TCompressor) -> Self {
        PngEncoder { options, compressor }
    }

    /// The options used by this encoder
    #[inline] pub fn options(&self) -> &PngEncoderOptions { &self.options }

    ///
    /// Encodes a bitmap as a PNG file in memory
    ///
    pub fn encode(&self, bitmap: &GrayBitmap) -> Result<Vec<u8>, EncodeError> {
        let mut result = vec![];
        self.write_to(bitmap, &mut result)?;

        Ok(result)
    }

    ///
    /// Writes a bitmap as a PNG file to a stream
    ///
    pub fn write_to<TStream>(&self, bitmap: &GrayBitmap, mut target: TStream) -> Result<(), EncodeError>
    where
        TStream: Write,
    {
        let width   = bitmap.width();
        let height  = bitmap.height();

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(EncodeError::ImageTooLarge { width, height });
        }

        // Compress the image data first so nothing is written if it fails
        let scanlines   = Self::scanlines(bitmap);
        let image_data  = self.compressor.compress(&scanlines, self.options.compression)
            .map_err(EncodeError::Compression)?;

        debug!("PNG {}x{}: {} bytes of scanlines compressed to {} bytes (level {})", width, height, scanlines.len(), image_data.len(), self.options.compression.level());

        let mut header = Vec::with_capacity(13);
        header.extend_from_slice(&(width as u32).to_be_bytes());
        header.extend_from_slice(&(height as u32).to_be_bytes());
        header.extend_from_slice(&[8, COLOR_TYPE_GRAYSCALE, METHOD_DEFAULT, METHOD_DEFAULT, METHOD_DEFAULT]);

        target.write_all(&PNG_SIGNATURE)?;
        Chunk { chunk_type: b"IHDR", data: &header }.write_to(&mut target)?;
        Chunk { chunk_type: b"IDAT", data: &image_data }.write_to(&mut target)?;
        Chunk { chunk_type: b"IEND", data: &[] }.write_to(&mut target)?;
        target.flush()?;

        Ok(())
    }

    ///
    /// Generates the uncompressed image data: each row is preceded by its filter type
    ///
    fn scanlines(bitmap: &GrayBitmap) -> Vec<u8> {
        let mut scanlines = Vec::with_capacity((bitmap.width() + 1) * bitmap.height());

        for row in bitmap.rows() {
            scanlines.push(FILTER_NONE);
            scanlines.extend_from_slice(row);
        }

        scanlines
    }
}

///
/// Encodes a bitmap as a PNG, either compressing the image data as much as possible or not at all
///
pub fn encode_png(bitmap: &GrayBitmap, compress: bool) -> Result<Vec<u8>, EncodeError> {
    PngEncoder::new(PngEncoderOptions::with_compression(compress)).encode(bitmap)
}
