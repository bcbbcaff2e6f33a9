use super::encoder_options::*;

use flate2::{Compression};
use flate2::write::{ZlibEncoder};

use std::io::{self, Write};

///
/// Compresses the image data for an IDAT chunk
///
/// The result must be a zlib stream (DEFLATE data with a zlib header and checksum), as required by the PNG format.
///
pub trait Compressor {
    fn compress(&self, data: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>>;
}

///
/// Compressor that uses flate2 to generate zlib streams
///
#[derive(Copy, Clone, Debug, Default)]
pub struct ZlibCompressor;

impl Compressor for ZlibCompressor {
    fn compress(&self, data: &[u8], level: CompressionLevel) -> io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 64), Compression::new(level.level() as u32));
        encoder.write_all(data)?;

        encoder.finish()
    }
}
