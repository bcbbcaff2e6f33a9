mod crc32;
mod chunk;
mod compressor;
mod encoder_options;
mod png_encoder;

pub use crc32::*;
pub use compressor::*;
pub use encoder_options::*;
pub use png_encoder::*;
