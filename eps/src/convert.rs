use crate::document::*;
use crate::error::*;
use crate::encoder::*;
use crate::interpreter::{PostScriptInterpreter};

use log::*;

use std::fs;
use std::io::{Write};
use std::path::{Path};

/// The largest image a conversion will render unless told otherwise (1 GiB of samples)
pub const DEFAULT_MAX_PIXELS: usize = 1 << 30;

///
/// Settings for a conversion from EPS to PNG
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConversionOptions {
    /// How the PNG file is written
    pub encoder: PngEncoderOptions,

    /// Documents whose bounding box covers more pixels than this are rejected before anything is rendered
    pub max_pixels: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            encoder:    PngEncoderOptions::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl ConversionOptions {
    ///
    /// Options that either compress the output as much as possible or not at all
    ///
    pub fn with_compression(compress: bool) -> ConversionOptions {
        ConversionOptions {
            encoder: PngEncoderOptions::with_compression(compress),
            ..ConversionOptions::default()
        }
    }
}

///
/// The result of converting an EPS document
///
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedImage {
    /// The bounding box read from the source document
    pub bounding_box: BoundingBox,

    /// The encoded PNG file
    pub png_data: Vec<u8>,
}

impl ConvertedImage {
    /// The width of the image in pixels
    #[inline] pub fn width(&self) -> usize { self.bounding_box.width() }

    /// The height of the image in pixels
    #[inline] pub fn height(&self) -> usize { self.bounding_box.height() }
}

///
/// Renders a parsed EPS document and encodes it as a PNG file
///
pub fn convert_document(document: &EpsDocument, options: ConversionOptions) -> Result<ConvertedImage, ConversionError> {
    let bounding_box = document.bounding_box;

    // Check the size before the bitmap is allocated
    match bounding_box.pixel_count() {
        Some(num_pixels) if num_pixels <= options.max_pixels => { }
        _ => {
            return Err(ConversionError::TooManyPixels { width: bounding_box.width(), height: bounding_box.height(), max_pixels: options.max_pixels });
        }
    }

    let interpreter = PostScriptInterpreter::new(bounding_box);
    let bitmap      = interpreter.execute(document.tokens())?;
    let png_data    = PngEncoder::new(options.encoder).encode(&bitmap)?;

    Ok(ConvertedImage {
        bounding_box:   document.bounding_box,
        png_data:       png_data,
    })
}

///
/// Converts the text of an EPS document to a PNG file in memory
///
pub fn convert_source(source: &str, options: ConversionOptions) -> Result<ConvertedImage, ConversionError> {
    let document = EpsDocument::parse(source)?;

    convert_document(&document, options)
}

///
/// Converts an EPS file to a PNG file
///
/// The output file is only created once the conversion has succeeded, and is removed again if it can't be written
/// completely.
///
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>, options: ConversionOptions) -> Result<ConvertedImage, ConversionError> {
    let input   = input.as_ref();
    let output  = output.as_ref();

    let document    = EpsDocument::read(input)?;
    let image       = convert_document(&document, options)?;

    let written = fs::File::create(output)
        .and_then(|mut file| {
            file.write_all(&image.png_data)?;
            file.sync_all()
        });

    if let Err(err) = written {
        // Don't leave a truncated PNG file behind
        if output.exists() {
            if let Err(remove_err) = fs::remove_file(output) {
                warn!("Could not remove incomplete output file {}: {}", output.display(), remove_err);
            }
        }

        return Err(err.into());
    }

    debug!("Wrote {} bytes to {}", image.png_data.len(), output.display());

    Ok(image)
}
