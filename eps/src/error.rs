use crate::interpreter::{Operator};

use thiserror::Error;

use std::io;

///
/// Errors that can occur while reading the header of an EPS document
///
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The document has no `%%BoundingBox:` line, so the size of the image is unknown
    #[error("no bounding box found in EPS file")]
    MissingBoundingBox,

    /// A `%%BoundingBox:` line was found but did not contain exactly four integers
    #[error("malformed bounding box: {line:?}")]
    MalformedBoundingBox { line: String },

    /// The bounding box describes an image with no pixels in it
    #[error("bounding box describes an empty image ({width}x{height})")]
    EmptyBoundingBox { width: i128, height: i128 },

    /// The bounding box is wider or taller than a PNG image can be
    #[error("bounding box is too large ({width}x{height}): images are limited to 2147483647 pixels in each direction")]
    BoundingBoxTooLarge { width: i128, height: i128 },
}

///
/// Errors that can occur while running the drawing commands
///
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    /// An operator needed more operands than were on the stack
    #[error("stack underflow: '{operator}' needs {required} operand(s) but only {available} are on the stack")]
    StackUnderflow { operator: Operator, required: usize, available: usize },
}

///
/// Errors that can occur while generating the PNG data
///
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The compressor failed to process the image data
    #[error("could not compress image data: {0}")]
    Compression(#[source] io::Error),

    /// PNG dimensions are limited to 2^31-1 pixels
    #[error("image is too large to encode as a PNG ({width}x{height})")]
    ImageTooLarge { width: usize, height: usize },

    /// The PNG data could not be written to the target stream
    #[error(transparent)]
    Io(#[from] io::Error),
}

///
/// Errors that can stop a conversion from EPS to PNG
///
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Interpreter(#[from] InterpreterError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The image has more pixels than the conversion is allowed to allocate
    #[error("image is too large to render ({width}x{height} is more than {max_pixels} pixels)")]
    TooManyPixels { width: usize, height: usize, max_pixels: usize },

    /// The source file could not be read or the output file could not be written
    #[error(transparent)]
    Io(#[from] io::Error),
}
