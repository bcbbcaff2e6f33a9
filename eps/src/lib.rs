//!
//! # flo_eps
//!
//! `flo_eps` renders a small subset of encapsulated PostScript to 8-bit grayscale PNG files, without
//! needing an external PostScript interpreter.
//!
//! Conversion happens in three steps. The document is read to find its `%%BoundingBox:` and its
//! drawing commands (`EpsDocument`). The commands are run by a stack-based interpreter that builds
//! up paths and draws them on a `GrayBitmap` when they are stroked or filled
//! (`PostScriptInterpreter`). Finally the bitmap is written out as a PNG file (`PngEncoder`).
//!
//! The supported operators are `moveto`, `lineto`, `rmoveto`, `rlineto`, `closepath`, `arc`,
//! `newpath`, `stroke`, `fill`, `setlinewidth` and `setgray`. `gsave`, `grestore` and `showpage`
//! are accepted but do nothing, and any other word in the document is skipped.
//!
//! ```
//! # use flo_eps::*;
//! let source = "%!PS-Adobe-3.0 EPSF-3.0\n%%BoundingBox: 0 0 10 10\nnewpath 0 0 moveto 10 0 lineto 10 10 lineto closepath fill\n";
//! let image  = convert_source(source, ConversionOptions::default()).unwrap();
//!
//! assert!(image.width() == 10 && image.height() == 10);
//! assert!(image.png_data[0..8] == PNG_SIGNATURE);
//! ```
//!

#![warn(bare_trait_objects)]

mod error;
mod convert;

/// Grayscale bitmaps and the routines that draw lines and shapes on them
pub mod bitmap;

/// The stack machine that turns drawing commands into paths and pixels
pub mod interpreter;

/// Reading the header and commands from an EPS document
pub mod document;

/// Writing bitmaps as PNG files
pub mod encoder;

pub use error::*;
pub use convert::*;
pub use bitmap::{GrayBitmap};
pub use interpreter::{PostScriptInterpreter};
pub use document::{BoundingBox, EpsDocument, MAX_IMAGE_DIMENSION};
pub use encoder::{PngEncoder, PngEncoderOptions, CompressionLevel, PNG_SIGNATURE, encode_png};
