use super::bounding_box::*;
use crate::error::*;

use log::*;

use std::fs;
use std::path;

/// The DSC comment that declares the size of the drawing
const BOUNDING_BOX_COMMENT: &str = "%%BoundingBox:";

/// Value of a DSC comment that is given later on in the document
const DEFERRED_VALUE: &str = "(atend)";

///
/// Splits a document into lines, which can end in `\n`, `\r\n` or just `\r`
///
fn lines(source: &str) -> impl '_ + Iterator<Item=&str> {
    source.split_terminator('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

///
/// The parts of an EPS document that are needed to render it
///
#[derive(Clone, Debug, PartialEq)]
pub struct EpsDocument {
    /// The bounding box declared in the document header
    pub bounding_box: BoundingBox,

    /// The lines containing drawing commands, with comments removed
    pub commands: Vec<String>,
}

impl EpsDocument {
    ///
    /// Reads the bounding box and command lines from the text of an EPS document
    ///
    /// Lines starting with `%` are comments and are discarded, except for `%%BoundingBox:`, which must be present. Lines can
    /// end with any of the usual line endings (including the lone `\r` used by older Mac files).
    ///
    pub fn parse(source: &str) -> Result<EpsDocument, FormatError> {
        let mut bounding_box    = None;
        let mut commands        = vec![];

        for line in lines(source) {
            let line = line.trim();

            if let Some(values) = line.strip_prefix(BOUNDING_BOX_COMMENT) {
                // '(atend)' defers the bounding box to the trailer of the document
                if values.trim() == DEFERRED_VALUE {
                    trace!("Bounding box deferred to the document trailer");
                    continue;
                }

                if bounding_box.is_some() {
                    warn!("Document has more than one bounding box: using {:?}", line);
                }

                bounding_box = Some(BoundingBox::parse(values)?);
            } else if !line.starts_with('%') {
                commands.push(line.to_string());
            }
        }

        let bounding_box = bounding_box.ok_or(FormatError::MissingBoundingBox)?;
        debug!("EPS document: bounding box {}, {} command lines", bounding_box, commands.len());

        Ok(EpsDocument { bounding_box, commands })
    }

    ///
    /// Reads an EPS document from a file
    ///
    /// Bytes that aren't valid UTF-8 (eg, in binary sections of the document) are replaced rather than rejected.
    ///
    pub fn read(path: impl AsRef<path::Path>) -> Result<EpsDocument, ConversionError> {
        let source = fs::read(path)?;
        let source = String::from_utf8_lossy(&source);

        Ok(EpsDocument::parse(&source)?)
    }

    ///
    /// The tokens making up the commands in this document, in the order they should be run
    ///
    pub fn tokens(&self) -> impl '_ + Iterator<Item=&str> {
        self.commands.iter()
            .flat_map(|line| line.split_whitespace())
    }
}
