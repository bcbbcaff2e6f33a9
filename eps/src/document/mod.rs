mod bounding_box;
mod eps_document;

pub use bounding_box::*;
pub use eps_document::*;
