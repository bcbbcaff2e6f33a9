mod gray_bitmap;
mod line;
mod polygon;
mod circle;
mod arc;

pub use gray_bitmap::*;
pub use arc::*;
