//! Map encoding module
//!
//! Re-encodes synthesized pixel buffers into a lossless PNG container
//! with fixed settings so identical buffers give byte-identical files.

mod encoder;
mod png_encoder;
pub mod types;

pub use encoder::MapEncoder;
pub use png_encoder::PngMapEncoder;
pub use types::EncodedImage;
