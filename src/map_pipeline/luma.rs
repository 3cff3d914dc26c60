//! Image preprocessing module
//!
//! Decodes raw source bytes into a single-channel luma buffer, capped at
//! a maximum dimension. This is the only stage of the processing chain
//! with an error path.

mod decoder;
pub mod types;

pub use decoder::LumaDecoder;
pub use types::LumaBuffer;
