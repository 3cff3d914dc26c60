//! Roughness map synthesis module
//!
//! Estimates per-pixel micro-contrast by blending a sharpened pass
//! against a blurred pass of the same luma buffer. Pure and total, like
//! the normal synthesizer.

mod synthesizer;
pub mod types;

pub use synthesizer::RoughnessSynthesizer;
pub use types::RoughnessMapBuffer;
