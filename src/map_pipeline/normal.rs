//! Normal map synthesis module
//!
//! Derives a tangent-space normal map from luma gradients via a Sobel
//! convolution. Pure and total: any valid luma buffer produces a map of
//! identical dimensions with no error path.

mod synthesizer;
pub mod types;

pub use synthesizer::NormalSynthesizer;
pub use types::NormalMapBuffer;
