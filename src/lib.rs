//! Material map synthesis core.
//!
//! Derives a surface-normal map and a roughness map from a single
//! base-color photograph so a real-time viewer can fake fine surface
//! lighting detail without a geometric scan. The pipeline per request
//! is strictly linear: fetch source bytes, decode and resample to a
//! luma buffer, run exactly one synthesizer, encode as PNG, publish.

pub mod logger;
pub mod map_pipeline;
