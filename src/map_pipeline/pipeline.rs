//! Pipeline orchestration module
//!
//! Drives the linear per-request path Fetch -> Decode -> Synthesize ->
//! Encode -> Publish. Stateless across requests; no internal retries.

mod generate;

pub use generate::{GeneratedMap, MapKind, MapPipeline};

#[cfg(test)]
mod tests;
