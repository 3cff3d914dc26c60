//! Source image fetching module
//!
//! This module provides the fetch boundary: raw source bytes arrive from
//! an HTTP collaborator and are treated as opaque until decoded.

mod fetcher;
mod http_fetcher;
pub mod types;

pub use fetcher::SourceFetcher;
pub use http_fetcher::HttpFetcher;
pub use types::SourceImage;
