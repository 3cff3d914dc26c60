use crate::map_pipeline::common::error::Result;
use crate::map_pipeline::source::types::SourceImage;

/// Boundary trait for retrieving source image bytes.
///
/// Implementations must map any transport failure or non-success status
/// to `MapError::Fetch` so the orchestrator can report "never computed"
/// distinctly from a failed store step.
#[allow(async_fn_in_trait)]
pub trait SourceFetcher {
    async fn fetch(&self, url: &str) -> Result<SourceImage>;
}
