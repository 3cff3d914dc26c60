use crate::map_pipeline::common::error::Result;

/// Boundary trait for persisting an encoded map.
///
/// `destination_hint` is an opaque logical folder/category string the
/// core never interprets. Implementations must map storage failures to
/// `MapError::Publish` — the map was computed, only the store step needs
/// retrying.
#[allow(async_fn_in_trait)]
pub trait AssetPublisher {
    async fn publish(&self, bytes: &[u8], destination_hint: &str) -> Result<String>;
}
