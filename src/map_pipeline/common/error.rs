use thiserror::Error;

/// Error taxonomy for the map pipeline.
///
/// The stages between decoding and encoding are pure pixel math and have
/// no error path; everything that can fail is a boundary. `Publish` is
/// kept distinct from `Fetch`/`Decode` so callers know whether the map
/// was actually computed (retry only the store step) or never produced.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed to fetch source image: {0}")]
    Fetch(String),

    #[error("Failed to decode source image: {0}")]
    Decode(String),

    #[error("Failed to encode map: {0}")]
    Encode(String),

    #[error("Failed to publish map: {0}")]
    Publish(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
