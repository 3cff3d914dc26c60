//! Map publication module
//!
//! This module provides the publish boundary: encoded map bytes are
//! handed to an asset-store collaborator that returns a retrievable URL.

mod directory_publisher;
mod publisher;
pub mod types;

pub use directory_publisher::DirectoryPublisher;
pub use publisher::AssetPublisher;
pub use types::StoreConfig;
