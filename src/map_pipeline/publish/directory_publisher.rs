//! Filesystem-backed asset publisher.
//!
//! Writes encoded maps under `root/<hint>/<fingerprint>.png` and returns
//! the matching public URL. Content-addressed names make republishing
//! the same bytes idempotent.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::map_pipeline::common::error::{MapError, Result};
use crate::map_pipeline::publish::publisher::AssetPublisher;
use crate::map_pipeline::publish::types::StoreConfig;

pub struct DirectoryPublisher {
    config: StoreConfig,
}

impl DirectoryPublisher {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl AssetPublisher for DirectoryPublisher {
    async fn publish(&self, bytes: &[u8], destination_hint: &str) -> Result<String> {
        let dir = self.config.root.join(destination_hint);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| MapError::Publish(format!("{}: {e}", dir.display())))?;

        let name = format!("{:016x}.png", fingerprint(bytes));
        let path = dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MapError::Publish(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), len = bytes.len(), "map stored");

        Ok(format!(
            "{}/{destination_hint}/{name}",
            self.config.public_base_url.trim_end_matches('/')
        ))
    }
}

fn fingerprint(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = DirectoryPublisher::new(StoreConfig::new(
            dir.path(),
            "https://assets.example/maps",
        ));

        let url = publisher.publish(b"png bytes", "normal-maps").await.unwrap();

        assert!(url.starts_with("https://assets.example/maps/normal-maps/"));
        assert!(url.ends_with(".png"));

        let name = url.rsplit('/').next().unwrap();
        let written = std::fs::read(dir.path().join("normal-maps").join(name)).unwrap();
        assert_eq!(written, b"png bytes");
    }

    #[tokio::test]
    async fn test_same_bytes_publish_to_same_url() {
        let dir = tempfile::tempdir().unwrap();
        let publisher =
            DirectoryPublisher::new(StoreConfig::new(dir.path(), "file://maps"));

        let a = publisher.publish(b"identical", "roughness-maps").await.unwrap();
        let b = publisher.publish(b"identical", "roughness-maps").await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_unwritable_root_fails_with_publish_error() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the store expects a directory
        let root = dir.path().join("occupied");
        std::fs::write(&root, b"not a directory").unwrap();

        let publisher = DirectoryPublisher::new(StoreConfig::new(root, "file://maps"));
        let result = publisher.publish(b"bytes", "normal-maps").await;

        assert!(matches!(result.unwrap_err(), MapError::Publish(_)));
    }
}
