//! Asset store configuration types

use std::path::PathBuf;

/// Asset store configuration.
///
/// Constructed once at process start and passed by reference into the
/// publisher; read-only thereafter. No process-global mutable state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root location the store writes under
    pub root: PathBuf,
    /// Base URL prefixed onto published asset paths
    pub public_base_url: String,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}
