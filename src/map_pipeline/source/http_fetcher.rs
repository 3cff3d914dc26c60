//! HTTP source fetcher backed by reqwest.

use tracing::debug;

use crate::map_pipeline::common::error::{MapError, Result};
use crate::map_pipeline::source::fetcher::SourceFetcher;
use crate::map_pipeline::source::types::SourceImage;

/// Fetches source images over HTTP(S) with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an externally configured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<SourceImage> {
        debug!(%url, "fetching source image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MapError::Fetch(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Fetch(format!("{url}: HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MapError::Fetch(format!("{url}: {e}")))?;

        debug!(len = bytes.len(), "source image downloaded");

        Ok(SourceImage::new(bytes.to_vec(), content_type))
    }
}
