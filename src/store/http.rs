use crate::store::{ContentStore, FetchError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Fetches content over plain GET from a published copy of the site.
pub struct HttpContentStore {
    pub client: Client,
    pub root: Url,
}

impl HttpContentStore {
    pub fn new(root: &str, timeout: Duration) -> Result<Self> {
        // a root without a trailing slash would make `join` drop its last segment
        let root = if root.ends_with('/') {
            root.to_string()
        } else {
            format!("{}/", root)
        };
        let root = Url::parse(&root).with_context(|| format!("Invalid content URL {}", root))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, root })
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let transport = |reason: String| FetchError::Transport {
            path: path.to_string(),
            reason,
        };

        let url = self.root.join(path).map_err(|e| transport(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| transport(e.to_string()))
    }
}
