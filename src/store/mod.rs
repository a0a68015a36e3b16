use crate::config::{ContentSource, SiteConfig};
use anyhow::Result;
use async_trait::async_trait;
use derive_more::derive::Display;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub mod http;
pub mod local;

pub use self::http::HttpContentStore;
pub use self::local::LocalContentStore;

/// The three shared data documents a page may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DocumentKind {
    #[display("common")]
    Common,
    #[display("content")]
    Content,
    #[display("articles")]
    Articles,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("{path} answered with status {status}")]
    Status { path: String, status: u16 },

    #[error("{path} does not exist")]
    NotFound { path: String },

    #[error("{path} escapes the content root")]
    OutsideRoot { path: String },

    #[error("{path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// read-only access to the published site content, addressed by site-relative paths
// ("data/content.json", "articles/setup.html")
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let text = self.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Malformed {
            path: path.to_string(),
            source,
        })
    }
}

pub fn build_store(config: &SiteConfig) -> Result<Arc<dyn ContentStore>> {
    let store: Arc<dyn ContentStore> = match &config.content_source {
        ContentSource::Remote(url) => Arc::new(HttpContentStore::new(url, config.fetch_timeout)?),
        ContentSource::Local(root) => Arc::new(LocalContentStore::new(root.clone())),
    };
    Ok(store)
}
