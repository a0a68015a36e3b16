use crate::resolver::DEFAULT_NESTED_DIR;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Remote(String),
    Local(PathBuf),
}

impl ContentSource {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            ContentSource::Remote(value.to_string())
        } else {
            ContentSource::Local(PathBuf::from(value))
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub content_source: ContentSource,
    pub static_dir: Option<PathBuf>,
    pub bind_addr: String,
    pub nested_dir: String,
    pub fetch_timeout: Duration,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let content_source = ContentSource::parse(
            &std::env::var("CONTENT_SOURCE").unwrap_or_else(|_| "./site".to_string()),
        );

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| default_static_dir(&content_source));

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let nested_dir =
            std::env::var("NESTED_DIR").unwrap_or_else(|_| DEFAULT_NESTED_DIR.to_string());

        let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            content_source,
            static_dir,
            bind_addr,
            nested_dir,
            fetch_timeout,
        }
    }

    // a command-line content source also moves the static directory along with it,
    // unless STATIC_DIR pinned it explicitly
    pub fn with_content_source(mut self, value: &str) -> Self {
        self.content_source = ContentSource::parse(value);
        if std::env::var("STATIC_DIR").is_err() {
            self.static_dir = default_static_dir(&self.content_source);
        }
        self
    }
}

fn default_static_dir(source: &ContentSource) -> Option<PathBuf> {
    match source {
        ContentSource::Local(root) => Some(root.clone()),
        ContentSource::Remote(_) => None,
    }
}
