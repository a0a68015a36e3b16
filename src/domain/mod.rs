use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod articles;
pub mod common;
pub mod content;
pub mod lenient;

pub use self::articles::{ArticleMeta, ArticlesDocument, BreadcrumbItem, BreadcrumbTrail};
pub use self::common::CommonDocument;
pub use self::content::{ArticleSummary, ContentDocument, PageData};

// decodes one named block out of a JSON object. an absent or wrongly shaped block is
// "nothing to render", never an error
pub fn decode_block<T: DeserializeOwned>(parent: &Value, name: &str) -> Option<T> {
    let raw = parent.get(name)?;
    if raw.is_null() {
        return None;
    }

    match serde_json::from_value(raw.clone()) {
        Ok(block) => Some(block),
        Err(e) => {
            tracing::debug!("Skipping malformed block '{}': {}", name, e);
            None
        }
    }
}
