use crate::domain::{decode_block, lenient};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BreadcrumbItem {
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
    // absent on the current page's own entry
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct BreadcrumbTrail {
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub items: Option<Vec<BreadcrumbItem>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ArticleMeta {
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: Option<String>,
    #[serde(rename = "lastUpdated", deserialize_with = "lenient::text")]
    pub last_updated: Option<String>,
}

/// `articles.json`: breadcrumb trails and metadata, both keyed by article id.
#[derive(Debug, Clone)]
pub struct ArticlesDocument(pub Value);

impl ArticlesDocument {
    pub fn breadcrumbs(&self, article_id: &str) -> Option<BreadcrumbTrail> {
        self.0
            .get("breadcrumbs")
            .and_then(|trails| decode_block(trails, article_id))
    }

    pub fn meta(&self, article_id: &str) -> Option<ArticleMeta> {
        self.0
            .get("articleMeta")
            .and_then(|metas| decode_block(metas, article_id))
    }

    /// Every article id either map mentions, sorted.
    pub fn article_ids(&self) -> Vec<String> {
        let mut ids = BTreeSet::new();
        for map in ["breadcrumbs", "articleMeta"] {
            if let Some(Value::Object(entries)) = self.0.get(map) {
                ids.extend(entries.keys().cloned());
            }
        }
        ids.into_iter().collect()
    }
}
