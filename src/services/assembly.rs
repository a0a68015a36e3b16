use crate::domain::{ArticlesDocument, CommonDocument, ContentDocument};
use crate::dom::Document;
use crate::filter;
use crate::render::{render_page, LoadedContent, PageRenderer};
use crate::resolver::{PageKey, PageLocation};
use crate::store::{ContentStore, DocumentKind};
use crate::templates::page_template;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Filter actions to replay on the assembled page, as a visitor would click and type them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Interactions {
    pub category: Option<String>,
    #[serde(rename = "q")]
    pub search: Option<String>,
}

pub struct AssembledPage {
    pub key: PageKey,
    pub document: Document,
}

impl AssembledPage {
    pub fn html(&self) -> String {
        self.document.to_html()
    }
}

/// Sequences one page load: resolve, fetch, template, render, wire the filter.
pub struct PageAssembler {
    store: Arc<dyn ContentStore>,
    nested_dir: String,
}

impl PageAssembler {
    pub fn new(store: Arc<dyn ContentStore>, nested_dir: impl Into<String>) -> Self {
        Self {
            store,
            nested_dir: nested_dir.into(),
        }
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub fn nested_dir(&self) -> &str {
        &self.nested_dir
    }

    pub fn locate(&self, path: &str) -> PageLocation {
        PageLocation::resolve(path, &self.nested_dir)
    }

    /// Fetches the documents this page needs. The fetches run concurrently and each one
    /// that fails simply comes back empty.
    pub async fn load(&self, location: &PageLocation) -> LoadedContent {
        let needs = PageRenderer::for_key(&location.key).documents();
        let wants = |kind: DocumentKind| needs.contains(&kind);

        let article_body_path = match &location.key {
            PageKey::Article(id) => Some(format!("{}/{}.html", self.nested_dir, id)),
            _ => None,
        };

        let (common, content, articles, article_body) = tokio::join!(
            fetch_document(self.store(), location, DocumentKind::Common),
            async {
                if wants(DocumentKind::Content) {
                    fetch_document(self.store(), location, DocumentKind::Content).await
                } else {
                    None
                }
            },
            async {
                if wants(DocumentKind::Articles) {
                    fetch_document(self.store(), location, DocumentKind::Articles).await
                } else {
                    None
                }
            },
            async {
                match &article_body_path {
                    Some(path) => self.store.fetch_text(path).await.ok(),
                    None => None,
                }
            },
        );

        LoadedContent {
            common: common.map(CommonDocument),
            content: content.map(ContentDocument),
            articles: articles.map(ArticlesDocument),
            article_body,
        }
    }

    pub async fn assemble(&self, path: &str, interactions: &Interactions) -> AssembledPage {
        let location = self.locate(path);
        let content = self.load(&location).await;
        tracing::info!("Assembling page '{}' for {}", location.key, path);

        AssembledPage {
            document: compose(&location.key, &content, interactions),
            key: location.key,
        }
    }
}

/// Builds the page from already-fetched content. Never fails: whatever is missing stays empty.
pub fn compose(key: &PageKey, content: &LoadedContent, interactions: &Interactions) -> Document {
    let mut doc = page_template(key);
    // the howto renderer binds the filter to the nodes it just built
    render_page(&mut doc, key, content);
    replay(&mut doc, interactions);

    doc
}

fn replay(doc: &mut Document, interactions: &Interactions) {
    if let Some(category) = interactions.category.as_deref().filter(|c| !c.is_empty()) {
        match filter::find_category_card(doc, category) {
            Some(card) => {
                doc.click(card);
            }
            None => tracing::debug!("No category card '{}' to select", category),
        }
    }

    if let Some(term) = &interactions.search {
        if let Some(input) = doc.get_element_by_id(filter::SEARCH_ID) {
            doc.input(input, term);
        }
    }
}

/// Fetches and parses one data document. Failures are logged and become `None`.
pub async fn fetch_document(
    store: &dyn ContentStore,
    location: &PageLocation,
    kind: DocumentKind,
) -> Option<Value> {
    let path = location.document_path(&kind.to_string());
    match store.fetch_json(&path).await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to load {} data: {}", kind, e);
            None
        }
    }
}
