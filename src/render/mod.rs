use crate::dom::{Document, NodeId};
use crate::domain::{ArticlesDocument, CommonDocument, ContentDocument};
use crate::resolver::PageKey;
use crate::store::DocumentKind;

pub mod about;
pub mod article;
pub mod common;
pub mod howto;
pub mod index;

/// Everything fetched for one page assembly. A `None` is a document that failed to load.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub common: Option<CommonDocument>,
    pub content: Option<ContentDocument>,
    pub articles: Option<ArticlesDocument>,
    pub article_body: Option<String>,
}

/// The set of page kinds the site knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRenderer {
    Index,
    About,
    Howto,
    Article,
}

impl PageRenderer {
    pub fn for_key(key: &PageKey) -> Self {
        match key {
            PageKey::Index => PageRenderer::Index,
            PageKey::About => PageRenderer::About,
            PageKey::Howto => PageRenderer::Howto,
            PageKey::Article(_) => PageRenderer::Article,
        }
    }

    /// The data documents this kind of page reads, besides `common`.
    pub fn documents(&self) -> &'static [DocumentKind] {
        match self {
            PageRenderer::Index | PageRenderer::About | PageRenderer::Howto => {
                &[DocumentKind::Content]
            }
            PageRenderer::Article => &[DocumentKind::Articles],
        }
    }

    pub fn render(&self, doc: &mut Document, key: &PageKey, content: &LoadedContent) {
        if let (PageRenderer::Article, PageKey::Article(article_id)) = (self, key) {
            if let Some(articles) = &content.articles {
                article::render(doc, article_id, articles);
            }
            if let Some(body) = content.article_body.as_deref().and_then(article::article_body) {
                set_markup(doc, ".article-content", Some(body));
            }
            return;
        }

        let page_key = key.to_string();
        let Some(page) = content
            .content
            .as_ref()
            .and_then(|document| document.page(&page_key))
        else {
            tracing::debug!("No content for page '{}', leaving placeholders empty", page_key);
            return;
        };

        match self {
            PageRenderer::Index => index::render(doc, page),
            PageRenderer::About => about::render(doc, page),
            PageRenderer::Howto => howto::render(doc, page),
            PageRenderer::Article => {}
        }
    }
}

/// Fills the shared chrome and then the page-specific sections.
pub fn render_page(doc: &mut Document, key: &PageKey, content: &LoadedContent) {
    if let Some(common) = &content.common {
        common::render(doc, common, key.base_path());
    }
    PageRenderer::for_key(key).render(doc, key, content);
}

pub(crate) fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

pub(crate) fn set_text(doc: &mut Document, selector: &str, text: Option<&str>) {
    if let (Some(node), Some(text)) = (doc.query_selector(selector), text) {
        doc.set_text_content(node, text);
    }
}

// trusted markup only: rich-text fields of first-party content
pub(crate) fn set_markup(doc: &mut Document, selector: &str, markup: Option<&str>) {
    if let (Some(node), Some(markup)) = (doc.query_selector(selector), markup) {
        doc.set_inner_html(node, markup);
    }
}

/// Replaces the children of the element matching `selector` with one built node per item.
/// Nothing happens when either the element or the list is missing.
pub(crate) fn fill<T>(
    doc: &mut Document,
    selector: &str,
    items: Option<&[T]>,
    build: impl Fn(&mut Document, &T) -> NodeId,
) {
    let (Some(target), Some(items)) = (doc.query_selector(selector), items) else {
        return;
    };
    let built: Vec<NodeId> = items.iter().map(|item| build(doc, item)).collect();
    doc.replace_children(target, built);
}

pub(crate) fn external_link(doc: &mut Document, shorthand: &str, url: &Option<String>) -> NodeId {
    let link = doc.create(shorthand);
    if let Some(url) = url {
        doc.set_attr(link, "href", url);
    }
    doc.set_attr(link, "target", "_blank");
    link
}
