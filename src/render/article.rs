use crate::dom::markup;
use crate::dom::{escape_attr, escape_text, Document};
use crate::domain::{ArticleMeta, ArticlesDocument, BreadcrumbItem};

const ARTICLE_CONTENT: &str = "article-content";
const META_LABELS: [&str; 4] = ["カテゴリー", "難易度", "所要時間", "最終更新"];

/// Single-article pages: breadcrumb trail and metadata block, both looked up by article id.
pub fn render(doc: &mut Document, article_id: &str, articles: &ArticlesDocument) {
    if let Some(nav) = doc.get_element_by_id("breadcrumb-nav") {
        if let Some(items) = articles
            .breadcrumbs(article_id)
            .and_then(|trail| trail.items)
        {
            doc.set_inner_html(nav, &breadcrumb_markup(&items));
        }
    }

    match (doc.get_element_by_id("article-meta"), articles.meta(article_id)) {
        (Some(target), Some(meta)) => doc.set_inner_html(target, &meta_markup(&meta)),
        (Some(_), None) => tracing::debug!("No metadata for article '{}'", article_id),
        _ => {}
    }
}

/// Links for entries with a url, a plain label for the current page, joined by ` > `.
pub fn breadcrumb_markup(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| {
            let text = escape_text(item.text.as_deref().unwrap_or_default());
            match item.url.as_deref() {
                Some(url) if !url.is_empty() => {
                    format!("<a href=\"{}\">{}</a>", escape_attr(url), text)
                }
                _ => format!("<span>{}</span>", text),
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

// one line per known field; missing fields are left out
pub fn meta_markup(meta: &ArticleMeta) -> String {
    let values = [
        &meta.category,
        &meta.difficulty,
        &meta.duration,
        &meta.last_updated,
    ];

    META_LABELS
        .iter()
        .zip(values)
        .filter_map(|(label, value)| {
            value.as_deref().map(|value| {
                format!("<p><strong>{}:</strong> {}</p>", label, escape_text(value))
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The part of a fetched article file that goes into `.article-content`. A published page
/// contributes the inner markup of its own `.article-content`; a bare fragment is used whole.
/// A page without that element has nothing usable.
pub fn article_body(html: &str) -> Option<&str> {
    if let Some(inner) = markup::inner_of_class(html, ARTICLE_CONTENT) {
        return Some(inner.trim());
    }
    if markup::is_document(html) {
        tracing::debug!("Article page has no .{} element, skipping its body", ARTICLE_CONTENT);
        return None;
    }
    Some(html)
}
