use crate::dom::{Document, EventType};
use crate::render::LoadedContent;
use crate::resolver::PageKey;
use crate::services::assembly::compose;
use crate::services::{Interactions, PageAssembler};
use crate::store::{ContentStore, FetchError};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

// --- Manual Mock: ContentStore ---
// this "fakes" the published site so no server or directory is needed during tests
// every file lives in a HashMap keyed by its site-relative path
#[derive(Clone)]
pub struct MockContentStore {
    pub files: Arc<Mutex<HashMap<String, String>>>,
    pub failing: Arc<Mutex<HashSet<String>>>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // helper to "publish" a file in our fake site
    pub fn add_file(&self, path: &str, content: &str) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_string(), content.to_string());
    }

    pub fn add_json(&self, path: &str, value: &Value) {
        self.add_file(path, &value.to_string());
    }

    // simulate a network failure for one path
    pub fn fail(&self, path: &str) {
        let mut failing = self.failing.lock().unwrap();
        failing.insert(path.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    // the full sample site
    pub fn with_sample_site() -> Self {
        let store = Self::new();
        store.add_json("data/common.json", &sample_common());
        store.add_json("data/content.json", &sample_content());
        store.add_json("data/articles.json", &sample_articles());
        store.add_file(
            "articles/setup-arch.html",
            "<h1>Setting up Arch</h1><p>Start from the ISO.</p>",
        );
        store
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(path.to_string());

        if self.failing.lock().unwrap().contains(path) {
            return Err(FetchError::Transport {
                path: path.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| FetchError::NotFound {
            path: path.to_string(),
        })
    }
}

// --- Sample content ---

pub fn sample_common() -> Value {
    json!({
        "meta": { "charset": "UTF-8", "css": "css/style.css" },
        "header": { "html": concat!(
            "<nav class=\"navbar\"><div class=\"nav-logo\"><a href=\"index.html\">Sample</a></div>",
            "<ul class=\"nav-menu\">",
            "<li><a class=\"nav-link\" data-page=\"index\" href=\"index.html\">Home</a></li>",
            "<li><a class=\"nav-link\" data-page=\"howto\" href=\"howto.html\">How-to</a></li>",
            "<li><a class=\"nav-link\" href=\"https://github.com/sample\">GitHub</a></li>",
            "</ul></nav>"
        ) },
        "footer": { "html": "<p>&copy; 2024 Sample Site</p>" },
        "pages": { "index": { "title": "Home" } }
    })
}

pub fn sample_howto() -> Value {
    json!({
        "header": { "title": "How-to", "subtitle": "Notes and guides" },
        "search": { "placeholder": "Search articles..." },
        "categories": {
            "title": "Categories",
            "items": [
                { "id": "", "icon": "*", "title": "All", "description": "Everything" },
                { "id": "linux", "icon": "L", "title": "Linux", "description": "Systems" },
                { "id": "rust", "icon": "R", "title": "Rust", "description": "Code" }
            ]
        },
        "articles": {
            "title": "Articles",
            "items": [
                {
                    "id": "setup-arch", "title": "Setting up Arch", "description": "Install guide",
                    "category": "linux", "categoryName": "Linux", "date": "2024-01-10",
                    "url": "articles/setup-arch.html", "external": false, "tags": ["Linux", "Setup"]
                },
                {
                    "id": "async-basics", "title": "Async basics", "description": "Futures and executors",
                    "category": "rust", "categoryName": "Rust", "date": "2024-02-01",
                    "url": "https://example.com/async", "external": true, "tags": ["Rust", "Tokio"]
                },
                {
                    "id": "shell-tricks", "title": "Shell tricks", "description": "Bash helpers for rust builds",
                    "category": "linux", "categoryName": "Linux", "date": "2024-03-05",
                    "url": "articles/shell-tricks.html", "external": false, "tags": ["Shell"]
                }
            ]
        }
    })
}

pub fn sample_content() -> Value {
    json!({
        "pages": {
            "index": {
                "hero": {
                    "title": "Welcome",
                    "description": "Notes on <em>systems</em> and code",
                    "buttons": [
                        { "href": "about.html", "class": "btn-primary", "text": "About me" },
                        { "href": "howto.html", "class": "btn-secondary", "text": "How-to" }
                    ]
                },
                "features": {
                    "title": "What you'll find",
                    "items": [
                        { "icon": "#", "title": "Guides", "description": "Step by step" },
                        { "icon": "%", "title": "Notes", "description": "Short and practical" }
                    ]
                }
            },
            "about": {
                "header": { "title": "About", "subtitle": "Who writes this" },
                "profile": { "avatar": "AB", "name": "A. Writer", "title": "Engineer", "description": "Builds <strong>things</strong>" },
                "experience": {
                    "title": "Experience",
                    "items": [
                        { "date": "2023", "title": "Latest", "description": "Now" },
                        { "date": "2019", "title": "Earlier", "description": "Before" }
                    ]
                }
            },
            "howto": sample_howto()
        }
    })
}

pub fn sample_articles() -> Value {
    json!({
        "breadcrumbs": {
            "setup-arch": {
                "items": [
                    { "text": "Home", "url": "../index.html" },
                    { "text": "How-to", "url": "../howto.html" },
                    { "text": "Setting up Arch" }
                ]
            }
        },
        "articleMeta": {
            "setup-arch": {
                "category": "Linux",
                "difficulty": "Beginner",
                "duration": "30 min",
                "lastUpdated": "2024-01-10"
            },
            "shell-tricks": { "category": "Linux" }
        }
    })
}

pub fn text_of(doc: &Document, selector: &str) -> String {
    doc.query_selector(selector)
        .map(|node| doc.text_content(node))
        .unwrap_or_default()
}

fn assembler(store: &MockContentStore) -> PageAssembler {
    PageAssembler::new(Arc::new(store.clone()), "articles")
}

// --- The Test Logic ---

// the "landmark" test: a full index page load fills the chrome and the page sections
#[tokio::test]
async fn test_assemble_index_page() {
    let store = MockContentStore::with_sample_site();
    let page = assembler(&store)
        .assemble("/index.html", &Interactions::default())
        .await;

    assert_eq!(page.key, PageKey::Index);
    let doc = &page.document;
    assert_eq!(text_of(doc, ".hero-title"), "Welcome");
    assert_eq!(doc.query_selector_all(".feature-card").len(), 2);

    let header = doc.get_element_by_id("header-placeholder").unwrap();
    assert!(doc.inner_html(header).contains("nav-link"));

    // index pages never need the article data
    let requested = store.requested();
    assert!(requested.contains(&"data/common.json".to_string()));
    assert!(requested.contains(&"data/content.json".to_string()));
    assert!(!requested.contains(&"data/articles.json".to_string()));
}

// a nested article page resolves its own id, reaches the data one directory up,
// and fills breadcrumb, metadata and body
#[tokio::test]
async fn test_assemble_article_page() {
    let store = MockContentStore::with_sample_site();
    let page = assembler(&store)
        .assemble("/articles/setup-arch.html", &Interactions::default())
        .await;

    assert_eq!(page.key, PageKey::Article("setup-arch".to_string()));
    let doc = &page.document;

    let nav = doc.get_element_by_id("breadcrumb-nav").unwrap();
    assert_eq!(
        doc.inner_html(nav),
        r#"<a href="../index.html">Home</a> > <a href="../howto.html">How-to</a> > <span>Setting up Arch</span>"#
    );

    let meta = doc.get_element_by_id("article-meta").unwrap();
    assert!(doc.inner_html(meta).contains("<p><strong>難易度:</strong> Beginner</p>"));

    assert!(text_of(doc, ".article-content").contains("Start from the ISO."));

    let requested = store.requested();
    assert!(requested.contains(&"data/articles.json".to_string()));
    assert!(!requested.contains(&"data/content.json".to_string()));
}

// a failed content fetch must leave the dynamic sections exactly as the template had them
#[tokio::test]
async fn test_content_fetch_failure_leaves_placeholders() {
    let store = MockContentStore::with_sample_site();
    store.fail("data/content.json");

    let page = assembler(&store)
        .assemble("/index.html", &Interactions::default())
        .await;
    let doc = &page.document;

    let title = doc.query_selector(".hero-title").unwrap();
    assert!(doc.children(title).is_empty());
    let grid = doc.query_selector(".features-grid").unwrap();
    assert!(doc.children(grid).is_empty());

    // the shared chrome came from a different document and still renders
    assert!(!text_of(doc, "#footer-placeholder").is_empty());
}

// when everything fails the page is still produced, just empty
#[tokio::test]
async fn test_everything_failing_still_assembles() {
    let store = MockContentStore::new();
    let page = assembler(&store)
        .assemble("/howto.html", &Interactions::default())
        .await;

    let html = page.html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="articles-list" class="articles-list"></div>"#));
}

// malformed JSON is a fetch failure, not a crash
#[tokio::test]
async fn test_malformed_document_is_treated_as_missing() {
    let store = MockContentStore::with_sample_site();
    store.add_file("data/content.json", "{ \"pages\": ");

    let page = assembler(&store)
        .assemble("/about.html", &Interactions::default())
        .await;
    assert_eq!(text_of(&page.document, ".page-header h1"), "");
}

// a page key that the content document does not know renders nothing
#[test]
fn test_unknown_page_key_renders_nothing() {
    let content = LoadedContent {
        content: Some(crate::domain::ContentDocument(json!({ "pages": { "index": {} } }))),
        ..LoadedContent::default()
    };

    let doc = compose(&PageKey::About, &content, &Interactions::default());
    assert_eq!(text_of(&doc, ".page-header h1"), "");
    assert!(doc.query_selector_all(".timeline-item").is_empty());
}

// an article id with no entries in articles.json keeps its placeholders
#[tokio::test]
async fn test_unknown_article_keeps_placeholders() {
    let store = MockContentStore::with_sample_site();
    let page = assembler(&store)
        .assemble("/articles/not-written-yet.html", &Interactions::default())
        .await;

    let doc = &page.document;
    let nav = doc.get_element_by_id("breadcrumb-nav").unwrap();
    assert!(doc.children(nav).is_empty());
    let meta = doc.get_element_by_id("article-meta").unwrap();
    assert!(doc.children(meta).is_empty());
}

// interactions requested with the page are replayed after rendering
#[tokio::test]
async fn test_assemble_replays_interactions() {
    let store = MockContentStore::with_sample_site();
    let interactions = Interactions {
        category: Some("linux".to_string()),
        search: Some("rust".to_string()),
    };
    let page = assembler(&store).assemble("/howto.html", &interactions).await;
    let doc = &page.document;

    let visible: Vec<String> = doc
        .query_selector_all(".howto-article")
        .into_iter()
        .filter(|a| !doc.is_hidden(*a))
        .map(|a| doc.attr(a, "data-category").unwrap_or_default().to_string())
        .collect();
    assert_eq!(visible, vec!["linux".to_string()]);

    let search = doc.get_element_by_id("search").unwrap();
    assert_eq!(doc.attr(search, "value"), Some("rust"));
}

// navigation in the shared header points back up to the site root on nested pages
#[tokio::test]
async fn test_article_page_rebases_navigation() {
    let store = MockContentStore::with_sample_site();
    let page = assembler(&store)
        .assemble("/articles/setup-arch.html", &Interactions::default())
        .await;
    let html = page.html();

    assert!(html.contains(r#"<div class="nav-logo"><a href="../index.html">Sample</a></div>"#));
    assert!(html.contains(r#"<a class="nav-link" data-page="index" href="../index.html">Home</a>"#));
    assert!(html.contains(r#"<a class="nav-link" data-page="howto" href="../howto.html">How-to</a>"#));
    assert!(html.contains(r#"<a class="nav-link" href="https://github.com/sample">GitHub</a>"#));

    // top-level pages keep the links as written
    let index = assembler(&store)
        .assemble("/index.html", &Interactions::default())
        .await
        .html();
    assert!(index.contains(r#"<a class="nav-link" data-page="index" href="index.html">Home</a>"#));
}

fn published_article(body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"ja\"><head><meta charset=\"UTF-8\">",
            "<script src=\"../js/common.js\"></script></head><body>",
            "<div id=\"header-placeholder\"></div><main>",
            "<nav class=\"breadcrumb\" id=\"breadcrumb-nav\"></nav>",
            "<div class=\"article-meta\" id=\"article-meta\"></div>",
            "<div class=\"article-content\">{}</div>",
            "</main><div id=\"footer-placeholder\"></div></body></html>"
        ),
        body
    )
}

// when the article file is the published page itself, only its body is taken over
#[tokio::test]
async fn test_published_article_page_contributes_only_its_body() {
    let store = MockContentStore::with_sample_site();
    store.add_file(
        "articles/setup-arch.html",
        &published_article("<h2>Install</h2><div class=\"note\"><p>Boot the ISO.</p></div>"),
    );

    let page = assembler(&store)
        .assemble("/articles/setup-arch.html", &Interactions::default())
        .await;
    let html = page.html();

    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("header-placeholder").count(), 1);
    assert_eq!(html.matches("<script").count(), 0);

    let content = page.document.query_selector(".article-content").unwrap();
    assert_eq!(
        page.document.inner_html(content),
        r#"<h2>Install</h2><div class="note"><p>Boot the ISO.</p></div>"#
    );
}

// a whole page that has no article body to offer leaves the content area empty
#[tokio::test]
async fn test_page_without_article_content_is_ignored() {
    let store = MockContentStore::with_sample_site();
    store.add_file(
        "articles/setup-arch.html",
        "<!DOCTYPE html><html><body><p>Moved elsewhere</p></body></html>",
    );

    let page = assembler(&store)
        .assemble("/articles/setup-arch.html", &Interactions::default())
        .await;

    let content = page.document.query_selector(".article-content").unwrap();
    assert!(page.document.children(content).is_empty());
    assert!(!page.html().contains("Moved elsewhere"));
}

// the filter is wired by the howto renderer; a howto page without content has nothing to
// filter, so the search term is only recorded
#[test]
fn test_filter_bound_only_by_rendered_howto() {
    let interactions = Interactions {
        category: None,
        search: Some("rust".to_string()),
    };

    let empty = compose(&PageKey::Howto, &LoadedContent::default(), &interactions);
    let search = empty.get_element_by_id("search").unwrap();
    assert!(!empty.has_listener(search, EventType::Input));
    assert_eq!(empty.attr(search, "value"), Some("rust"));

    let content = LoadedContent {
        content: Some(crate::domain::ContentDocument(sample_content())),
        ..LoadedContent::default()
    };
    let doc = compose(&PageKey::Howto, &content, &interactions);
    let search = doc.get_element_by_id("search").unwrap();
    assert!(doc.has_listener(search, EventType::Input));
    for card in doc.query_selector_all(".category-card") {
        assert!(doc.has_listener(card, EventType::Click));
    }
}
