use crate::dom::{Document, EventType};
use crate::domain::ContentDocument;
use crate::filter::{self, ArticleText, FilterState};
use crate::render::{LoadedContent, render_page};
use crate::resolver::PageKey;
use crate::templates::page_template;
use crate::tests::integration_page_assembly::sample_content;
use serde_json::json;

// a rendered howto page with the filter wired up, as a visitor would get it
fn howto_page() -> (Document, LoadedContent) {
    let content = LoadedContent {
        content: Some(ContentDocument(sample_content())),
        ..LoadedContent::default()
    };
    let mut doc = page_template(&PageKey::Howto);
    render_page(&mut doc, &PageKey::Howto, &content);
    (doc, content)
}

fn visible_titles(doc: &Document) -> Vec<String> {
    doc.query_selector_all(".howto-article")
        .into_iter()
        .filter(|article| !doc.is_hidden(*article))
        .map(|article| {
            let heading = doc.select_first(article, "h3").unwrap();
            doc.text_content(heading)
        })
        .collect()
}

fn click_category(doc: &mut Document, category: &str) {
    let card = filter::find_category_card(doc, category).unwrap();
    assert!(doc.click(card));
}

fn type_search(doc: &mut Document, term: &str) {
    let input = doc.get_element_by_id("search").unwrap();
    assert!(doc.input(input, term));
}

// clicking a category shows exactly the articles tagged with it
#[test]
fn test_category_click_shows_exactly_that_category() {
    let (mut doc, _) = howto_page();
    click_category(&mut doc, "linux");
    assert_eq!(visible_titles(&doc), vec!["Setting up Arch", "Shell tricks"]);

    click_category(&mut doc, "rust");
    assert_eq!(visible_titles(&doc), vec!["Async basics"]);
}

// the card with an empty identifier means "all"
#[test]
fn test_empty_category_shows_everything() {
    let (mut doc, _) = howto_page();
    click_category(&mut doc, "rust");
    click_category(&mut doc, "");
    assert_eq!(visible_titles(&doc).len(), 3);
}

// only the clicked card carries the selection marker
#[test]
fn test_selection_marker_moves() {
    let (mut doc, _) = howto_page();
    click_category(&mut doc, "linux");
    click_category(&mut doc, "rust");

    let selected: Vec<&str> = doc
        .query_selector_all(".category-card.selected")
        .into_iter()
        .map(|card| doc.attr(card, "data-category").unwrap_or_default())
        .collect();
    assert_eq!(selected, vec!["rust"]);
}

// search is a case-insensitive substring match over title, description and tags
#[test]
fn test_search_matches_title_description_and_tags() {
    let (mut doc, _) = howto_page();

    type_search(&mut doc, "TOKIO");
    assert_eq!(visible_titles(&doc), vec!["Async basics"]);

    type_search(&mut doc, "install");
    assert_eq!(visible_titles(&doc), vec!["Setting up Arch"]);

    type_search(&mut doc, "shell");
    assert_eq!(visible_titles(&doc), vec!["Shell tricks"]);

    type_search(&mut doc, "nothing like this");
    assert!(visible_titles(&doc).is_empty());

    type_search(&mut doc, "");
    assert_eq!(visible_titles(&doc).len(), 3);
}

// category and search narrow each other down instead of overwriting each other
#[test]
fn test_category_and_search_combine() {
    let (mut doc, _) = howto_page();

    click_category(&mut doc, "linux");
    type_search(&mut doc, "rust");
    assert_eq!(visible_titles(&doc), vec!["Shell tricks"]);

    // changing the category keeps the search term in force
    click_category(&mut doc, "rust");
    assert_eq!(visible_titles(&doc), vec!["Async basics"]);

    click_category(&mut doc, "");
    assert_eq!(visible_titles(&doc), vec!["Async basics", "Shell tricks"]);
}

// after the list is rendered again, the old cards are gone along with their listeners,
// and the new cards answer clicks
#[test]
fn test_rerender_rebinds_to_new_nodes() {
    let (mut doc, content) = howto_page();
    let old_card = filter::find_category_card(&doc, "rust").unwrap();
    let old_article = doc.query_selector(".howto-article").unwrap();

    render_page(&mut doc, &PageKey::Howto, &content);

    assert!(!doc.contains(old_card));
    assert!(!doc.contains(old_article));
    assert!(!doc.click(old_card));
    assert_eq!(visible_titles(&doc).len(), 3);

    for card in doc.query_selector_all(".category-card") {
        assert!(doc.has_listener(card, EventType::Click));
    }
    click_category(&mut doc, "rust");
    assert_eq!(visible_titles(&doc), vec!["Async basics"]);
}

// a second data load with fewer articles is filtered against the new list only
#[test]
fn test_rerender_with_new_data() {
    let (mut doc, _) = howto_page();

    let smaller = LoadedContent {
        content: Some(ContentDocument(json!({
            "pages": { "howto": {
                "categories": { "items": [{ "id": "go", "title": "Go" }] },
                "articles": { "items": [
                    { "title": "Goroutines", "category": "go", "tags": [] },
                    { "title": "Unsorted" }
                ]}
            }}
        }))),
        ..LoadedContent::default()
    };
    render_page(&mut doc, &PageKey::Howto, &smaller);

    click_category(&mut doc, "go");
    assert_eq!(visible_titles(&doc), vec!["Goroutines"]);
}

#[test]
fn test_filter_state_predicate() {
    let article = ArticleText {
        category: Some("linux".into()),
        title: "setting up arch".into(),
        description: "install guide".into(),
        tags: vec!["linux".into(), "setup".into()],
    };

    assert!(FilterState::default().matches(&article));
    assert!(FilterState::new(Some("linux"), "ARCH").matches(&article));
    assert!(FilterState::new(Some(""), "setup").matches(&article));
    assert!(!FilterState::new(Some("rust"), "").matches(&article));
    assert!(!FilterState::new(None, "windows").matches(&article));
}
