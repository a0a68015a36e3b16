//! Category and text filtering of the howto article list.
//!
//! Both inputs are kept in the tree itself: the selected category is the `data-category` of
//! the card carrying the `selected` class, the search term is the `value` of `#search`.
//! Whenever either changes, visibility of every article is recomputed from both, so a search
//! never undoes a category selection or the other way round.

use crate::dom::{Document, Event, EventType, NodeId};

pub const CATEGORY_CARD: &str = ".category-card";
pub const ARTICLE: &str = ".howto-article";
pub const SELECTED: &str = "selected";
pub const SEARCH_ID: &str = "search";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    // `None` shows every category
    pub category: Option<String>,
    pub term: String,
}

/// The searchable text of one rendered article, lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleText {
    pub category: Option<String>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ArticleText {
    pub fn read(doc: &Document, article: NodeId) -> Self {
        let text_of = |selector: &str| {
            doc.select_first(article, selector)
                .map(|node| doc.text_content(node).to_lowercase())
                .unwrap_or_default()
        };

        Self {
            category: doc.attr(article, "data-category").map(str::to_string),
            title: text_of("h3"),
            description: text_of("p"),
            tags: doc
                .select(article, ".tag")
                .into_iter()
                .map(|tag| doc.text_content(tag).to_lowercase())
                .collect(),
        }
    }
}

impl FilterState {
    pub fn new(category: Option<&str>, term: &str) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
            term: term.to_string(),
        }
    }

    pub fn from_document(doc: &Document) -> Self {
        let category = doc
            .query_selector_all(CATEGORY_CARD)
            .into_iter()
            .find(|card| doc.has_class(*card, SELECTED))
            .and_then(|card| doc.attr(card, "data-category"));

        let term = doc
            .get_element_by_id(SEARCH_ID)
            .and_then(|input| doc.attr(input, "value"))
            .unwrap_or_default();

        Self::new(category, term)
    }

    pub fn matches(&self, article: &ArticleText) -> bool {
        let category_matches = match &self.category {
            Some(selected) => article.category.as_deref() == Some(selected.as_str()),
            None => true,
        };

        let term = self.term.to_lowercase();
        let term_matches = term.is_empty()
            || article.title.contains(&term)
            || article.description.contains(&term)
            || article.tags.iter().any(|tag| tag.contains(&term));

        category_matches && term_matches
    }

    /// Shows the matching articles and hides the rest.
    pub fn apply(&self, doc: &mut Document) {
        for article in doc.query_selector_all(ARTICLE) {
            let visible = self.matches(&ArticleText::read(doc, article));
            doc.set_display(article, if visible { "block" } else { "none" });
        }
    }
}

/// Attaches the filter to the category cards and the search box currently in the tree.
/// Safe to call again after a re-render: each node holds at most one listener per event.
pub fn bind(doc: &mut Document) {
    for card in doc.query_selector_all(CATEGORY_CARD) {
        doc.set_listener(card, EventType::Click, on_category_click);
    }
    if let Some(input) = doc.get_element_by_id(SEARCH_ID) {
        doc.set_listener(input, EventType::Input, on_search_input);
    }
}

fn on_category_click(doc: &mut Document, event: &Event) {
    for card in doc.query_selector_all(CATEGORY_CARD) {
        doc.remove_class(card, SELECTED);
    }
    doc.add_class(event.target, SELECTED);

    FilterState::from_document(doc).apply(doc);
}

fn on_search_input(doc: &mut Document, _event: &Event) {
    FilterState::from_document(doc).apply(doc);
}

/// The card for `category`, if one is rendered.
pub fn find_category_card(doc: &Document, category: &str) -> Option<NodeId> {
    doc.query_selector_all(CATEGORY_CARD)
        .into_iter()
        .find(|card| doc.attr(*card, "data-category").unwrap_or_default() == category)
}
