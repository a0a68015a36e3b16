use crate::dom::Document;
use crate::domain::PageData;
use crate::domain::content::{CardList, Hero};
use crate::render::{fill, or_empty, set_markup, set_text};

pub fn render(doc: &mut Document, page: PageData<'_>) {
    if let Some(hero) = page.block::<Hero>("hero") {
        render_hero(doc, &hero);
    }
    if let Some(features) = page.block::<CardList>("features") {
        render_features(doc, &features);
    }
}

fn render_hero(doc: &mut Document, hero: &Hero) {
    set_text(doc, ".hero-title", hero.title.as_deref());
    set_markup(doc, ".hero-description", hero.description.as_deref());

    fill(doc, ".hero-buttons", hero.buttons.as_deref(), |doc, button| {
        let link = doc.create("a.btn");
        if let Some(href) = &button.href {
            doc.set_attr(link, "href", href);
        }
        for class in or_empty(&button.class).split_whitespace() {
            doc.add_class(link, class);
        }
        doc.set_text_content(link, or_empty(&button.text));
        link
    });
}

fn render_features(doc: &mut Document, features: &CardList) {
    set_text(doc, ".section-title", features.title.as_deref());

    fill(doc, ".features-grid", features.items.as_deref(), |doc, feature| {
        let card = doc.create("div.feature-card");
        doc.append_text(card, "div.feature-icon", or_empty(&feature.icon));
        doc.append_text(card, "h3", or_empty(&feature.title));
        doc.append_text(card, "p", or_empty(&feature.description));
        card
    });
}
