//! The static page markup: placeholders and class-named sections that the renderers fill in.
//!
//! Every page shares the same shell (header placeholder, `main`, footer placeholder); the
//! body of `main` depends on the page kind.

use crate::dom::{Document, NodeId};
use crate::resolver::PageKey;

pub fn page_template(key: &PageKey) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    doc.set_attr(root, "lang", "ja");

    let head = doc.append_new(root, "head");
    let charset = doc.append_new(head, "meta");
    doc.set_attr(charset, "charset", "UTF-8");

    let body = doc.append_new(root, "body");
    doc.append_new(body, "div#header-placeholder");
    let main = doc.append_new(body, "main");
    doc.append_new(body, "div#footer-placeholder");

    match key {
        PageKey::Index => index_body(&mut doc, main),
        PageKey::About => about_body(&mut doc, main),
        PageKey::Howto => howto_body(&mut doc, main),
        PageKey::Article(_) => article_body(&mut doc, main),
    }

    doc
}

fn page_header(doc: &mut Document, main: NodeId) {
    let header = doc.append_new(main, "section.page-header");
    doc.append_new(header, "h1");
    doc.append_new(header, "p");
}

fn index_body(doc: &mut Document, main: NodeId) {
    let hero = doc.append_new(main, "section.hero");
    let content = doc.append_new(hero, "div.hero-content");
    doc.append_new(content, "h1.hero-title");
    doc.append_new(content, "p.hero-description");
    doc.append_new(content, "div.hero-buttons");

    let features = doc.append_new(main, "section.features");
    let container = doc.append_new(features, "div.container");
    doc.append_new(container, "h2.section-title");
    doc.append_new(container, "div.features-grid");
}

fn about_body(doc: &mut Document, main: NodeId) {
    page_header(doc, main);

    let section = doc.append_new(main, "section.about-content");
    let container = doc.append_new(section, "div.container");

    let profile = doc.append_new(container, "div.profile-card");
    doc.append_new(profile, "div.avatar");
    let info = doc.append_new(profile, "div.profile-info");
    doc.append_new(info, "h2");
    doc.append_new(info, "p.profile-title");
    doc.append_new(info, "div.profile-description");

    let skills = doc.append_new(container, "div.skills-section");
    doc.append_new(skills, "h3");
    doc.append_new(skills, "div.skills-grid");
    let note = doc.append_new(skills, "div.note-box");
    doc.append_new(note, "p");

    let experience = doc.append_new(container, "div.experience-section");
    doc.append_new(experience, "h3");
    doc.append_new(experience, "div.timeline");

    let hobbies = doc.append_new(container, "div.hobbies-section");
    doc.append_new(hobbies, "h3");
    doc.append_new(hobbies, "div.hobbies-content");

    let social = doc.append_new(container, "div.social-accounts-section");
    doc.append_new(social, "h3");
    doc.append_new(social, "p");
    doc.append_new(social, "div.accounts-grid");

    let contact = doc.append_new(container, "div.contact-section");
    doc.append_new(contact, "h3");
    doc.append_new(contact, "p");
    doc.append_new(contact, "div.email-contact");
    doc.append_new(contact, "div.contact-links");
    let privacy = doc.append_new(contact, "div.privacy-note");
    doc.append_new(privacy, "p");

    let english = doc.append_new(container, "div.english-section");
    doc.append_new(english, "h3");
}

fn howto_body(doc: &mut Document, main: NodeId) {
    page_header(doc, main);

    let search = doc.append_new(main, "section.howto-search");
    let container = doc.append_new(search, "div.container");
    let input = doc.append_new(container, "input#search.search-input");
    doc.set_attr(input, "type", "text");

    let categories = doc.append_new(main, "section.howto-categories");
    let container = doc.append_new(categories, "div.container");
    doc.append_new(container, "h2");
    doc.append_new(container, "div.category-grid");

    let articles = doc.append_new(main, "section.howto-articles");
    let container = doc.append_new(articles, "div.container");
    doc.append_new(container, "h2");
    doc.append_new(container, "div#articles-list.articles-list");
}

fn article_body(doc: &mut Document, main: NodeId) {
    let breadcrumb = doc.append_new(main, "nav.breadcrumb");
    doc.append_new(breadcrumb, "div#breadcrumb-nav");

    let article = doc.append_new(main, "article.article");
    let header = doc.append_new(article, "header.article-header");
    doc.append_new(header, "div#article-meta.article-meta");
    doc.append_new(article, "div.article-content");
}
