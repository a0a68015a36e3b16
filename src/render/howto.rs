use crate::dom::{Document, NodeId};
use crate::domain::content::{ArticleList, Categories, PageHeader, SearchBox};
use crate::domain::{ArticleSummary, PageData};
use crate::filter;
use crate::render::about::render_page_header;
use crate::render::{fill, or_empty, set_text};

pub fn render(doc: &mut Document, page: PageData<'_>) {
    if let Some(header) = page.block::<PageHeader>("header") {
        render_page_header(doc, &header);
    }

    if let (Some(input), Some(search)) = (
        doc.get_element_by_id("search"),
        page.block::<SearchBox>("search"),
    ) {
        if let Some(placeholder) = &search.placeholder {
            doc.set_attr(input, "placeholder", placeholder);
        }
    }

    if let Some(categories) = page.block::<Categories>("categories") {
        render_categories(doc, &categories);
    }
    if let Some(articles) = page.block::<ArticleList>("articles") {
        render_articles(doc, &articles);
    }

    // the cards and articles were just replaced; listeners on the old nodes went with them
    filter::bind(doc);
}

fn render_categories(doc: &mut Document, categories: &Categories) {
    set_text(doc, ".howto-categories h2", categories.title.as_deref());

    fill(doc, ".category-grid", categories.items.as_deref(), |doc, category| {
        let card = doc.create("div.category-card");
        if let Some(id) = &category.id {
            doc.set_attr(card, "data-category", id);
        }
        doc.append_text(card, "div.category-icon", or_empty(&category.icon));
        doc.append_text(card, "h3", or_empty(&category.title));
        doc.append_text(card, "p", or_empty(&category.description));
        card
    });
}

fn render_articles(doc: &mut Document, articles: &ArticleList) {
    set_text(doc, ".howto-articles h2", articles.title.as_deref());
    fill(doc, "#articles-list", articles.items.as_deref(), article_card);
}

pub fn article_card(doc: &mut Document, article: &ArticleSummary) -> NodeId {
    let card = doc.create("article.howto-article");
    if let Some(category) = &article.category {
        doc.set_attr(card, "data-category", category);
    }

    let header = doc.append_new(card, "div.howto-article-header");
    doc.append_text(header, "span.article-category", or_empty(&article.category_name));
    doc.append_text(header, "span.article-date", or_empty(&article.date));

    let heading = doc.append_new(card, "h3");
    let link = doc.append_text(heading, "a", or_empty(&article.title));
    if let Some(url) = &article.url {
        doc.set_attr(link, "href", url);
    }
    if article.external {
        doc.set_attr(link, "target", "_blank");
    }

    doc.append_text(card, "p", or_empty(&article.description));

    let tags = doc.append_new(card, "div.article-tags");
    for tag in &article.tags {
        doc.append_text(tags, "span.tag", tag);
    }

    card
}
