use crate::dom::markup::{self, Token};
use crate::dom::Document;
use crate::domain::CommonDocument;
use crate::render::set_markup;
use std::ops::Range;

const NAV_LINK: &str = "nav-link";
const NAV_LOGO: &str = "nav-logo";

/// Header and footer markup. On nested pages the header's navigation is rebased first.
pub fn render(doc: &mut Document, common: &CommonDocument, base: &str) {
    if let Some(header) = common.header() {
        let html = header.html.map(|html| rebase_nav_links(&html, base));
        set_markup(doc, "#header-placeholder", html.as_deref());
    }
    if let Some(footer) = common.footer() {
        set_markup(doc, "#footer-placeholder", footer.html.as_deref());
    }
}

/// Prefixes `base` onto relative `.nav-link` hrefs and points the first `.nav-logo a` at
/// `{base}index.html`. Absolute (`http…`) and already-rebased (`../…`) hrefs are kept.
pub fn rebase_nav_links(html: &str, base: &str) -> String {
    if base.is_empty() {
        return html.to_string();
    }

    let mut edits: Vec<(Range<usize>, String)> = Vec::new();
    // open elements as (tag name, is the logo container)
    let mut open: Vec<(String, bool)> = Vec::new();
    let mut logo_rebased = false;

    for token in markup::tags(html) {
        match token {
            Token::Start(tag) => {
                if tag.name == "a" {
                    let href = tag.attrs.iter().find(|attr| attr.name == "href");
                    let in_logo = open.iter().any(|(_, logo)| *logo);

                    if in_logo && !logo_rebased {
                        logo_rebased = true;
                        let target = format!("{}index.html", base);
                        match href.and_then(|attr| attr.value_span.clone()) {
                            Some(span) => edits.push((span, target)),
                            None => edits.push((
                                tag.name_end..tag.name_end,
                                format!(" href=\"{}\"", target),
                            )),
                        }
                    } else if tag.has_class(NAV_LINK) {
                        if let Some((value, span)) =
                            href.and_then(|attr| Some((attr.value?, attr.value_span.clone()?)))
                        {
                            if is_relative(value) {
                                edits.push((span.start..span.start, base.to_string()));
                            }
                        }
                    }
                }
                if tag.opens() {
                    open.push((tag.name.clone(), tag.has_class(NAV_LOGO)));
                }
            }
            Token::End { name, .. } => {
                if let Some(position) = open.iter().rposition(|(open_name, _)| *open_name == name) {
                    open.truncate(position);
                }
            }
        }
    }

    markup::splice(html, &edits)
}

fn is_relative(href: &str) -> bool {
    !href.is_empty() && !href.starts_with("http") && !href.starts_with("../")
}
