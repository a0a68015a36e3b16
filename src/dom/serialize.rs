use super::{Document, NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub(super) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn document_html(document: &Document) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    write_node(document, document.root(), &mut out);
    out.push('\n');
    out
}

pub(super) fn outer_html(document: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(document, id, &mut out);
    out
}

pub(super) fn inner_html(document: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for child in document.children(id) {
        write_node(document, *child, &mut out);
    }
    out
}

fn write_node(document: &Document, id: NodeId, out: &mut String) {
    match document.data(id) {
        Some(NodeData::Text(text)) => out.push_str(&escape_text(text)),
        Some(NodeData::Raw(markup)) => out.push_str(markup),
        Some(NodeData::Element(element)) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in element.attributes() {
                out.push(' ');
                out.push_str(name);
                // empty values serialize as bare attributes
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');

            if is_void(&element.tag) {
                return;
            }

            for child in document.children(id) {
                write_node(document, *child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
        None => {}
    }
}
