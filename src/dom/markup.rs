//! A tag-level scanner for trusted markup that is inserted raw (header and footer fragments,
//! article bodies). It finds start and end tags with their byte spans so callers can slice or
//! patch the source text without building a tree out of it.

use std::ops::Range;

use super::serialize::is_void;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: String,
    pub value: Option<&'a str>,
    // the value inside the source, quotes excluded
    pub value_span: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: String,
    pub attrs: Vec<Attr<'a>>,
    pub self_closing: bool,
    pub span: Range<usize>,
    // end of the tag name, where a new attribute can be inserted
    pub name_end: usize,
}

impl Tag<'_> {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.unwrap_or_default())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Whether an end tag will follow for this element.
    pub fn opens(&self) -> bool {
        !self.self_closing && !is_void(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Start(Tag<'a>),
    End { name: String, span: Range<usize> },
}

/// All start and end tags in `markup`, in source order. Text, comments, doctypes and the
/// contents of `script`/`style` are skipped. Scanning stops at an unterminated tag.
pub fn tags(markup: &str) -> Vec<Token<'_>> {
    let bytes = markup.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(offset) = markup[i..].find('<') {
        let start = i + offset;
        let next = bytes.get(start + 1).copied();

        match next {
            Some(b'!') if markup[start..].starts_with("<!--") => {
                let Some(end) = markup[start..].find("-->") else { break };
                i = start + end + 3;
            }
            Some(b'!') | Some(b'?') => {
                let Some(end) = markup[start..].find('>') else { break };
                i = start + end + 1;
            }
            Some(b'/') => {
                let Some(end) = markup[start..].find('>') else { break };
                let name = markup[start + 2..start + end]
                    .trim()
                    .to_ascii_lowercase();
                tokens.push(Token::End {
                    name,
                    span: start..start + end + 1,
                });
                i = start + end + 1;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let Some(tag) = start_tag(markup, start) else { break };
                i = tag.span.end;

                // raw text elements end at their own closing tag only
                if matches!(tag.name.as_str(), "script" | "style") && !tag.self_closing {
                    let closing = format!("</{}", tag.name);
                    match markup[i..].to_ascii_lowercase().find(&closing) {
                        Some(end) => i += end,
                        None => {
                            tokens.push(Token::Start(tag));
                            break;
                        }
                    }
                }
                tokens.push(Token::Start(tag));
            }
            _ => i = start + 1,
        }
    }

    tokens
}

fn start_tag(markup: &str, start: usize) -> Option<Tag<'_>> {
    let bytes = markup.as_bytes();
    let len = bytes.len();
    let is_space = |b: u8| b.is_ascii_whitespace();

    let mut j = start + 1;
    while j < len && !is_space(bytes[j]) && bytes[j] != b'>' && bytes[j] != b'/' {
        j += 1;
    }
    let name = markup[start + 1..j].to_ascii_lowercase();
    let name_end = j;

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while j < len && is_space(bytes[j]) {
            j += 1;
        }
        match *bytes.get(j)? {
            b'>' => {
                j += 1;
                break;
            }
            b'/' => {
                self_closing = true;
                j += 1;
                continue;
            }
            _ => {}
        }
        self_closing = false;

        let name_start = j;
        while j < len && !is_space(bytes[j]) && !matches!(bytes[j], b'=' | b'>' | b'/') {
            j += 1;
        }
        let attr_name = markup[name_start..j].to_ascii_lowercase();

        while j < len && is_space(bytes[j]) {
            j += 1;
        }
        if bytes.get(j) != Some(&b'=') {
            attrs.push(Attr {
                name: attr_name,
                value: None,
                value_span: None,
            });
            continue;
        }
        j += 1;
        while j < len && is_space(bytes[j]) {
            j += 1;
        }

        let value_span = match *bytes.get(j)? {
            quote @ (b'"' | b'\'') => {
                let close = markup[j + 1..].find(quote as char)?;
                let span = j + 1..j + 1 + close;
                j = span.end + 1;
                span
            }
            _ => {
                let value_start = j;
                while j < len && !is_space(bytes[j]) && bytes[j] != b'>' {
                    j += 1;
                }
                value_start..j
            }
        };
        attrs.push(Attr {
            name: attr_name,
            value: Some(&markup[value_span.clone()]),
            value_span: Some(value_span),
        });
    }

    Some(Tag {
        name,
        attrs,
        self_closing,
        span: start..j,
        name_end,
    })
}

/// The markup between the first element carrying `class` and its matching end tag.
pub fn inner_of_class<'a>(markup: &'a str, class: &str) -> Option<&'a str> {
    let tokens = tags(markup);
    let mut rest = tokens.iter();

    let open = rest.by_ref().find_map(|token| match token {
        Token::Start(tag) if tag.has_class(class) && tag.opens() => Some(tag),
        _ => None,
    })?;

    let mut depth = 1;
    for token in rest {
        match token {
            Token::Start(tag) if tag.name == open.name && tag.opens() => depth += 1,
            Token::End { name, span } if *name == open.name => {
                depth -= 1;
                if depth == 0 {
                    return Some(&markup[open.span.end..span.start]);
                }
            }
            _ => {}
        }
    }

    Some(&markup[open.span.end..])
}

/// True for a complete page rather than a fragment.
pub fn is_document(markup: &str) -> bool {
    markup
        .trim_start()
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"))
        || tags(markup).iter().any(|token| {
            matches!(token, Token::Start(tag) if tag.name == "html" || tag.name == "body")
        })
}

/// Applies non-overlapping `(range, replacement)` edits given in source order.
pub fn splice(markup: &str, edits: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut cursor = 0;
    for (range, replacement) in edits {
        out.push_str(&markup[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&markup[cursor..]);
    out
}
