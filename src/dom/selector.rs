use super::{Document, NodeId};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, document: &Document, node: NodeId) -> bool {
        let Some(element) = document.element(node) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(&element.tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// The selector subset the renderers rely on: type, `#id` and `.class` compounds joined by
/// descendant (whitespace) or child (`>`) combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    // the combinator on each part links it to the part before it
    parts: Vec<(Combinator, Compound)>,
}

impl Selector {
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = Vec::new();
        let mut pending = Combinator::Descendant;
        let mut chars = input.trim().chars().peekable();

        loop {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    chars.next();
                } else if c == '>' {
                    if pending == Combinator::Child || parts.is_empty() {
                        return None;
                    }
                    pending = Combinator::Child;
                    chars.next();
                } else {
                    break;
                }
            }

            if chars.peek().is_none() {
                break;
            }

            let compound = parse_compound(&mut chars)?;
            parts.push((pending, compound));
            pending = Combinator::Descendant;
        }

        if parts.is_empty() || pending == Combinator::Child {
            return None;
        }

        Some(Self { parts })
    }

    pub fn matches(&self, document: &Document, node: NodeId) -> bool {
        self.matches_part(document, node, self.parts.len() - 1)
    }

    fn matches_part(&self, document: &Document, node: NodeId, index: usize) -> bool {
        let (combinator, compound) = &self.parts[index];
        if !compound.matches(document, node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match combinator {
            Combinator::Child => document
                .parent(node)
                .is_some_and(|parent| self.matches_part(document, parent, index - 1)),
            Combinator::Descendant => {
                let mut cursor = document.parent(node);
                while let Some(ancestor) = cursor {
                    if self.matches_part(document, ancestor, index - 1) {
                        return true;
                    }
                    cursor = document.parent(ancestor);
                }
                false
            }
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_name(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !is_name_char(c) {
            break;
        }
        name.push(c);
        chars.next();
    }
    (!name.is_empty()).then_some(name)
}

fn parse_compound(chars: &mut Peekable<Chars<'_>>) -> Option<Compound> {
    let mut compound = Compound::default();

    match chars.peek() {
        Some('*') => {
            chars.next();
        }
        Some(&c) if is_name_char(c) => compound.tag = read_name(chars),
        _ => {}
    }

    while let Some(&c) = chars.peek() {
        match c {
            '#' => {
                chars.next();
                compound.id = Some(read_name(chars)?);
            }
            '.' => {
                chars.next();
                compound.classes.push(read_name(chars)?);
            }
            c if c.is_whitespace() || c == '>' => break,
            _ => return None,
        }
    }

    Some(compound)
}
