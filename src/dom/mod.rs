use std::collections::HashMap;
use std::fmt;

pub mod markup;
mod selector;
mod serialize;

pub use selector::Selector;
pub use serialize::{escape_attr, escape_text};

// generational handle into the document arena. a handle outlives the node it points at,
// so every lookup checks the generation before touching the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Input,
}

#[derive(Debug, Clone, Copy)]
pub struct Event {
    pub kind: EventType,
    pub target: NodeId,
}

/// Event handlers are plain functions: whatever state they need is read back from the tree.
pub type Listener = fn(&mut Document, &Event);

#[derive(Clone)]
pub struct Element {
    pub tag: String,
    attributes: Vec<(String, String)>,
    listeners: HashMap<EventType, Listener>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            listeners: HashMap::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Element(Element),
    Text(String),
    // trusted markup, emitted verbatim on serialization
    Raw(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// An arena-backed HTML tree: the target every renderer mutates.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut document = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        document.root = document.alloc(NodeData::Element(Element::new("html")));
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            data,
            parent: None,
            children: Vec::new(),
        };

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Whether the handle still points at a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node(id).map(|node| &node.data)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.data(id) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.node_mut(id).map(|node| &mut node.data) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(Element::new(tag)))
    }

    /// Creates an element from a `tag#id.class.class` shorthand.
    pub fn create(&mut self, shorthand: &str) -> NodeId {
        let mut tag = String::new();
        let mut id = String::new();
        let mut classes: Vec<String> = Vec::new();
        let mut target = 't';

        for c in shorthand.chars() {
            match c {
                '#' => target = '#',
                '.' => {
                    target = '.';
                    classes.push(String::new());
                }
                _ => match target {
                    '#' => id.push(c),
                    '.' => {
                        if let Some(last) = classes.last_mut() {
                            last.push(c);
                        }
                    }
                    _ => tag.push(c),
                },
            }
        }

        if tag.is_empty() {
            tag.push_str("div");
        }

        let node = self.create_element(&tag);
        if !id.is_empty() {
            self.set_attr(node, "id", &id);
        }
        let classes: Vec<&str> = classes
            .iter()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .collect();
        if !classes.is_empty() {
            self.set_attr(node, "class", &classes.join(" "));
        }
        node
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    pub fn create_raw(&mut self, markup: &str) -> NodeId {
        self.alloc(NodeData::Raw(markup.to_string()))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        // refuse to create a cycle
        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return;
            }
            cursor = self.parent(ancestor);
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Creates an element from shorthand and appends it to `parent`.
    pub fn append_new(&mut self, parent: NodeId, shorthand: &str) -> NodeId {
        let node = self.create(shorthand);
        self.append_child(parent, node);
        node
    }

    /// Like `append_new`, with a single text child.
    pub fn append_text(&mut self, parent: NodeId, shorthand: &str, text: &str) -> NodeId {
        let node = self.append_new(parent, shorthand);
        self.set_text_content(node, text);
        node
    }

    // frees the whole subtree rooted at `id`; every handle into it goes stale
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slots.get_mut(current.index) else {
                continue;
            };
            if slot.generation != current.generation {
                continue;
            }
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
            }
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
        }
    }

    pub fn remove(&mut self, id: NodeId) {
        if id == self.root || !self.contains(id) {
            return;
        }
        self.detach(id);
        self.release(id);
    }

    pub fn clear_children(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            self.remove(child);
        }
    }

    /// Replaces every child of `id` with `children`, dropping the old subtrees.
    pub fn replace_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        if !self.contains(id) {
            return;
        }
        self.clear_children(id);
        for child in children {
            self.append_child(id, child);
        }
    }

    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if !self.contains(id) {
            return;
        }
        self.clear_children(id);
        if !text.is_empty() {
            let child = self.create_text(text);
            self.append_child(id, child);
        }
    }

    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        if !self.contains(id) {
            return;
        }
        self.clear_children(id);
        if !markup.is_empty() {
            let child = self.create_raw(markup);
            self.append_child(id, child);
        }
    }

    /// Concatenated text of the subtree. Raw markup contributes its text with tags stripped.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            match self.data(node) {
                Some(NodeData::Text(text)) => out.push_str(text),
                Some(NodeData::Raw(markup)) => out.push_str(&strip_tags(markup)),
                _ => {}
            }
        }
        out
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attr(name))
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(element) = self.element_mut(id) {
            element.remove_attr(name);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|element| element.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let Some(element) = self.element_mut(id) else {
            return;
        };
        if element.has_class(class) {
            return;
        }
        let mut classes: Vec<String> = element.classes().map(str::to_string).collect();
        classes.push(class.to_string());
        element.set_attr("class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(element) = self.element_mut(id) else {
            return;
        };
        let classes: Vec<String> = element
            .classes()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        if classes.is_empty() {
            element.remove_attr("class");
        } else {
            element.set_attr("class", &classes.join(" "));
        }
    }

    pub fn set_display(&mut self, id: NodeId, display: &str) {
        self.set_attr(id, "style", &format!("display: {}", display));
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.attr(id, "style")
            .is_some_and(|style| style.replace(' ', "").contains("display:none"))
    }

    /// Pre-order walk of the subtree, `id` included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.attr(*node, "id") == Some(id))
    }

    /// Every element below `scope` (scope excluded) matching `selector`, in document order.
    pub fn select(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(scope)
            .into_iter()
            .skip(1)
            .filter(|node| selector.matches(self, *node))
            .collect()
    }

    pub fn select_first(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.descendants(scope)
            .into_iter()
            .skip(1)
            .find(|node| selector.matches(self, *node))
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.select_first(self.root, selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.root, selector)
    }

    /// Registers `listener` for `kind` on the element, replacing any previous one for that kind.
    pub fn set_listener(&mut self, id: NodeId, kind: EventType, listener: Listener) {
        if let Some(element) = self.element_mut(id) {
            element.listeners.insert(kind, listener);
        }
    }

    pub fn has_listener(&self, id: NodeId, kind: EventType) -> bool {
        self.element(id)
            .is_some_and(|element| element.listeners.contains_key(&kind))
    }

    /// Fires the listener bound to `target`, if the node is still alive and has one.
    pub fn dispatch(&mut self, target: NodeId, kind: EventType) -> bool {
        let Some(listener) = self
            .element(target)
            .and_then(|element| element.listeners.get(&kind).copied())
        else {
            return false;
        };
        listener(self, &Event { kind, target });
        true
    }

    pub fn click(&mut self, target: NodeId) -> bool {
        self.dispatch(target, EventType::Click)
    }

    /// Stores `value` on the element and fires its input listener.
    pub fn input(&mut self, target: NodeId, value: &str) -> bool {
        if !self.contains(target) {
            return false;
        }
        self.set_attr(target, "value", value);
        self.dispatch(target, EventType::Input)
    }

    pub fn to_html(&self) -> String {
        serialize::document_html(self)
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        serialize::outer_html(self, id)
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        serialize::inner_html(self, id)
    }
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
