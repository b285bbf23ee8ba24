//! Markup tree types.

use std::fmt;

/// Element tags the view can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Header,
    Main,
    /// `h1` through `h6`.
    Heading(u8),
    P,
}

impl Tag {
    /// The HTML tag name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Main => "main",
            // Out-of-range levels are clamped into h1..h6.
            Tag::Heading(level) => match level.clamp(1, 6) {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            Tag::P => "p",
        }
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::Heading(level) => Some(level.clamp(1, 6)),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All descendant text in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Text of direct text children only.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Accessible name: descendant text with whitespace collapsed.
    pub fn accessible_name(&self) -> String {
        self.text_content()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// This element and all descendant elements, depth-first pre-order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(el) = stack.pop() {
            out.push(el);
            let children: Vec<&Element> = el.child_elements().collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Indented outline of the tree, used in query failure messages.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        pretty_into(self, 0, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
        }
    }
}

fn pretty_into(el: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(el.tag.name());
    for (name, value) in &el.attrs {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    out.push_str(">\n");
    for child in &el.children {
        match child {
            Node::Element(e) => pretty_into(e, depth + 1, out),
            Node::Text(t) => {
                out.push_str(&indent);
                out.push_str("  ");
                out.push_str(t);
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new(Tag::Div)
            .class("outer")
            .child(Element::new(Tag::Heading(2)).child("  Hello\n  world "))
            .child(Element::new(Tag::P).child("one").child(" two"))
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = Element::new(Tag::Div).class("a").class("b");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.get_attr("class"), Some("b"));
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "  Hello\n  world one two");
    }

    #[test]
    fn test_accessible_name_collapses_whitespace() {
        let heading = sample().descendants()[1].clone();
        assert_eq!(heading.accessible_name(), "Hello world");
    }

    #[test]
    fn test_descendants_preorder() {
        let el = sample();
        let tags: Vec<Tag> = el.descendants().iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec![Tag::Div, Tag::Heading(2), Tag::P]);
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(Tag::Heading(9).heading_level(), Some(6));
        assert_eq!(Tag::Heading(9).name(), "h6");
        assert_eq!(Tag::P.heading_level(), None);
    }

    #[test]
    fn test_pretty_outline() {
        let el = Element::new(Tag::P).class("x").child("hi");
        assert_eq!(el.pretty(), "<p class=\"x\">\n  hi\n");
    }
}
