//! Markup node tree.
//!
//! A marked-up document is a tree of [`Node`]s. Each node is either an
//! [`Element`] (tag name, ordered attributes, ordered children) or a [`Text`]
//! node holding raw character data. Sibling relations are derived from the
//! parent's ordered child list.
//!
//! Trees are normally produced by the markup parser, but can be assembled
//! directly for other document sources:
//!
//! ```
//! # use shotlist_core::markup::{Element, Node};
//! let body = Element::new("body")
//!     .with_child(Element::new("h1").with_child(Node::text("Title")))
//!     .with_child(
//!         Element::new("a")
//!             .with_attribute("href", "/home")
//!             .with_child(Node::text("Home")),
//!     );
//!
//! assert_eq!(body.children().len(), 2);
//! assert_eq!(body.text_content(), "TitleHome");
//! ```

use crate::span::Span;

/// Tag name of the synthetic element that roots a parsed document.
pub const DOCUMENT_TAG: &str = "#document";

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag name, attributes, and children.
    Element(Element),
    /// Character data.
    Text(Text),
}

impl Node {
    /// Create a text node with an empty span.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(Text::new(content))
    }

    /// Source span of this node.
    pub fn span(&self) -> Span {
        match self {
            Self::Element(element) => element.span(),
            Self::Text(text) => text.span(),
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants, in document order.
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.content().to_string(),
        }
    }

    /// First element node tagged `tag` in pre-order, including `self`.
    pub fn find(&self, tag: &str) -> Option<&Node> {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if let Self::Element(element) = node {
                if element.tag == tag {
                    return Some(node);
                }
                stack.extend(element.children.iter().rev());
            }
        }

        None
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// A single `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value. Valueless attributes have an empty value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
    span: Span,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: Span::default(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set the source span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Extend the span to cover `span` as well.
    pub fn extend_span(&mut self, span: Span) {
        self.span = self.span.union(span);
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the first attribute called `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(Attribute::value)
    }

    /// Children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The sibling following the child at `index`, if any.
    pub fn next_sibling(&self, index: usize) -> Option<&Node> {
        self.children.get(index.checked_add(1)?)
    }

    /// Source span of the element, from its start tag to its end tag.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();

        while let Some(node) = stack.pop() {
            match node {
                Node::Text(text) => content.push_str(text.content()),
                Node::Element(element) => stack.extend(element.children.iter().rev()),
            }
        }

        content
    }

    /// First element named `tag` in pre-order, including `self`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        let mut stack = vec![self];

        while let Some(element) = stack.pop() {
            if element.tag == tag {
                return Some(element);
            }
            stack.extend(
                element
                    .children
                    .iter()
                    .rev()
                    .filter_map(Node::as_element),
            );
        }

        None
    }
}

impl Drop for Element {
    /// Drops descendants from an explicit stack so deep trees cannot
    /// exhaust the call stack.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);

        while let Some(node) = stack.pop() {
            if let Node::Element(mut element) = node {
                stack.append(&mut element.children);
            }
        }
    }
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    span: Span,
}

impl Text {
    /// Create a text node with an empty span.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            span: Span::default(),
        }
    }

    /// Set the source span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Raw character data.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Source span of the text.
    pub fn span(&self) -> Span {
        self.span
    }
}
