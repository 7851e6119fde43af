//! Tree construction from markup tokens.
//!
//! The [`TreeBuilder`] keeps a stack of open elements and applies a small
//! subset of the HTML tree-construction rules: void elements never take
//! children, some start tags implicitly close an open paragraph or list
//! item, unmatched end tags are ignored, and anything still open at the end
//! of the input is closed. Comments and declarations are dropped.

use log::debug;

use shotlist_core::markup::{DOCUMENT_TAG, Element, Node, Text};

use crate::{
    Span,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    tokens::{PositionedToken, Token},
};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Start tags that close an open `p` element.
const CLOSES_PARAGRAPH: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "dl", "ul", "ol", "table", "div", "pre",
    "blockquote", "section", "article", "header", "footer", "nav", "hr",
];

/// Elements an implied `p` close does not reach past.
const PARAGRAPH_SCOPE: &[&str] = &["html", "body", "table", "td", "th", "caption", "button"];

/// Elements an implied `dt`/`dd` close does not reach past.
const DEFINITION_SCOPE: &[&str] = &["dl", "html", "body", "table"];

/// Elements an implied `li` close does not reach past.
const LIST_SCOPE: &[&str] = &["ul", "ol", "html", "body", "table"];

/// Elements that implied end tags can close, counted while open.
const IMPLIED_CLOSE_TARGETS: [&str; 4] = ["p", "dt", "dd", "li"];

/// Builds a node tree from a token stream.
pub struct TreeBuilder<'d> {
    root: Element,
    open: Vec<Element>,
    /// Open elements per entry of [`IMPLIED_CLOSE_TARGETS`].
    open_targets: [usize; IMPLIED_CLOSE_TARGETS.len()],
    diagnostics: &'d mut DiagnosticCollector,
}

impl<'d> TreeBuilder<'d> {
    /// Create a builder whose root is a synthetic [`DOCUMENT_TAG`] element.
    pub fn new(diagnostics: &'d mut DiagnosticCollector) -> Self {
        Self {
            root: Element::new(DOCUMENT_TAG),
            open: Vec::new(),
            open_targets: [0; IMPLIED_CLOSE_TARGETS.len()],
            diagnostics,
        }
    }

    /// Feed one token.
    pub fn process(&mut self, token: PositionedToken) {
        let PositionedToken { token, span } = token;

        match token {
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => self.start_element(name, attributes, self_closing, span),
            Token::EndTag { name } => self.end_element(&name, span),
            Token::Text(content) => self.append(Text::new(content).with_span(span).into()),
            Token::Comment | Token::Declaration => {}
        }
    }

    /// Close every open element and return the document root.
    pub fn finish(mut self, source_len: usize) -> Element {
        if !self.open.is_empty() {
            debug!(count = self.open.len(); "Closing elements left open at end of input");
        }
        self.close_from(0);

        self.root.extend_span(Span::new(0..source_len));
        self.root
    }

    fn start_element(
        &mut self,
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
        span: Span,
    ) {
        self.close_implied(&name);

        let element = attributes
            .into_iter()
            .fold(Element::new(name).with_span(span), |element, (key, value)| {
                element.with_attribute(key, value)
            });

        if self_closing || VOID_ELEMENTS.contains(&element.tag()) {
            self.append(element.into());
        } else {
            if let Some(slot) = target_slot(element.tag()) {
                self.open_targets[slot] += 1;
            }
            self.open.push(element);
        }
    }

    fn end_element(&mut self, name: &str, span: Span) {
        match self.open.iter().rposition(|element| element.tag() == name) {
            Some(index) => {
                self.open[index].extend_span(span);
                self.close_from(index);
            }
            None if VOID_ELEMENTS.contains(&name) => {}
            None => self.diagnostics.emit(
                Diagnostic::warning(format!("unexpected end tag `</{name}>`"))
                    .with_code(ErrorCode::E100)
                    .with_label(span, "no open element matches this tag")
                    .with_help("remove the end tag or add the matching start tag"),
            ),
        }
    }

    /// Close elements that a new `name` start tag implicitly ends.
    fn close_implied(&mut self, name: &str) {
        if CLOSES_PARAGRAPH.contains(&name) {
            self.close_in_scope(&["p"], PARAGRAPH_SCOPE);
        }

        match name {
            "dt" | "dd" => self.close_in_scope(&["dt", "dd"], DEFINITION_SCOPE),
            "li" => self.close_in_scope(&["li"], LIST_SCOPE),
            _ => {}
        }
    }

    /// Close the innermost open element named in `targets`, unless an
    /// element named in `scope` is reached first.
    fn close_in_scope(&mut self, targets: &[&str], scope: &[&str]) {
        let any_open = targets
            .iter()
            .filter_map(|target| target_slot(target))
            .any(|slot| self.open_targets[slot] > 0);
        if !any_open {
            return;
        }

        let index = self
            .open
            .iter()
            .enumerate()
            .rev()
            .take_while(|(_, element)| !scope.contains(&element.tag()))
            .find(|(_, element)| targets.contains(&element.tag()))
            .map(|(index, _)| index);

        if let Some(index) = index {
            self.close_from(index);
        }
    }

    /// Pop the open element at `index` and everything above it.
    fn close_from(&mut self, index: usize) {
        while self.open.len() > index {
            if let Some(element) = self.open.pop() {
                if let Some(slot) = target_slot(element.tag()) {
                    self.open_targets[slot] -= 1;
                }
                self.append(element.into());
            }
        }
    }

    /// Append `node` to the current insertion point.
    fn append(&mut self, node: Node) {
        let parent = match self.open.last_mut() {
            Some(element) => element,
            None => &mut self.root,
        };
        parent.extend_span(node.span());
        parent.push_child(node);
    }
}

fn target_slot(tag: &str) -> Option<usize> {
    IMPLIED_CLOSE_TARGETS.iter().position(|target| *target == tag)
}
