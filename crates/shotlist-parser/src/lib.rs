//! # Shotlist Parser
//!
//! Lenient markup parser for Shotlist. Turns HTML-like source text into the
//! [`shotlist_core::markup`] node tree the layout engine walks.
//!
//! Malformed markup is repaired where possible: unclosed elements are closed,
//! stray end tags are dropped with a warning, and paragraphs, list items and
//! definition terms close implicitly the way browsers close them. Input that
//! cannot be tokenized at all (an unterminated comment or tag) is reported as
//! a [`ParseError`].
//!
//! ## Usage
//!
//! ```
//! # use shotlist_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let root = parse("<h1>Opening</h1><p>A wide shot of the city.</p>")?;
//!
//!     let heading = root.as_element().and_then(|root| root.find("h1"));
//!     assert_eq!(heading.map(|h1| h1.text_content()).as_deref(), Some("Opening"));
//!     Ok(())
//! }
//! ```

mod entities;
pub mod error;
mod lexer;
#[cfg(test)]
mod parser_tests;
mod tokens;
mod tree;

pub use error::ParseError;
pub use shotlist_core::span::Span;

use log::{debug, info};

use shotlist_core::markup::Node;

use error::DiagnosticCollector;
use tree::TreeBuilder;

/// Parse markup source into a node tree.
///
/// The pipeline has two stages:
///
/// 1. **Tokenize** - Split the source into tags, text, and comments
/// 2. **Build** - Assemble the tokens into a tree, repairing bad nesting
///
/// The returned node is always an element tagged
/// [`DOCUMENT_TAG`](shotlist_core::markup::DOCUMENT_TAG) whose children are
/// the top-level nodes of the source.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic of severity error that
/// was raised. Warnings are logged and do not fail the parse.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    info!(bytes = source.len(); "Parsing markup");

    let mut diagnostics = DiagnosticCollector::new();

    let tokens = lexer::tokenize(source, &mut diagnostics);
    debug!(tokens = tokens.len(); "Tokenized markup");

    let mut builder = TreeBuilder::new(&mut diagnostics);
    for token in tokens {
        builder.process(token);
    }
    let root = builder.finish(source.len());

    diagnostics.finish()?;

    debug!(children = root.children().len(); "Built document tree");
    Ok(Node::Element(root))
}
