//! Error types for Shotlist operations.
//!
//! This module provides the main error type [`ShotListError`], which wraps
//! the error conditions that can occur while turning markup into a shot
//! list, and [`FormatError`], the one way a well-formed tree can fail to lay
//! out.

use std::io;

use thiserror::Error;

use shotlist_core::{markup::Element, span::Span};
use shotlist_parser::error::{Diagnostic, ErrorCode, ParseError};

/// A markup tree that parsed but cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("link element `<{tag}>` has no `href` attribute")]
pub struct FormatError {
    tag: String,
    span: Span,
}

impl FormatError {
    /// A link-classified `element` without an `href`.
    pub fn missing_href(element: &Element) -> Self {
        Self {
            tag: element.tag().to_string(),
            span: element.span(),
        }
    }

    /// Tag of the offending element.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Source span of the offending element.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Convert into a [`Diagnostic`] for source-annotated reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error("link without href")
            .with_code(ErrorCode::E200)
            .with_label(
                self.span,
                format!("this `{}` element is laid out as a link", self.tag),
            )
            .with_help(format!(
                "add an `href` attribute or remove `{}` from the link role",
                self.tag
            ))
    }
}

/// The main error type for Shotlist operations.
///
/// # Diagnostic Variants
///
/// The `Parse` and `Format` variants carry the source text alongside the
/// error so callers can render annotated snippets.
#[derive(Debug, Error)]
pub enum ShotListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{err}")]
    Format { err: FormatError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShotListError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Format` error with the associated source code.
    pub fn new_format_error(err: FormatError, src: impl Into<String>) -> Self {
        Self::Format {
            err,
            src: src.into(),
        }
    }
}
