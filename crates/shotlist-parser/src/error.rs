//! Error and diagnostic system for the Shotlist parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from the parser. The layout engine reuses [`Diagnostic`] to
//! report problems it finds in an otherwise well-formed tree.
//!
//! # Example
//!
//! ```
//! # use shotlist_parser::error::{Diagnostic, ErrorCode};
//! # use shotlist_parser::Span;
//!
//! let span = Span::new(10..24);
//! let tag_span = Span::new(10..13);
//!
//! let diag = Diagnostic::error("unterminated attribute value")
//!     .with_code(ErrorCode::E002)
//!     .with_label(span, "value starts here")
//!     .with_secondary_label(tag_span, "in this tag")
//!     .with_help("add the closing quote");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
