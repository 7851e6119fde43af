//! The core diagnostic type for the Shotlist error system.

use std::fmt;

use crate::{
    Span,
    error::{ErrorCode, Label, Severity},
};

/// A diagnostic message with source location information.
///
/// Each diagnostic has a severity, an optional [`ErrorCode`], a message, any
/// number of [`Label`]s, and optional help text. Rendered by the CLI it looks
/// like:
///
/// ```text
/// error[E200]: link without href
///   --> page.html:7:5
///    |
///  7 |     <a>Home</a>
///    |     ^^^^^^^^^^^ this `a` element is laid out as a link
///    |
///    = help: add an `href` attribute or remove `a` from the link role
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use shotlist_parser::error::{Diagnostic, ErrorCode};
    /// # use shotlist_parser::Span;
    ///
    /// let diag = Diagnostic::error("unterminated comment")
    ///     .with_code(ErrorCode::E001)
    ///     .with_label(Span::new(0..4), "comment starts here")
    ///     .with_help("close the comment with `-->`");
    ///
    /// assert_eq!(diag.to_string(), "error[E001]: unterminated comment");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All labels, in the order they were added.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::warning("unexpected end tag `</span>`");

        assert!(!diag.severity().fails_parse());
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("unterminated attribute value")
            .with_code(ErrorCode::E002)
            .with_label(Span::new(9..20), "value starts here")
            .with_secondary_label(Span::new(0..20), "in this tag")
            .with_help("add the closing quote");

        assert!(diag.severity().fails_parse());
        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("add the closing quote"));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("link without href").with_code(ErrorCode::E200);
        assert_eq!(with_code.to_string(), "error[E200]: link without href");

        let without_code = Diagnostic::warning("stray end tag");
        assert_eq!(without_code.to_string(), "warning: stray end tag");
    }
}
