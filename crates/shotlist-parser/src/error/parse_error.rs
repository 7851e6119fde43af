//! The ParseError type for wrapping parser diagnostics.
//!
//! [`ParseError`] wraps every error [`Diagnostic`] produced while tokenizing
//! and building a markup tree, so all problems in a document are reported
//! together.

use std::fmt;

use crate::error::Diagnostic;

/// Error returned by [`parse`](crate::parse).
///
/// Holds one or more diagnostics in source order.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.diagnostics.first() else {
            return write!(f, "invalid markup");
        };

        write!(f, "{first}")?;
        if self.diagnostics.len() > 1 {
            write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::error("unterminated comment")
            .with_code(ErrorCode::E001)
            .into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].message(), "unterminated comment");
    }

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::error("unterminated tag")
            .with_code(ErrorCode::E003)
            .into();

        assert_eq!(err.to_string(), "error[E003]: unterminated tag");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err: ParseError = vec![
            Diagnostic::error("first"),
            Diagnostic::error("second"),
            Diagnostic::error("third"),
        ]
        .into();

        assert_eq!(err.to_string(), "error: first (+2 more)");
    }

    #[test]
    fn test_parse_error_display_empty() {
        assert_eq!(ParseError::new(Vec::new()).to_string(), "invalid markup");
    }
}
