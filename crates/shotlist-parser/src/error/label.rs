//! Labeled source spans for diagnostic messages.

use crate::Span;

/// A message attached to a span of markup source.
///
/// A diagnostic normally carries one primary label marking where the problem
/// is, plus optional secondary labels for context:
///
/// ```text
/// error[E002]: unterminated attribute value
///   --> page.html:4:9
///    |
///  4 | <a href="/home>Home</a>
///    |    ------^^^^^^^^^^^^^^^^
///    |    |     |
///    |    |     value starts here
///    |    in this tag
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The labeled span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for primary labels.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns `true` for secondary labels.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(9..24), "value starts here");

        assert_eq!(label.span().start(), 9);
        assert_eq!(label.span().end(), 24);
        assert_eq!(label.message(), "value starts here");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(3..24), "in this tag");
        assert!(label.is_secondary());
    }
}
