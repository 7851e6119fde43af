//! Error codes for the Shotlist diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Tokenizer errors
//! - `E1xx` - Tree construction diagnostics
//! - `E2xx` - Layout errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Tokenizer Errors (E0xx)
    // =========================================================================
    /// Unterminated comment.
    ///
    /// A comment was opened with `<!--` but never closed with `-->`.
    E001,

    /// Unterminated attribute value.
    ///
    /// A quoted attribute value was opened but its closing quote is missing.
    E002,

    /// Unterminated tag.
    ///
    /// The input ended inside a start or end tag, before its closing `>`.
    E003,

    /// Malformed end tag.
    ///
    /// `</` was not followed by a tag name.
    E004,

    // =========================================================================
    // Tree Construction Diagnostics (E1xx)
    // =========================================================================
    /// Unexpected end tag.
    ///
    /// An end tag has no matching open element and is ignored.
    E100,

    /// Unterminated raw text element.
    ///
    /// A `script` or `style` element was never closed; its content runs to
    /// the end of the input.
    E101,

    // =========================================================================
    // Layout Errors (E2xx)
    // =========================================================================
    /// Link without a target.
    ///
    /// An element classified as a link has no `href` attribute.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Tokenizer errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            // Tree construction
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // Layout errors
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Tokenizer errors
            ErrorCode::E001 => "unterminated comment",
            ErrorCode::E002 => "unterminated attribute value",
            ErrorCode::E003 => "unterminated tag",
            ErrorCode::E004 => "malformed end tag",
            // Tree construction
            ErrorCode::E100 => "unexpected end tag",
            ErrorCode::E101 => "unterminated raw text element",
            // Layout errors
            ErrorCode::E200 => "link without href",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated comment");
        assert_eq!(ErrorCode::E100.description(), "unexpected end tag");
        assert_eq!(ErrorCode::E200.description(), "link without href");
    }
}
