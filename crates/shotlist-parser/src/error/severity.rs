//! How serious a diagnostic is.

use std::fmt;

use log::Level;

/// The severity level of a diagnostic.
///
/// Markup is parsed leniently, so most irregularities are reported as
/// [`Severity::Warning`] and parsing continues. Only [`Severity::Error`]
/// diagnostics cause [`parse`](crate::parse) to fail.
///
/// Levels are ordered, `Warning < Error`, so the worst level in a set of
/// diagnostics is their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// An irregularity that was recovered from, such as a stray end tag.
    Warning,

    /// Input the tokenizer could not make sense of, such as an unterminated
    /// comment.
    Error,
}

impl Severity {
    /// Returns `true` if a diagnostic at this level fails the parse.
    pub fn fails_parse(self) -> bool {
        self == Severity::Error
    }

    /// The log level recovered diagnostics are reported at.
    pub fn log_level(self) -> Level {
        match self {
            Severity::Warning => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_outranks_warning() {
        let worst = [Severity::Warning, Severity::Error, Severity::Warning]
            .into_iter()
            .max();
        assert_eq!(worst, Some(Severity::Error));
    }

    #[test]
    fn test_only_errors_fail_parse() {
        assert!(Severity::Error.fails_parse());
        assert!(!Severity::Warning.fails_parse());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
