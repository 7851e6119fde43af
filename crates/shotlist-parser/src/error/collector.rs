//! Collector for accumulating diagnostics during parsing.
//!
//! The [`DiagnosticCollector`] lets the tokenizer and tree builder keep
//! going after a problem, so one pass reports everything wrong with a
//! document.

use log::log;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics for one parse.
///
/// Warnings are logged as they are emitted; they only reach the caller when
/// at least one error is also present.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        let severity = diagnostic.severity();
        if severity.fails_parse() {
            self.has_errors = true;
        } else {
            log!(severity.log_level(), diagnostic:%; "Recovered from malformed markup");
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if an error has been recorded.
    #[cfg(test)]
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// Returns `Err` with every recorded diagnostic if any of them is an
    /// error, `Ok(())` otherwise.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}
