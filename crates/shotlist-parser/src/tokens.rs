//! Token definitions for the markup tokenizer.

use crate::Span;

/// A lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="value">` or `<name/>`. Names are lowercased.
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    /// `</name>`. The name is lowercased.
    EndTag { name: String },
    /// Character data with character references decoded.
    Text(String),
    /// `<!-- ... -->`
    Comment,
    /// `<!DOCTYPE ...>`, `<?...>`, and other `<!...>` declarations.
    Declaration,
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    pub token: Token,
    pub span: Span,
}

impl PositionedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}
