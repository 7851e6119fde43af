//! Markup tokenizer.
//!
//! The tokenizer converts markup source into a stream of
//! [`PositionedToken`]s: start tags, end tags, text, comments, and
//! declarations. It is deliberately lenient: a `<` that does not begin a tag
//! is text, and unknown character references are kept verbatim. Only
//! constructs that cannot be delimited (an unterminated comment, quoted
//! attribute value, or tag) produce errors.
//!
//! The entry point is [`tokenize`], which recovers from errors and records
//! every diagnostic in a [`DiagnosticCollector`].

use winnow::{
    Parser as _,
    ascii::{multispace0, multispace1},
    combinator::{alt, cut_err, opt, preceded, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{one_of, take_till, take_until, take_while},
};

use crate::{
    Span, entities,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    tokens::{PositionedToken, Token},
};

/// Elements whose content is taken verbatim up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Rich diagnostic information for tokenizer errors.
///
/// Attached to winnow errors via `.context()`; the error span runs from
/// `start` to the position where tokenizing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LexerDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<LexerDiagnostic>>;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Parse a tag name; the first character must be an ASCII letter.
fn tag_name(input: &mut Input<'_>) -> IResult<String> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., is_name_char),
    )
        .take()
        .map(str::to_ascii_lowercase)
        .parse_next(input)
}

/// Parse an attribute name.
fn attribute_name(input: &mut Input<'_>) -> IResult<String> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, '/' | '>' | '=' | '"' | '\'' | '<')
    })
    .map(str::to_ascii_lowercase)
    .parse_next(input)
}

/// Parse a value wrapped in `quote`, committing once the opening quote is seen.
fn quoted_value(input: &mut Input<'_>, mut quote: char) -> IResult<String> {
    let start = input.current_token_start();

    quote.parse_next(input)?;

    cut_err(terminated(take_till(0.., quote), quote))
        .context(LexerDiagnostic {
            code: ErrorCode::E002,
            message: "unterminated attribute value",
            help: Some("add the closing quote"),
            start,
        })
        .map(|value: &str| entities::decode(value).into_owned())
        .parse_next(input)
}

/// Parse an attribute value: double-quoted, single-quoted, or unquoted.
fn attribute_value(input: &mut Input<'_>) -> IResult<String> {
    alt((
        |input: &mut Input<'_>| quoted_value(input, '"'),
        |input: &mut Input<'_>| quoted_value(input, '\''),
        take_while(1.., |c: char| !c.is_whitespace() && c != '>')
            .map(|value: &str| entities::decode(value).into_owned()),
    ))
    .parse_next(input)
}

/// Parse `name`, `name=value`, or `name = "value"`.
///
/// Valueless attributes get an empty value.
fn attribute(input: &mut Input<'_>) -> IResult<(String, String)> {
    let name = attribute_name.parse_next(input)?;
    let value = opt(preceded((multispace0, '=', multispace0), attribute_value))
        .parse_next(input)?;

    Ok((name, value.unwrap_or_default()))
}

/// Parse `<name attrs...>` or `<name attrs.../>`.
///
/// Backtracks when `<` is not followed by a tag name, so the `<` can be
/// read as text instead.
fn start_tag(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();

    '<'.parse_next(input)?;
    let name = tag_name.parse_next(input)?;

    let (attributes, self_closing) = cut_err(|input: &mut Input<'_>| {
        let attributes: Vec<(String, String)> =
            repeat(0.., preceded(multispace1, attribute)).parse_next(input)?;
        multispace0.parse_next(input)?;
        let self_closing = opt('/').parse_next(input)?.is_some();
        '>'.parse_next(input)?;
        Ok((attributes, self_closing))
    })
    .context(LexerDiagnostic {
        code: ErrorCode::E003,
        message: "unterminated tag",
        help: Some("close the tag with `>`"),
        start,
    })
    .parse_next(input)?;

    Ok(Token::StartTag {
        name,
        attributes,
        self_closing,
    })
}

/// Parse `</name>`. Anything between the name and `>` is ignored.
fn end_tag(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();

    "</".parse_next(input)?;

    let name = cut_err(tag_name)
        .context(LexerDiagnostic {
            code: ErrorCode::E004,
            message: "malformed end tag",
            help: Some("end tags are written `</name>`"),
            start,
        })
        .parse_next(input)?;

    cut_err((take_till(0.., '>'), '>'))
        .context(LexerDiagnostic {
            code: ErrorCode::E003,
            message: "unterminated tag",
            help: Some("close the tag with `>`"),
            start,
        })
        .parse_next(input)?;

    Ok(Token::EndTag { name })
}

/// Parse `<!-- ... -->`.
fn comment(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();

    "<!--".parse_next(input)?;

    cut_err(terminated(take_until(0.., "-->"), "-->"))
        .context(LexerDiagnostic {
            code: ErrorCode::E001,
            message: "unterminated comment",
            help: Some("close the comment with `-->`"),
            start,
        })
        .value(Token::Comment)
        .parse_next(input)
}

/// Parse `<!...>` and `<?...>` declarations such as `<!DOCTYPE html>`.
fn declaration(input: &mut Input<'_>) -> IResult<Token> {
    let start = input.current_token_start();

    alt(("<!", "<?")).parse_next(input)?;

    cut_err((take_till(0.., '>'), '>'))
        .context(LexerDiagnostic {
            code: ErrorCode::E003,
            message: "unterminated tag",
            help: Some("close the declaration with `>`"),
            start,
        })
        .value(Token::Declaration)
        .parse_next(input)
}

/// Parse a run of character data up to the next `<`.
fn text(input: &mut Input<'_>) -> IResult<Token> {
    take_till(1.., '<')
        .map(|raw: &str| Token::Text(entities::decode(raw).into_owned()))
        .parse_next(input)
}

/// A `<` that does not start any markup construct.
fn stray_angle(input: &mut Input<'_>) -> IResult<Token> {
    '<'.value(Token::Text("<".to_string())).parse_next(input)
}

/// Parse a single token with position tracking.
fn positioned_token(input: &mut Input<'_>) -> IResult<PositionedToken> {
    let start_pos = input.current_token_start();

    let token = alt((
        comment,     // Must come before declaration
        end_tag,     // Must come before stray_angle
        declaration, // Must come before start_tag
        start_tag,
        text,
        stray_angle,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();
    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Tokenizer state: accumulated tokens plus the shared diagnostics sink.
struct Lexer<'d> {
    tokens: Vec<PositionedToken>,
    diagnostics: &'d mut DiagnosticCollector,
}

impl<'d> Lexer<'d> {
    fn new(diagnostics: &'d mut DiagnosticCollector) -> Self {
        Self {
            tokens: Vec::new(),
            diagnostics,
        }
    }

    /// Tokenize the input, collecting tokens and errors.
    fn tokenize(&mut self, mut input: Input<'_>) {
        while !input.is_empty() {
            match positioned_token(&mut input) {
                Ok(token) => {
                    let raw_text_element = match &token.token {
                        Token::StartTag {
                            name,
                            self_closing: false,
                            ..
                        } if RAW_TEXT_ELEMENTS.contains(&name.as_str()) => Some(name.clone()),
                        _ => None,
                    };

                    self.push(token);

                    if let Some(name) = raw_text_element {
                        self.raw_text(&mut input, &name);
                    }
                }
                Err(e) => {
                    let error_pos = input.current_token_start();
                    self.diagnostics.emit(Self::convert_err_mode(e, error_pos));

                    if !input.is_empty() {
                        input.next_token();
                    }
                }
            }
        }
    }

    /// Append a token, merging adjacent text runs into one token.
    fn push(&mut self, token: PositionedToken) {
        if let (Token::Text(more), Some(last)) = (&token.token, self.tokens.last_mut()) {
            if let Token::Text(existing) = &mut last.token {
                existing.push_str(more);
                last.span = last.span.union(token.span);
                return;
            }
        }
        self.tokens.push(token);
    }

    /// Consume the verbatim content of a raw text element up to `</name`.
    ///
    /// The end tag itself is left for the regular tokenizer.
    fn raw_text(&mut self, input: &mut Input<'_>, name: &str) {
        let start = input.current_token_start();
        let remaining = input.peek_finish();
        let end_marker = format!("</{name}");

        let length = match remaining.to_ascii_lowercase().find(&end_marker) {
            Some(offset) => offset,
            None => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!("`{name}` element is never closed"))
                        .with_code(ErrorCode::E101)
                        .with_label(
                            Span::new(start..start + remaining.len()),
                            "content runs to the end of the document",
                        ),
                );
                remaining.len()
            }
        };

        if length == 0 {
            return;
        }

        let content = input.next_slice(length);
        self.push(PositionedToken::new(
            Token::Text(content.to_string()),
            Span::new(start..start + length),
        ));
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Uses the innermost `LexerDiagnostic` context when present, falling
    /// back to an unterminated tag error.
    fn convert_err_mode(
        err: ErrMode<ContextError<LexerDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(LexerDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let span = Span::new(*start..error_pos.max(*start + 1));

            let mut diag = Diagnostic::error(*message)
                .with_code(*code)
                .with_label(span, code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..error_pos.saturating_add(1));
        Diagnostic::error("unterminated tag")
            .with_code(ErrorCode::E003)
            .with_label(span, ErrorCode::E003.description())
    }
}

/// Tokenize markup source, recording problems in `diagnostics`.
///
/// Tokenizing never stops early: after an error the offending character is
/// skipped and tokenizing resumes, so every problem is reported in one pass.
pub fn tokenize(input: &str, diagnostics: &mut DiagnosticCollector) -> Vec<PositionedToken> {
    let mut lexer = Lexer::new(diagnostics);
    lexer.tokenize(LocatingSlice::new(input));
    lexer.tokens
}
