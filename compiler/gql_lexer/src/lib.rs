//! Lexer for GraphQL using logos.
//!
//! Produces the complete `TokenList` of a source: a start-of-file token,
//! every significant token and every comment in source order, and an
//! end-of-file token. Comments stay in the stream so that printers can
//! reattach them; the parser skips them.
//!
//! # Positions
//!
//! Logos only reports byte ranges. Lines and columns are recovered by a
//! `LineTracker` that scans the source once, front to back, as tokens
//! are produced. `\r\n`, `\r`, and `\n` each count as one line break.

mod escape;
mod lex_error;
mod raw_token;

use gql_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::debug;

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex `source` into a `TokenList`.
///
/// Fails on the first character that cannot start a token, on an
/// unterminated string, or on an invalid escape sequence.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 2);
    tokens.push(Token::punctuator(TokenKind::Sof, Span::default(), 0, 0));

    let mut lines = LineTracker::new(source);
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let range = raw.span();
        let (line, column) = lines.position(range.start);
        let span = Span::from_range(range.clone());
        let slice = raw.slice();

        let Ok(kind) = result else {
            return Err(classify_error(source, range.start, line, column));
        };

        let token = match kind {
            RawToken::Comment => Token::new(TokenKind::Comment, span, line, column, &slice[1..]),
            RawToken::Name => Token::new(TokenKind::Name, span, line, column, slice),
            RawToken::Int => Token::new(TokenKind::Int, span, line, column, slice),
            RawToken::Float => Token::new(TokenKind::Float, span, line, column, slice),
            RawToken::String => {
                let value = escape::unescape_string(&slice[1..slice.len() - 1]).map_err(
                    |sequence| LexError::InvalidEscape {
                        sequence,
                        line,
                        column,
                    },
                )?;
                Token::new(TokenKind::String, span, line, column, value)
            }
            RawToken::BlockString => {
                let value = escape::block_string_value(&slice[3..slice.len() - 3]);
                Token::new(TokenKind::BlockString, span, line, column, value)
            }
            punctuator => Token::punctuator(convert_punctuator(punctuator), span, line, column),
        };
        tokens.push(token);
    }

    let (line, column) = lines.position(source.len());
    tokens.push(Token::punctuator(
        TokenKind::Eof,
        Span::from_range(source.len()..source.len()),
        line,
        column,
    ));

    debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Map a punctuator raw token to its `TokenKind`.
///
/// Valued tokens are cooked by the caller and never reach this function.
fn convert_punctuator(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Bang => TokenKind::Bang,
        RawToken::Dollar => TokenKind::Dollar,
        RawToken::Amp => TokenKind::Amp,
        RawToken::ParenL => TokenKind::ParenL,
        RawToken::ParenR => TokenKind::ParenR,
        RawToken::Spread => TokenKind::Spread,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Equals => TokenKind::Equals,
        RawToken::At => TokenKind::At,
        RawToken::BracketL => TokenKind::BracketL,
        RawToken::BracketR => TokenKind::BracketR,
        RawToken::BraceL => TokenKind::BraceL,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::BraceR => TokenKind::BraceR,
        RawToken::Comment => TokenKind::Comment,
        RawToken::Name => TokenKind::Name,
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::String => TokenKind::String,
        RawToken::BlockString => TokenKind::BlockString,
    }
}

/// Turn a logos failure at `offset` into a positioned error.
fn classify_error(source: &str, offset: usize, line: u32, column: u32) -> LexError {
    let rest = &source[offset..];
    if rest.starts_with("\"\"\"") {
        LexError::UnterminatedBlockString { line, column }
    } else if rest.starts_with('"') {
        LexError::UnterminatedString { line, column }
    } else {
        LexError::UnexpectedCharacter {
            found: rest.chars().next().unwrap_or('\0'),
            line,
            column,
        }
    }
}

/// Incremental byte offset to line/column conversion.
///
/// Offsets must be queried in non-decreasing order.
struct LineTracker<'src> {
    source: &'src str,
    scanned: usize,
    line: u32,
    line_start: usize,
}

impl<'src> LineTracker<'src> {
    fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            scanned: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// 1-based line and column of `offset`; columns count characters.
    fn position(&mut self, offset: usize) -> (u32, u32) {
        let bytes = self.source.as_bytes();
        let mut i = self.scanned;
        while i < offset {
            match bytes[i] {
                b'\n' => {
                    self.line += 1;
                    self.line_start = i + 1;
                }
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    self.line += 1;
                    self.line_start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }
        self.scanned = i;

        let column = self
            .source
            .get(self.line_start..offset)
            .map_or(0, |text| text.chars().count())
            + 1;
        (self.line, u32::try_from(column).unwrap_or(u32::MAX))
    }
}
