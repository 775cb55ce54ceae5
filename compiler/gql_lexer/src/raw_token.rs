//! Raw token definitions for the logos-based tokenizer.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! values are cooked. Commas, whitespace, line terminators, and the BOM are
//! insignificant in GraphQL and skipped here; line numbers are recovered
//! from the source text by the caller.

use logos::Logos;

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t,\r\n\u{FEFF}]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n\r]*")]
    Comment,

    #[token("!")]
    Bang,
    #[token("$")]
    Dollar,
    #[token("&")]
    Amp,
    #[token("(")]
    ParenL,
    #[token(")")]
    ParenR,
    #[token("...")]
    Spread,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("@")]
    At,
    #[token("[")]
    BracketL,
    #[token("]")]
    BracketR,
    #[token("{")]
    BraceL,
    #[token("|")]
    Pipe,
    #[token("}")]
    BraceR,

    #[regex(r"[_A-Za-z][_0-9A-Za-z]*")]
    Name,

    #[regex(r"-?(0|[1-9][0-9]*)")]
    Int,

    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)")]
    Float,

    // String literal (no unescaped line terminators allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[token("\"\"\"", lex_block_string)]
    BlockString,
}

/// Consume a block string body up to and including the closing `"""`.
///
/// `\"""` inside the body is an escaped delimiter, not a terminator.
fn lex_block_string(lex: &mut logos::Lexer<RawToken>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        if rest[i..].starts_with(b"\\\"\"\"") {
            i += 4;
        } else if rest[i..].starts_with(b"\"\"\"") {
            lex.bump(i + 3);
            return true;
        } else {
            i += 1;
        }
    }
    false
}
