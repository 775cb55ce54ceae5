//! Token types for the GraphQL lexer.
//!
//! Unlike a compiler token stream, comments are real tokens here: the
//! printer walks them to reattach comments to the nodes they describe.

mod list;

pub use list::TokenList;

use std::fmt;

use crate::Span;

/// Index of a token inside its `TokenList`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TokenId(u32);

impl TokenId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TokenId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

/// Lexical token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Start of file, always the first token.
    Sof,
    /// End of file, always the last token.
    Eof,
    Bang,
    Dollar,
    Amp,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    Pipe,
    BraceR,
    Name,
    Int,
    Float,
    String,
    BlockString,
    /// `#` comment; the value excludes the leading `#`.
    Comment,
}

impl TokenKind {
    /// Human-readable description used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Sof => "<SOF>",
            TokenKind::Eof => "<EOF>",
            TokenKind::Bang => "\"!\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Amp => "\"&\"",
            TokenKind::ParenL => "\"(\"",
            TokenKind::ParenR => "\")\"",
            TokenKind::Spread => "\"...\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::At => "\"@\"",
            TokenKind::BracketL => "\"[\"",
            TokenKind::BracketR => "\"]\"",
            TokenKind::BraceL => "\"{\"",
            TokenKind::Pipe => "\"|\"",
            TokenKind::BraceR => "\"}\"",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its position in the source.
///
/// `value` holds the cooked text: names and numbers verbatim, strings
/// unescaped, block strings dedented, comments without the `#`.
/// Punctuators carry an empty value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
    pub value: Box<str>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32, value: impl Into<Box<str>>) -> Self {
        Token {
            kind,
            span,
            line,
            column,
            value: value.into(),
        }
    }

    /// A token without a cooked value.
    pub fn punctuator(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Token::new(kind, span, line, column, "")
    }
}
