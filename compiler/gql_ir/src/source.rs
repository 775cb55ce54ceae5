//! Source text handles and token navigation.

use std::fmt;
use std::sync::Arc;

use crate::{Span, Token, TokenId, TokenKind, TokenList};

/// Source text together with every token lexed from it.
///
/// Produced once per parse and shared by all locations of the resulting
/// tree through an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct Source {
    body: String,
    tokens: TokenList,
}

impl Source {
    pub fn new(body: impl Into<String>, tokens: TokenList) -> Self {
        Source {
            body: body.into(),
            tokens,
        }
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Borrowed handle on token `id`, or `None` if out of range.
    pub fn token(&self, id: TokenId) -> Option<TokenRef<'_>> {
        self.tokens.get(id).map(|token| TokenRef {
            source: self,
            id,
            token,
        })
    }

    /// The start-of-file token.
    pub fn first(&self) -> Option<TokenRef<'_>> {
        self.token(TokenId::new(0))
    }

    /// The end-of-file token.
    pub fn last(&self) -> Option<TokenRef<'_>> {
        self.tokens.last_id().and_then(|id| self.token(id))
    }
}

/// Non-owning cursor on one token of a [`Source`].
///
/// Walks the doubly linked token stream without cloning tokens.
#[derive(Copy, Clone)]
pub struct TokenRef<'s> {
    source: &'s Source,
    id: TokenId,
    token: &'s Token,
}

impl<'s> TokenRef<'s> {
    #[inline]
    pub fn id(self) -> TokenId {
        self.id
    }

    #[inline]
    pub fn source(self) -> &'s Source {
        self.source
    }

    #[inline]
    pub fn token(self) -> &'s Token {
        self.token
    }

    #[inline]
    pub fn kind(self) -> TokenKind {
        self.token().kind
    }

    #[inline]
    pub fn value(self) -> &'s str {
        &self.token().value
    }

    #[inline]
    pub fn line(self) -> u32 {
        self.token().line
    }

    #[inline]
    pub fn span(self) -> Span {
        self.token().span
    }

    /// The previous token in the stream, comments included.
    pub fn prev(self) -> Option<TokenRef<'s>> {
        self.source.token(self.source.tokens.prev(self.id)?)
    }

    /// The next token in the stream, comments included.
    pub fn next(self) -> Option<TokenRef<'s>> {
        self.source.token(self.source.tokens.next(self.id)?)
    }
}

impl PartialEq for TokenRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.source, other.source)
    }
}

impl Eq for TokenRef<'_> {}

impl fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token();
        write!(f, "{:?}({:?}) @ {}:{}", token.kind, token.value, token.line, token.column)
    }
}

/// The tokens a node was parsed from.
///
/// `start` is the first and `end` the last token consumed for the node;
/// comments are never boundaries.
#[derive(Clone)]
pub struct Location {
    start: TokenId,
    end: TokenId,
    source: Arc<Source>,
}

impl Location {
    pub fn new(start: TokenId, end: TokenId, source: Arc<Source>) -> Self {
        Location { start, end, source }
    }

    #[inline]
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Cursor on the first token of the node.
    pub fn start_token(&self) -> Option<TokenRef<'_>> {
        self.source.token(self.start)
    }

    /// Cursor on the last token of the node.
    pub fn end_token(&self) -> Option<TokenRef<'_>> {
        self.source.token(self.end)
    }

    /// Byte range covered by the node.
    pub fn span(&self) -> Span {
        match (self.start_token(), self.end_token()) {
            (Some(start), Some(end)) => start.span().merge(end.span()),
            _ => Span::default(),
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.span())
    }
}
