//! Token cursor for navigating the token stream.
//!
//! Provides lookahead and consumption over significant tokens. Comment
//! tokens stay in the underlying list but the cursor steps over them.

use gql_ir::{Token, TokenId, TokenKind, TokenList};
use tracing::trace;

/// Cursor over the significant tokens of one source.
///
/// Invariant: the list starts with SOF and ends with EOF, so `pos` always
/// indexes a real token and advancing past EOF stays on EOF.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Last consumed token, the end of the node being built.
    last: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor on the start-of-file token.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
            last: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_id(&self) -> TokenId {
        Self::id(self.pos)
    }

    /// Id of the last consumed token.
    #[inline]
    pub fn last_id(&self) -> TokenId {
        Self::id(self.last)
    }

    /// The significant token `n` positions ahead; `peek(0)` is current.
    pub fn peek(&self, n: usize) -> &'a Token {
        let mut pos = self.pos;
        for _ in 0..n {
            pos = self.next_significant(pos);
        }
        &self.tokens[pos]
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Check for a name token with the given text.
    #[inline]
    pub fn check_keyword(&self, keyword: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Name && &*token.value == keyword
    }

    /// Consume the current token.
    pub fn advance(&mut self) {
        trace!(kind = ?self.current_kind(), "advance");
        self.last = self.pos;
        self.pos = self.next_significant(self.pos);
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn next_significant(&self, from: usize) -> usize {
        self.tokens
            .iter()
            .enumerate()
            .skip(from + 1)
            .find(|(_, token)| token.kind != TokenKind::Comment)
            .map_or(from, |(index, _)| index)
    }

    fn id(index: usize) -> TokenId {
        TokenId::new(u32::try_from(index).unwrap_or(u32::MAX))
    }
}
