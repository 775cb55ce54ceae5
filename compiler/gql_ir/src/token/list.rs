//! Arena of tokens for one source text.

use super::{Token, TokenId};

/// All tokens of one source, comments included, in source order.
///
/// Tokens are addressed by [`TokenId`]; the previous and next token of any
/// token are its neighbours in this list.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token and return its id.
    pub fn push(&mut self, token: Token) -> TokenId {
        let index = u32::try_from(self.tokens.len()).unwrap_or(u32::MAX);
        self.tokens.push(token);
        TokenId::new(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    /// Id of the token preceding `id`, if any.
    #[inline]
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        id.index().checked_sub(1).and_then(Self::id_at)
    }

    /// Id of the token following `id`, if any.
    #[inline]
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let index = id.index() + 1;
        if index < self.tokens.len() {
            Self::id_at(index)
        } else {
            None
        }
    }

    /// Id of the last token.
    #[inline]
    pub fn last_id(&self) -> Option<TokenId> {
        self.tokens.len().checked_sub(1).and_then(Self::id_at)
    }

    #[inline]
    fn id_at(index: usize) -> Option<TokenId> {
        u32::try_from(index).ok().map(TokenId::new)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
