//! GQL IR - syntax tree and token stream types
//!
//! This crate contains the data structures shared by the lexer, the parser,
//! and the printer:
//! - Spans for byte ranges in the source
//! - Tokens and `TokenList` for lexer output, comments included
//! - `Source`, the shared handle pairing source text with its tokens
//! - AST nodes for executable and type-system documents
//! - `NodeRef`, a borrowed view over any node with child enumeration
//!
//! # Design Philosophy
//!
//! - **Index, don't link**: tokens live in one arena per source and are
//!   addressed by `TokenId`; prev/next navigation is index arithmetic.
//! - **Owned tree**: nodes own their children, so a tree can never be
//!   cyclic or shared.
//! - **Shared source**: every `Location` of one parse holds the same
//!   `Arc<Source>`, which keeps nodes `Send + Sync`.

pub mod ast;
mod source;
mod span;
mod token;

pub use ast::{ChildKey, NodeChild, NodeKind, NodeRef};
pub use source::{Location, Source, TokenRef};
pub use span::Span;
pub use token::{Token, TokenId, TokenKind, TokenList};
