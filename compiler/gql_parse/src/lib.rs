//! Recursive descent parser for GraphQL.
//!
//! Parses executable and type-system documents, extensions included, into
//! the `gql_ir` syntax tree. Every node records a [`Location`] spanning its
//! first and last significant token; the token list, comments included, is
//! shared by all locations through one `Arc<Source>`.
//!
//! # Grammar Modules
//!
//! - `grammar::executable`: documents, operations, selections, fragments
//! - `grammar::value`: values, directives, type references
//! - `grammar::type_system`: schema/type/directive definitions and extensions

mod cursor;
mod error;
mod grammar;
mod stack;

pub use cursor::Cursor;
pub use error::ParseError;

use std::sync::Arc;

use gql_ir::ast::Document;
use gql_ir::{Location, Source, Token, TokenId, TokenKind};
use tracing::debug;

type ParseResult<T> = Result<T, ParseError>;

/// Parser configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions {
    /// Build the tree without locations. Printers then find no comments.
    pub no_location: bool,
}

/// Parse a document, recording locations.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parse a document with explicit options.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
    let tokens = gql_lexer::lex(source)?;
    let source = Arc::new(Source::new(source, tokens));
    let mut parser = Parser::new(&source, options);
    let document = parser.parse_document()?;
    debug!(definitions = document.definitions.len(), "parsed");
    Ok(document)
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a Arc<Source>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Arc<Source>, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(source.tokens()),
            source,
            options,
        }
    }

    /// Location from `start` through the last consumed token.
    fn loc(&self, start: TokenId) -> Option<Location> {
        if self.options.no_location {
            None
        } else {
            Some(Location::new(
                start,
                self.cursor.last_id(),
                Arc::clone(self.source),
            ))
        }
    }

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn start(&self) -> TokenId {
        self.cursor.current_id()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.cursor.eat_keyword(keyword)
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(ParseError::expected(kind.describe(), self.current()))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(ParseError::expected(format!("\"{keyword}\""), self.current()))
        }
    }

    /// `open item+ close`
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        loop {
            nodes.push(item(self)?);
            if self.eat(close) {
                return Ok(nodes);
            }
        }
    }

    /// `(open item+ close)?`
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        if self.check(open) {
            self.many(open, item, close)
        } else {
            Ok(Vec::new())
        }
    }

    /// `open item* close`
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        while !self.eat(close) {
            nodes.push(item(self)?);
        }
        Ok(nodes)
    }

    /// `delimiter? item (delimiter item)*`
    fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.eat(delimiter);
        let mut nodes = Vec::new();
        loop {
            nodes.push(item(self)?);
            if !self.eat(delimiter) {
                return Ok(nodes);
            }
        }
    }
}
