//! Parse error types.

use gql_ir::{Token, TokenKind};
use gql_lexer::LexError;
use thiserror::Error;

/// A parse failure with its 1-based source position.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{line}:{column}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("{line}:{column}: unexpected {found}")]
    Unexpected { found: String, line: u32, column: u32 },

    #[error(
        "{line}:{column}: unexpected description, descriptions are supported only on type definitions"
    )]
    UnexpectedDescription { line: u32, column: u32 },

    #[error("{line}:{column}: unknown directive location {name:?}")]
    UnknownDirectiveLocation { name: String, line: u32, column: u32 },

    #[error("{line}:{column}: variable ${name} is not allowed in a constant value")]
    VariableInConstant { name: String, line: u32, column: u32 },
}

impl ParseError {
    pub(crate) fn expected(expected: impl Into<String>, found: &Token) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            found: describe(found),
            line: found.line,
            column: found.column,
        }
    }

    pub(crate) fn unexpected(found: &Token) -> Self {
        ParseError::Unexpected {
            found: describe(found),
            line: found.line,
            column: found.column,
        }
    }

    /// Line and column of the offending token.
    pub fn position(&self) -> (u32, u32) {
        match self {
            ParseError::Lex(error) => error.position(),
            ParseError::Expected { line, column, .. }
            | ParseError::Unexpected { line, column, .. }
            | ParseError::UnexpectedDescription { line, column }
            | ParseError::UnknownDirectiveLocation { line, column, .. }
            | ParseError::VariableInConstant { line, column, .. } => (*line, *column),
        }
    }
}

/// Token description for messages: the kind, plus the text for valued
/// tokens.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Name | TokenKind::Int | TokenKind::Float => {
            format!("{} {:?}", token.kind, &*token.value)
        }
        kind => kind.describe().to_owned(),
    }
}
