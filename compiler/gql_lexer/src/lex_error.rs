//! Lexer error types.

use thiserror::Error;

/// A lexing failure with its 1-based source position.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    #[error("{line}:{column}: unexpected character {found:?}")]
    UnexpectedCharacter { found: char, line: u32, column: u32 },

    #[error("{line}:{column}: unterminated string")]
    UnterminatedString { line: u32, column: u32 },

    #[error("{line}:{column}: unterminated block string")]
    UnterminatedBlockString { line: u32, column: u32 },

    #[error("{line}:{column}: invalid escape sequence {sequence:?}")]
    InvalidEscape {
        sequence: String,
        line: u32,
        column: u32,
    },
}

impl LexError {
    /// Line and column where the offending token starts.
    pub fn position(&self) -> (u32, u32) {
        match self {
            LexError::UnexpectedCharacter { line, column, .. }
            | LexError::UnterminatedString { line, column }
            | LexError::UnterminatedBlockString { line, column }
            | LexError::InvalidEscape { line, column, .. } => (*line, *column),
        }
    }
}
