//! Line parser error types

use thiserror::Error;

use super::codes::ErrorCode;

/// What went wrong while parsing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A call like `p(i` was never closed.
    #[error("unclosed function call")]
    UnclosedCall,
    /// A bare `(` was never closed.
    #[error("unclosed parenthesis")]
    UnclosedGroup,
    #[error("unexpected closing parenthesis")]
    UnexpectedClosingParen,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnterminatedString => ErrorCode::E0102,
            Self::UnclosedCall => ErrorCode::E0404,
            Self::UnclosedGroup => ErrorCode::E0203,
            Self::UnexpectedClosingParen => ErrorCode::E0205,
        }
    }
}

/// A malformed source line.
///
/// Callers treat this as "no occurrences on this line"; it is never meant
/// to abort an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {kind} at column {column}", code = .kind.code())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based column of the offending character (for unclosed
    /// parentheses, the opening one).
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, column: usize) -> Self {
        Self { kind, column }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}
