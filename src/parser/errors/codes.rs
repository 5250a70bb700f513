//! Error code definitions for line parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (parentheses)
//! - E04xx: Expression errors

use std::fmt;

/// Error codes for line parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0102,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unexpected closing delimiter
    E0205,
    /// Unclosed function call
    E0404,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0203")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0102 => "E0102",
            Self::E0203 => "E0203",
            Self::E0205 => "E0205",
            Self::E0404 => "E0404",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0102 => "lexical error",
            Self::E0203 | Self::E0205 => "structural error",
            Self::E0404 => "expression error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0102 => "unterminated string literal",
            Self::E0203 => "unclosed parenthesis",
            Self::E0205 => "unexpected closing parenthesis",
            Self::E0404 => "unclosed function call",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
