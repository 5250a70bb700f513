//! Line expression parser for GAMS source
//!
//! Turns one line of source text into the symbol occurrences on it, with
//! exact column spans and call/argument attribution:
//! - **logos** for fast lexing
//! - a recursive-descent parser building a nested [`LineTree`]
//! - a flatten step producing [`LineAstEntry`] values
//!
//! ## Architecture
//!
//! ```text
//! Source line
//!     ↓
//! Lexer (logos) → Tokens with TokenKind and 1-based columns
//!     ↓
//! Parser → LineTree (calls and groups own their arguments)
//!     ↓
//! flatten → Vec<LineAstEntry> (one per leaf, nearest call attribution)
//! ```
//!
//! The parser runs on every keystroke. Callers that only need occurrences
//! should use [`line_entries`], which maps a [`ParseError`] to "no
//! occurrences on this line".

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod document;
pub mod errors;
mod flatten;
mod lexer;

pub use ast::{
    Argument, Call, EntryKind, Expr, Group, Leaf, LeafKind, LineAstEntry, LineTree,
};
pub use document::parse_document;
pub use errors::{ErrorCode, ParseError, ParseErrorKind};
pub use flatten::flatten;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{
    LineAst, is_comment_line, is_dollar_control_line, line_entries, parse_line, parse_line_ast,
    parse_line_tree,
};
