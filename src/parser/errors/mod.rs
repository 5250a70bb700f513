//! Parser error handling module
//!
//! Errors raised by the line expression parser carry:
//! - a categorized error code for filtering and documentation
//! - the 1-based column the problem was detected at

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, ParseErrorKind};
