//! Foundation types for the gamsls toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SourceLocation`] - 1-based line/column position inside a named file
//! - [`ColumnSpan`] - 1-based, end-exclusive column range on a single line
//! - word-at-cursor helpers in [`text_utils`]
//!
//! This module has NO dependencies on other gamsls modules.

mod location;
mod span;
pub mod text_utils;

pub use location::SourceLocation;
pub use span::ColumnSpan;
