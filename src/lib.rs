//! # gamsls-base
//!
//! Core library for GAMS static analysis from compiler artifacts: the
//! reference dump, the listing's include summary, and single source lines.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Settings, loading artifacts from disk
//!   ↓
//! ide       → IDE features (hover, completion, goto-def, references)
//!   ↓
//! hir       → Symbol table and include tree
//!   ↓
//! syntax    → Reference dump and listing record formats
//!   ↓
//! parser    → Logos lexer, recursive-descent line parser
//!   ↓
//! base      → Primitives (SourceLocation, ColumnSpan, text utilities)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → ide → project)
// ============================================================================

/// Foundation types: SourceLocation, ColumnSpan, word-at-cursor helpers
pub mod base;

/// Parser: Logos lexer, recursive-descent line parser, flattening
pub mod parser;

/// Syntax: compiler artifact records
pub mod syntax;

/// High-level IR: symbol table and include tree
pub mod hir;

/// IDE features: completion, hover, goto-definition, find-references
pub mod ide;

/// Project management: settings and artifact loading
pub mod project;

// Re-export foundation types
pub use base::{ColumnSpan, SourceLocation};
