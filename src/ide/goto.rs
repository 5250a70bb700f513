//! Go-to-definition implementation.

use smol_str::SmolStr;

use crate::base::SourceLocation;
use crate::hir::{Symbol, SymbolKind, SymbolTable};

use super::resolve::{parse_at_cursor, symbol_at};

/// Result of a go-to-definition request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub location: SourceLocation,
    /// The symbol kind.
    pub kind: SymbolKind,
    /// The symbol name.
    pub name: SmolStr,
}

impl GotoTarget {
    /// Target the definition of a symbol, falling back to its declaration.
    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        Some(Self {
            location: symbol.definition_location()?.clone(),
            kind: symbol.kind.clone(),
            name: symbol.name.clone(),
        })
    }
}

/// Find the definition of the symbol under the cursor.
///
/// # Arguments
/// * `table` - The symbol table to resolve against
/// * `line` - Text of the line under the cursor
/// * `column` - Cursor column (1-based)
///
/// # Returns
/// The location of the definition, or empty if the symbol is unknown or
/// the dump recorded neither a definition nor a declaration.
pub fn goto_definition(table: &SymbolTable, line: &str, column: usize) -> GotoResult {
    parse_at_cursor(line)
        .and_then(|ast| symbol_at(table, &ast, column).map(|found| found.symbol))
        .and_then(GotoTarget::from_symbol)
        .map_or_else(GotoResult::empty, GotoResult::single)
}
