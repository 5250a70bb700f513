//! Find references implementation.

use crate::base::SourceLocation;
use crate::hir::{Symbol, SymbolId, SymbolTable};
use crate::syntax::ReferenceAction;

use super::resolve::{parse_at_cursor, symbol_at};

/// Result of a find-references request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceResult {
    /// The symbol the references belong to.
    pub symbol: Option<SymbolId>,
    /// All references found.
    pub references: Vec<Reference>,
    /// Include the declaration and definition in the results.
    pub include_declaration: bool,
}

impl ReferenceResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            symbol: None,
            references: Vec::new(),
            include_declaration: false,
        }
    }

    /// Check if any references were found.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }
}

/// A recorded location of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub location: SourceLocation,
    /// What the compiler recorded at this location.
    pub action: ReferenceAction,
}

impl Reference {
    /// Whether this is the declaration or definition (vs a usage).
    pub fn is_definition(&self) -> bool {
        matches!(
            self.action,
            ReferenceAction::Declared | ReferenceAction::Defined
        )
    }
}

/// Find all references to the symbol under the cursor.
///
/// # Arguments
/// * `table` - The symbol table to resolve against
/// * `line` - Text of the line under the cursor
/// * `column` - Cursor column (1-based)
/// * `include_declaration` - Whether to include declaration and definition
///
/// # Returns
/// All recorded locations of the symbol, or empty if not found.
pub fn find_references(
    table: &SymbolTable,
    line: &str,
    column: usize,
    include_declaration: bool,
) -> ReferenceResult {
    let Some(ast) = parse_at_cursor(line) else {
        return ReferenceResult::empty();
    };
    match symbol_at(table, &ast, column) {
        Some(found) => references_of(found.symbol, include_declaration),
        None => ReferenceResult::empty(),
    }
}

/// All recorded locations of a symbol, declaration first, then by action.
pub fn references_of(symbol: &Symbol, include_declaration: bool) -> ReferenceResult {
    let references = symbol
        .locations()
        .into_iter()
        .map(|(action, location)| Reference {
            location: location.clone(),
            action,
        })
        .filter(|reference| include_declaration || !reference.is_definition())
        .collect();

    ReferenceResult {
        symbol: Some(symbol.id),
        references,
        include_declaration,
    }
}
