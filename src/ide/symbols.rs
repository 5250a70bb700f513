//! Symbol listing for workspace and document views.

use std::path::Path;

use smol_str::SmolStr;

use crate::base::SourceLocation;
use crate::hir::{Symbol, SymbolId, SymbolKind, SymbolTable};

/// A symbol for the workspace symbol list or document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    pub id: SymbolId,
    /// Symbol name.
    pub name: SmolStr,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Declaration-style signature, e.g. `d(i,j)`.
    pub signature: String,
    /// Where the symbol is declared, if the dump says.
    pub location: Option<SourceLocation>,
}

impl SymbolInfo {
    pub fn from_symbol(symbol: &Symbol, table: &SymbolTable) -> Self {
        Self {
            id: symbol.id,
            name: symbol.name.clone(),
            kind: symbol.kind.clone(),
            signature: format!("{}{}", symbol.name, table.domain_signature(symbol)),
            location: symbol
                .declared_at
                .clone()
                .or_else(|| symbol.defined_at.clone()),
        }
    }
}

/// Get all symbols, optionally filtered by a query.
///
/// # Arguments
/// * `table` - The symbol table to list
/// * `query` - Optional search query (case-insensitive substring match)
///
/// # Returns
/// List of matching symbols, sorted by name.
pub fn workspace_symbols(table: &SymbolTable, query: Option<&str>) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());

    let mut results: Vec<SymbolInfo> = table
        .symbols()
        .filter(|sym| match &query_lower {
            Some(q) => sym.name_lowercase.contains(q.as_str()),
            None => true,
        })
        .map(|sym| SymbolInfo::from_symbol(sym, table))
        .collect();

    results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    results
}

/// Get all symbols declared in a file, for document outline.
///
/// # Returns
/// List of symbols in the file, in source order.
pub fn document_symbols(table: &SymbolTable, file: &Path) -> Vec<SymbolInfo> {
    let mut results: Vec<SymbolInfo> = table
        .symbols()
        .map(|sym| SymbolInfo::from_symbol(sym, table))
        .filter(|info| info.location.as_ref().is_some_and(|loc| loc.file == file))
        .collect();

    results.sort_by_key(|info| {
        info.location
            .as_ref()
            .map(|loc| (loc.line, loc.column))
            .unwrap_or_default()
    });
    results
}
