//! AnalysisHost and Analysis: snapshot management for IDE features.
//!
//! The `AnalysisHost` holds the current snapshot and hands out `Analysis`
//! values for querying. A rebuild constructs a complete new model off to the
//! side and swaps it in at once; queries running on an older `Analysis` keep
//! seeing the old model until they finish.
//!
//! ## Usage
//!
//! ```
//! use gamsls::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.load_reference_dump("1 i 1 SET 0 plants".lines());
//!
//! let analysis = host.analysis();
//! assert!(analysis.hover("sum(i, 1)", 5).is_some());
//! ```

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::hir::{
    IncludeTree, IncludeTreeOptions, SymbolTable, build_include_tree, build_reference_tree,
};
use crate::syntax::IncludeFileSummaryRecord;

use super::{CompletionItem, GotoResult, HoverResult, ReferenceResult, SymbolInfo};

/// Owns the current analysis snapshot.
///
/// Replace parts with `set_symbol_table()` / `set_include_tree()` or the
/// `load_*` helpers, then get a consistent snapshot via `analysis()`.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    current: RwLock<Analysis>,
}

impl AnalysisHost {
    /// Create a host with empty models.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a consistent snapshot for querying.
    pub fn analysis(&self) -> Analysis {
        self.current.read().clone()
    }

    /// Swap in a new symbol table.
    pub fn set_symbol_table(&self, table: SymbolTable) {
        let table = Arc::new(table);
        self.current.write().symbols = table;
    }

    /// Swap in a new include tree, or clear it when the listing had none.
    pub fn set_include_tree(&self, tree: Option<IncludeTree>) {
        let tree = tree.map(Arc::new);
        self.current.write().includes = tree;
    }

    /// Replace the whole snapshot.
    pub fn set_analysis(&self, analysis: Analysis) {
        *self.current.write() = analysis;
    }

    /// Rebuild the symbol table from reference dump lines.
    pub fn load_reference_dump<I>(&self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.set_symbol_table(build_reference_tree(lines));
    }

    /// Rebuild the include tree from include summary rows.
    pub fn load_include_summary(
        &self,
        records: &[IncludeFileSummaryRecord],
        options: &IncludeTreeOptions,
    ) {
        self.set_include_tree(build_include_tree(records, options));
    }
}

/// An immutable snapshot of the analysis state.
///
/// Cheap to clone. All IDE queries go through this struct to ensure
/// consistent results.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    symbols: Arc<SymbolTable>,
    includes: Option<Arc<IncludeTree>>,
}

impl Analysis {
    pub fn new(symbols: SymbolTable, includes: Option<IncludeTree>) -> Self {
        Self {
            symbols: Arc::new(symbols),
            includes: includes.map(Arc::new),
        }
    }

    // ==================== Cursor features ====================

    /// Get hover information at a cursor column (1-based) of a line.
    pub fn hover(&self, line: &str, column: usize) -> Option<HoverResult> {
        super::hover(&self.symbols, line, column)
    }

    /// Go to definition at a cursor column.
    pub fn goto_definition(&self, line: &str, column: usize) -> GotoResult {
        super::goto_definition(&self.symbols, line, column)
    }

    /// Find all references to the symbol at a cursor column.
    pub fn find_references(
        &self,
        line: &str,
        column: usize,
        include_declaration: bool,
    ) -> ReferenceResult {
        super::find_references(&self.symbols, line, column, include_declaration)
    }

    /// Get completions at a cursor column.
    pub fn completions(&self, line: &str, column: usize) -> Vec<CompletionItem> {
        super::completions(&self.symbols, line, column)
    }

    // ==================== Listings ====================

    /// Get all symbols declared in a file.
    pub fn document_symbols(&self, file: &Path) -> Vec<SymbolInfo> {
        super::document_symbols(&self.symbols, file)
    }

    /// Search for symbols across the compile.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        super::workspace_symbols(&self.symbols, query)
    }

    // ==================== Accessors ====================

    /// Get the symbol table.
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Get the include tree, if the listing had an include summary.
    pub fn include_tree(&self) -> Option<&IncludeTree> {
        self.includes.as_deref()
    }
}
