//! Semantic model: symbols and includes of one compile.
//!
//! Both models are built in one go from compiler artifacts and never
//! mutated afterwards. A new compile produces a new model that replaces the
//! old one wholesale.
//!
//! ## Key Types
//!
//! - [`SymbolTable`] - every symbol with locations, domains and subsets
//! - [`Symbol`], [`SymbolKind`], [`DomainRef`] - one entry of the table
//! - [`IncludeTree`] - files pulled in during compilation, as an arena
//!
//! ```text
//! reference dump lines ── build_reference_tree ──▶ SymbolTable
//! include summary rows ── build_include_tree ────▶ IncludeTree
//! ```

mod include_tree;
mod symbol_table;
mod symbols;

pub use include_tree::{
    INPUT_RECORD_TYPE, IncludeNode, IncludeNodeId, IncludeTree, IncludeTreeOptions,
    build_include_tree,
};
pub use symbol_table::{SymbolTable, build_reference_tree};
pub use symbols::{DomainRef, Symbol, SymbolId, SymbolKind};
