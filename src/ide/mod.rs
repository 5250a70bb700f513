//! IDE features: High-level APIs for editor handlers.
//!
//! This module joins the line parser with the semantic model (HIR). Each
//! function answers one editor request for a cursor on a single source line.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **1-based columns**: Matching the columns of the compiler's output
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```
//! use gamsls::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.load_reference_dump([
//!     "1 i 1 SET 0 plants",
//!     "2 j 1 SET 0 markets",
//!     "3 d 2 PARAM 2 1 2 distance",
//! ]);
//!
//! let analysis = host.analysis();
//! let items = analysis.completions("d(i,", 5);
//! assert_eq!(items[0].label.as_ref(), "j");
//! ```

mod analysis;
mod completion;
mod goto;
mod hover;
mod references;
mod resolve;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use references::{Reference, ReferenceResult, find_references, references_of};
pub use resolve::{DomainSlot, SymbolAtCursor, parse_at_cursor, slot_at, symbol_at};
pub use symbols::{SymbolInfo, document_symbols, workspace_symbols};
