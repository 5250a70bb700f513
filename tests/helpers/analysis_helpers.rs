//! Builders for analysis snapshots used across the IDE tests.

use gamsls::hir::{IncludeTreeOptions, SymbolTable, build_include_tree, build_reference_tree};
use gamsls::ide::{Analysis, AnalysisHost};
use gamsls::syntax::parse_include_summary;

use super::source_fixtures::{TRNSPORT_DUMP, TRNSPORT_LISTING};

/// Symbol table of the transport fixture.
pub fn trnsport_table() -> SymbolTable {
    build_reference_tree(TRNSPORT_DUMP.lines())
}

/// Host loaded with both transport artifacts.
pub fn trnsport_host() -> AnalysisHost {
    let host = AnalysisHost::new();
    host.load_reference_dump(TRNSPORT_DUMP.lines());
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    host.load_include_summary(&records, &IncludeTreeOptions::default());
    host
}

/// Snapshot of the transport fixture.
pub fn trnsport_analysis() -> Analysis {
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    Analysis::new(
        trnsport_table(),
        build_include_tree(&records, &IncludeTreeOptions::default()),
    )
}

/// Column (1-based) of the first occurrence of `needle` in `line`.
pub fn column_of(line: &str, needle: &str) -> usize {
    let byte = line.find(needle).unwrap();
    line[..byte].chars().count() + 1
}
