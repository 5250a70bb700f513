//! Snapshot handling of the analysis host.

use gamsls::hir::IncludeTreeOptions;
use gamsls::syntax::parse_include_summary;

use crate::helpers::analysis_helpers::trnsport_host;
use crate::helpers::source_fixtures::TRNSPORT_LISTING;

#[test]
fn test_host_serves_both_models() {
    let host = trnsport_host();
    let analysis = host.analysis();
    assert_eq!(analysis.symbol_table().len(), 13);
    assert_eq!(analysis.include_tree().unwrap().len(), 6);
    assert!(analysis.hover("d(i,j)", 1).is_some());
}

#[test]
fn test_snapshots_survive_reload() {
    let host = trnsport_host();
    let before = host.analysis();

    host.load_reference_dump(["1 k 1 SET 0 other"]);
    let after = host.analysis();

    assert_eq!(before.symbol_table().len(), 13);
    assert!(before.symbol_table().lookup("x").is_some());
    assert_eq!(after.symbol_table().len(), 1);
    assert!(after.include_tree().is_some());
}

#[test]
fn test_reloading_includes_with_filters() {
    let host = trnsport_host();
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    host.load_include_summary(&records, &IncludeTreeOptions::new().with_ignored_type("GDXIN"));
    assert_eq!(host.analysis().include_tree().unwrap().len(), 5);

    host.set_include_tree(None);
    assert!(host.analysis().include_tree().is_none());
}
