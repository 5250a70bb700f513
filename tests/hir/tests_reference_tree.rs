//! Symbol table construction from reference dumps.

use gamsls::hir::{DomainRef, SymbolId, SymbolKind, build_reference_tree};
use rstest::rstest;

use crate::helpers::analysis_helpers::trnsport_table;

#[test]
fn test_universe_domain_is_not_a_subset() {
    let table = build_reference_tree([
        "5 k 1 SET 1 0 anything goes",
        "1 5 k SET declared 3 3 5 0 1 /work/model.gms",
    ]);
    let k = table.get(SymbolId(5)).unwrap();
    assert_eq!(k.domain, vec![DomainRef::Universe]);
    assert_eq!(table.domain_name(k.domain[0]), "*");
    assert!(!k.is_subset);
    assert_eq!(k.superset, None);
}

#[test]
fn test_fixture_symbols() {
    let table = trnsport_table();
    assert_eq!(table.len(), 13);
    assert!(table.diagnostics().is_empty());

    let d = table.lookup("d").unwrap();
    assert_eq!(d.kind, SymbolKind::Parameter);
    assert_eq!(table.domain_signature(d), "(i,j)");
    assert_eq!(d.description, "distance in thousands of miles");
    assert_eq!(d.definition_location().unwrap().file_base, "distances");

    let x = table.lookup("x").unwrap();
    assert_eq!(x.referenced_at.len(), 2);
    assert_eq!(x.other_actions["impl-asn"].len(), 1);
}

#[test]
fn test_subset_closure_is_transitive() {
    let table = trnsport_table();
    let j = table.lookup("j").unwrap();
    let ny_m = table.lookup("ny_m").unwrap();
    let ne = table.lookup("ne").unwrap();

    assert!(ne.is_subset);
    assert_eq!(ne.superset, Some(ny_m.id));
    assert!(ny_m.subsets.contains(&ne.id));
    assert!(j.subsets.contains(&ny_m.id));
    assert!(j.subsets.contains(&ne.id));
    assert_eq!(table.superset_chain(ne.id), vec![ny_m.id, j.id]);
    assert!(table.is_within(ne.id, j.id));
    assert!(!table.is_within(j.id, ne.id));
}

#[rstest]
#[case("seattle_m")]
#[case("SEATTLE_M")]
#[case("Seattle_M")]
fn test_lookup_ignores_case(#[case] name: &str) {
    let table = trnsport_table();
    let symbol = table.lookup(name).unwrap();
    assert_eq!(symbol.id, SymbolId(3));
    assert_eq!(symbol.name, "seattle_m");
}

#[test]
fn test_locations_are_never_synthesized() {
    let table = trnsport_table();
    let b = table.lookup("b").unwrap();
    assert!(b.declared_at.is_none());
    assert!(b.defined_at.is_none());
    assert!(b.locations().is_empty());
}

#[test]
fn test_bad_lines_do_not_stop_the_build() {
    let table = build_reference_tree([
        "1 i 1 SET 0 plants",
        "garbage line",
        "2 d 2 PARAM 2 1",
        "3 c 2 PARAM 1 1 cost",
    ]);
    assert_eq!(table.len(), 2);
    assert!(table.lookup("d").is_none());
    assert_eq!(table.diagnostics().len(), 2);
    assert_eq!(table.diagnostics()[0].line_number, 2);
    assert_eq!(table.lookup("c").unwrap().domain, vec![DomainRef::Set(SymbolId(1))]);
}
