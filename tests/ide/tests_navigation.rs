//! Hover, goto-definition, references and symbol listings on the
//! transport fixture.

use std::path::Path;

use gamsls::syntax::ReferenceAction;

use crate::helpers::analysis_helpers::{column_of, trnsport_analysis};

const EQUATION: &str = "supply(i) .. sum(j, x(i,j)) =l= a(i);";

#[test]
fn test_hover_call_name() {
    let analysis = trnsport_analysis();
    let hover = analysis.hover(EQUATION, column_of(EQUATION, "x(")).unwrap();

    assert!(hover.contents.contains("Variable x(i,j)"));
    assert!(hover.contents.contains("shipment quantities in cases"));
    assert!(hover.contents.contains("trnsport.gms:50:10"));
    assert!(!hover.contents.contains("**Position"));
    assert_eq!(hover.span.len(), 1);
}

#[test]
fn test_hover_argument_shows_expected_domain() {
    let analysis = trnsport_analysis();
    let column = column_of(EQUATION, "j)) ");
    let hover = analysis.hover(EQUATION, column).unwrap();

    assert_eq!(hover.symbol, analysis.symbol_table().lookup("j").unwrap().id);
    assert!(hover.contents.contains("Set j"));
    assert!(hover.contents.contains("**Position 2 of `x`**, expects `j`"));
    assert!(hover.contents.contains("**Subsets:** `seattle_m`, `ny_m`, `ne`"));
}

#[test]
fn test_hover_subset_names_its_superset() {
    let analysis = trnsport_analysis();
    let hover = analysis.hover("ne", 1).unwrap();
    assert!(hover.contents.contains("**Subset of:** `ny_m`"));
}

#[test]
fn test_hover_nothing_on_literals_and_unknowns() {
    let analysis = trnsport_analysis();
    assert!(analysis.hover(r#"d("seattle",j)"#, 4).is_none());
    assert!(analysis.hover("unknown(i)", 2).is_none());
    assert!(analysis.hover("x = 1.5;", 6).is_none());
}

#[test]
fn test_goto_definition_prefers_defined_location() {
    let analysis = trnsport_analysis();
    let line = "c(i,j) = 90 * d(i,j) / 1000;";
    let result = analysis.goto_definition(line, column_of(line, "d("));

    assert_eq!(result.targets.len(), 1);
    let target = &result.targets[0];
    assert_eq!(target.name, "d");
    assert_eq!(target.location.file_base, "distances");
    assert_eq!((target.location.line, target.location.column), (3, 1));
}

#[test]
fn test_goto_definition_falls_back_to_declaration() {
    let analysis = trnsport_analysis();
    let result = analysis.goto_definition(EQUATION, column_of(EQUATION, "x("));
    assert_eq!(result.targets[0].location.line, 50);
}

#[test]
fn test_goto_definition_without_locations() {
    let analysis = trnsport_analysis();
    assert!(analysis.goto_definition("b(j)", 1).is_empty());
}

#[test]
fn test_find_references() {
    let analysis = trnsport_analysis();
    let column = column_of(EQUATION, "x(");

    let all = analysis.find_references(EQUATION, column, true);
    let actions: Vec<&ReferenceAction> = all.references.iter().map(|r| &r.action).collect();
    assert_eq!(
        actions,
        vec![
            &ReferenceAction::Declared,
            &ReferenceAction::Referenced,
            &ReferenceAction::Referenced,
            &ReferenceAction::Other("impl-asn".into()),
        ]
    );

    let usages = analysis.find_references(EQUATION, column, false);
    assert_eq!(usages.len(), 3);
    assert!(usages.references.iter().all(|r| !r.is_definition()));
}

#[test]
fn test_workspace_symbols() {
    let analysis = trnsport_analysis();
    let names: Vec<String> = analysis
        .workspace_symbols(Some("_M"))
        .into_iter()
        .map(|info| info.name.to_string())
        .collect();
    assert_eq!(names, vec!["ny_m", "seattle_m"]);
    assert_eq!(analysis.workspace_symbols(None).len(), 13);
}

#[test]
fn test_document_symbols_in_source_order() {
    let analysis = trnsport_analysis();
    let names: Vec<String> = analysis
        .document_symbols(Path::new("/work/My Models/trnsport.gms"))
        .into_iter()
        .map(|info| info.name.to_string())
        .collect();
    assert_eq!(names, vec!["i", "j", "d", "c", "x", "supply", "transport"]);
}
