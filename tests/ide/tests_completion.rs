//! Domain-aware completion on the transport fixture.

use gamsls::ide::{CompletionItem, CompletionKind};
use rstest::rstest;

use crate::helpers::analysis_helpers::trnsport_analysis;

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_ref()).collect()
}

#[test]
fn test_expected_set_then_subsets() {
    let analysis = trnsport_analysis();
    let items = analysis.completions("x(i,", 5);

    assert_eq!(labels(&items), vec!["j", "ne", "ny_m", "seattle_m"]);
    assert_eq!(items[0].kind, CompletionKind::Set);
    assert!(items[0].sort_priority < items[1].sort_priority);
    assert!(items.iter().all(|item| item.insert_text.is_none()));
}

#[test]
fn test_first_position_appends_separator() {
    let analysis = trnsport_analysis();
    let items = analysis.completions("x(", 3);

    assert_eq!(labels(&items), vec!["i"]);
    assert_eq!(items[0].insert_text.as_deref(), Some("i,"));
}

#[rstest]
#[case("x(i,n", 6, vec!["ne", "ny_m"])]
#[case("x(i,N", 6, vec!["ne", "ny_m"])]
#[case("x(i,se", 7, vec!["seattle_m"])]
fn test_prefix_filters_candidates(
    #[case] line: &str,
    #[case] column: usize,
    #[case] expected: Vec<&str>,
) {
    let analysis = trnsport_analysis();
    assert_eq!(labels(&analysis.completions(line, column)), expected);
}

#[test]
fn test_outside_calls_offers_every_symbol() {
    let analysis = trnsport_analysis();
    let items = analysis.completions("sup", 4);
    assert_eq!(labels(&items), vec!["supply"]);
    assert_eq!(items[0].kind, CompletionKind::Equation);
    assert_eq!(items[0].detail.as_deref(), Some("Equation supply(i)"));

    assert_eq!(analysis.completions("", 1).len(), 13);
}

#[test]
fn test_unknown_function_offers_every_symbol() {
    let analysis = trnsport_analysis();
    let items = analysis.completions("card(", 6);
    assert_eq!(items.len(), 13);
}
