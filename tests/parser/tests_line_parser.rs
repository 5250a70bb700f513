//! Line parser behavior through the public API.

use gamsls::parser::{EntryKind, ParseErrorKind, line_entries, parse_line, parse_line_ast};
use rstest::rstest;

#[test]
fn test_call_with_quoted_argument() {
    let entries = parse_line(r#"demand(i,"US")"#).unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "i");
    assert_eq!(entries[0].argument_index, Some(0));
    assert_eq!(entries[0].enclosing_function_name.as_deref(), Some("demand"));

    assert_eq!(entries[1].name, "US");
    assert!(entries[1].is_quoted());
    assert_eq!(entries[1].argument_index, Some(1));
    assert_eq!(entries[1].enclosing_function_name.as_deref(), Some("demand"));
}

#[test]
fn test_trailing_empty_argument() {
    let entries = parse_line("p(i,)").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "i");
    assert_eq!(entries[0].argument_index, Some(0));
    assert!(entries[1].is_empty());
    assert_eq!(entries[1].kind, EntryKind::Empty);
    assert_eq!(entries[1].argument_index, Some(1));
}

#[rstest]
#[case("demand(i,\"US\")")]
#[case("z =e= sum((i,j), c(i,j)*x(i,j));")]
#[case("x.l(i,j)$(d(i,j) > 2) = 1.5 * a(i);")]
#[case("p(i,)")]
fn test_parsing_is_deterministic(#[case] line: &str) {
    assert_eq!(parse_line(line).unwrap(), parse_line(line).unwrap());
}

#[rstest]
#[case("d(i,j)", 2)]
#[case("f(a,b,c,'x',4)", 5)]
#[case("p()", 1)]
#[case("q(i,,k)", 3)]
fn test_argument_counts_match_leaf_runs(#[case] line: &str, #[case] leaves: usize) {
    let entries = parse_line(line).unwrap();
    assert_eq!(entries.len(), leaves);

    let mut total = 0;
    let mut index = 0;
    while index < entries.len() {
        let count = entries[index].argument_count.unwrap();
        total += count;
        index += count;
    }
    assert_eq!(total, leaves);
}

#[rstest]
#[case("d(i,j", ParseErrorKind::UnclosedCall)]
#[case("sum((i,j", ParseErrorKind::UnclosedGroup)]
#[case("a(i))", ParseErrorKind::UnexpectedClosingParen)]
#[case("p(\"US)", ParseErrorKind::UnterminatedString)]
fn test_malformed_lines_report_errors(#[case] line: &str, #[case] kind: ParseErrorKind) {
    let err = parse_line(line).unwrap_err();
    assert_eq!(err.kind, kind);
    assert!(line_entries(line).is_empty());
}

#[test]
fn test_entry_and_call_lookup_by_column() {
    let line = "cost =e= sum((i,j), c(i,j)*x(i,j));";
    let ast = parse_line_ast(line).unwrap();

    let column = line.find("c(").unwrap() + 1;
    assert_eq!(ast.call_at(column).unwrap().name, "c");

    let entry = ast.entry_at(column + 2).unwrap();
    assert_eq!(entry.name, "i");
    assert_eq!(entry.enclosing_function_name.as_deref(), Some("c"));
    assert!(entry.span().touches(column + 3));
}

#[rstest]
#[case("x.lo(i) = 1e-6;", vec!["i", "1e-6"])]
#[case("p(i) = 2E3 * q(i);", vec!["i", "2E3", "i"])]
#[case("obj.. z =e= sum(i, 1.e5 * c(i));", vec!["obj", "z", "i", "1.e5", "i"])]
#[case("supply(i).. sum(j, x(i,j)) =L= a(i);", vec!["i", "j", "i", "j", "i"])]
fn test_numbers_and_operators_add_no_identifiers(
    #[case] line: &str,
    #[case] expected: Vec<&str>,
) {
    let names: Vec<String> = parse_line(line)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name.to_string())
        .collect();
    assert_eq!(names, expected);
}
