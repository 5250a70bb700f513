//! Artifact record classification.

use gamsls::syntax::{
    MalformedReason, ReferenceAction, ReferenceRecord, parse_include_summary,
};
use rstest::rstest;

use crate::helpers::source_fixtures::{TRNSPORT_DUMP, TRNSPORT_LISTING};

#[test]
fn test_fixture_dump_classifies_cleanly() {
    let mut definitions = 0;
    let mut locations = 0;
    for line in TRNSPORT_DUMP.lines() {
        match ReferenceRecord::parse(line).unwrap() {
            ReferenceRecord::Definition(_) => definitions += 1,
            ReferenceRecord::Location(_) => locations += 1,
            ReferenceRecord::Ignored => {}
        }
    }
    assert_eq!(definitions, 13);
    assert_eq!(locations, 17);
}

#[rstest]
#[case("declared", ReferenceAction::Declared)]
#[case("DEFINED", ReferenceAction::Defined)]
#[case("assigned", ReferenceAction::Assigned)]
#[case("ref", ReferenceAction::Referenced)]
#[case("control", ReferenceAction::Controlled)]
fn test_known_actions(#[case] keyword: &str, #[case] action: ReferenceAction) {
    assert_eq!(ReferenceAction::parse(keyword), action);
}

#[test]
fn test_unknown_action_is_kept() {
    let action = ReferenceAction::parse("impl-asn");
    assert_eq!(action, ReferenceAction::Other("impl-asn".into()));
    assert_eq!(action.as_str(), "impl-asn");
}

#[test]
fn test_truncated_domain_is_malformed() {
    let err = ReferenceRecord::parse("8 d 2 PARAM 2 1").unwrap_err();
    assert!(matches!(err, MalformedReason::TruncatedDomain { expected: 2, found: 1 }));
}

#[test]
fn test_fixture_include_summary() {
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    assert_eq!(records.len(), 6);

    assert_eq!(records[0].record_type, "INPUT");
    assert_eq!(records[0].filename, "/work/My Models/wrapper.gms");
    assert_eq!(records[3].record_type, "GDXIN");
    assert_eq!(records[3].filename, "/work/My Models/dist.gdx");
    assert_eq!(records[4].parent_index, 2);
    assert_eq!(records[4].local_line, 46);
}

#[test]
fn test_listing_without_summary() {
    assert!(parse_include_summary("GAMS 45.1.0\nCOMPILATION TIME\n").is_err());
}
