//! Include tree reconstruction from summary rows.

use gamsls::hir::{IncludeTree, IncludeTreeOptions, build_include_tree};
use gamsls::syntax::{IncludeFileSummaryRecord, parse_include_summary};

use crate::helpers::source_fixtures::TRNSPORT_LISTING;

fn row(seq: u32, record_type: &str, parent: u32, file: &str) -> IncludeFileSummaryRecord {
    IncludeFileSummaryRecord::new(seq, seq, record_type, parent, 0, file)
}

fn child_files(tree: &IncludeTree, file: &str) -> Vec<String> {
    let node = tree.find_by_file(file)[0];
    tree.children(node.id).map(|n| n.filename.clone()).collect()
}

fn assert_links_agree(tree: &IncludeTree) {
    for node in tree.nodes() {
        if let Some(parent) = node.parent {
            let parent = tree.get(parent).unwrap();
            assert_eq!(parent.children.iter().filter(|id| **id == node.id).count(), 1);
        } else {
            assert!(node.is_root());
        }
        for child in &node.children {
            assert_eq!(tree.get(*child).unwrap().parent, Some(node.id));
        }
    }
}

#[test]
fn test_siblings_under_root() {
    let records = [
        row(1, "INPUT", 0, "a.gms"),
        row(2, "INCLUDE", 1, "b.gms"),
        row(3, "INCLUDE", 1, "c.gms"),
    ];
    let tree = build_include_tree(&records, &IncludeTreeOptions::default()).unwrap();

    assert_eq!(child_files(&tree, "a.gms"), vec!["b.gms", "c.gms"]);
    let b = tree.find_by_file("b.gms")[0].id;
    let c = tree.find_by_file("c.gms")[0].id;
    assert_eq!(tree.depth(b), tree.depth(c));
    assert_links_agree(&tree);
}

#[test]
fn test_shallower_row_walks_back_up() {
    let records = [
        row(1, "INPUT", 0, "a.gms"),
        row(2, "INCLUDE", 1, "b.gms"),
        row(3, "INCLUDE", 2, "c.gms"),
        row(4, "INCLUDE", 1, "d.gms"),
    ];
    let tree = build_include_tree(&records, &IncludeTreeOptions::default()).unwrap();

    assert_eq!(child_files(&tree, "a.gms"), vec!["b.gms", "d.gms"]);
    assert_eq!(child_files(&tree, "b.gms"), vec!["c.gms"]);
    assert!(child_files(&tree, "c.gms").is_empty());
    assert_links_agree(&tree);
}

#[test]
fn test_fixture_listing() {
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    let tree = build_include_tree(&records, &IncludeTreeOptions::default()).unwrap();
    assert_eq!(tree.len(), 6);
    assert_links_agree(&tree);

    let model = tree.find_by_file("trnsport.gms")[0];
    assert_eq!(model.record_type, "INPUT");
    assert!(model.collapsible);
    assert_eq!(
        child_files(&tree, "trnsport.gms"),
        vec!["/work/My Models/distances.inc", "/work/My Models/report.gms"]
    );

    let walked: Vec<(usize, &str)> = tree
        .walk()
        .into_iter()
        .map(|(depth, node)| (depth, node.filename.rsplit('/').next().unwrap_or_default()))
        .collect();
    assert_eq!(
        walked,
        vec![
            (0, "wrapper.gms"),
            (1, "trnsport.gms"),
            (2, "distances.inc"),
            (3, "dist.gdx"),
            (2, "report.gms"),
            (1, "solve.gms"),
        ]
    );
}

#[test]
fn test_ignored_types_and_files() {
    let records = parse_include_summary(TRNSPORT_LISTING).unwrap();
    let options = IncludeTreeOptions::new()
        .with_ignored_type("gdxin")
        .with_ignored_file("report");
    let tree = build_include_tree(&records, &options).unwrap();

    assert_eq!(tree.len(), 4);
    assert!(tree.find_by_file("dist.gdx").is_empty());
    assert!(tree.find_by_file("report.gms").is_empty());
    assert!(!tree.find_by_file("distances.inc")[0].collapsible);
    assert_links_agree(&tree);
}

#[test]
fn test_no_rows_no_tree() {
    assert!(build_include_tree(&[], &IncludeTreeOptions::default()).is_none());
}
