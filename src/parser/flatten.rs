//! Flattening of a nested [`LineTree`] into [`LineAstEntry`] values.
//!
//! Calls reset attribution: their arguments are tagged with the call's own
//! name, their position within that call, and that call's argument count.
//! Groups are transparent: their contents keep the attribution of the slot
//! the group occupies and are marked `is_group`.

use smol_str::SmolStr;

use super::ast::{Argument, EntryKind, Expr, Leaf, LineAstEntry, LineTree};

/// Attribution handed down while walking the tree.
#[derive(Debug, Clone, Copy)]
struct Attribution<'t> {
    function: Option<&'t SmolStr>,
    argument_index: Option<usize>,
    argument_count: Option<usize>,
    is_group: bool,
}

const TOP_LEVEL: Attribution<'static> = Attribution {
    function: None,
    argument_index: None,
    argument_count: None,
    is_group: false,
};

/// Flatten a line tree into entries in left-to-right column order.
pub fn flatten(tree: &LineTree) -> Vec<LineAstEntry> {
    let mut entries = Vec::new();
    for item in &tree.items {
        flatten_expr(item, TOP_LEVEL, &mut entries);
    }
    entries
}

fn flatten_expr<'t>(expr: &'t Expr, attribution: Attribution<'t>, out: &mut Vec<LineAstEntry>) {
    match expr {
        Expr::Leaf(leaf) => out.push(leaf_entry(leaf, attribution)),
        Expr::Call(call) => {
            let count = call.arguments.len();
            for (index, argument) in call.arguments.iter().enumerate() {
                let inner = Attribution {
                    function: Some(&call.name),
                    argument_index: Some(index),
                    argument_count: Some(count),
                    is_group: false,
                };
                flatten_argument(argument, inner, out);
            }
        }
        Expr::Group(group) => {
            let inner = Attribution {
                is_group: true,
                ..attribution
            };
            for argument in &group.arguments {
                flatten_argument(argument, inner, out);
            }
        }
    }
}

fn flatten_argument<'t>(
    argument: &'t Argument,
    attribution: Attribution<'t>,
    out: &mut Vec<LineAstEntry>,
) {
    if argument.is_empty() {
        // Placeholders only matter where they keep a call's slots aligned.
        if attribution.function.is_some() {
            out.push(empty_entry(argument.span.end, attribution));
        }
        return;
    }
    for item in &argument.items {
        flatten_expr(item, attribution, out);
    }
}

fn leaf_entry(leaf: &Leaf, attribution: Attribution<'_>) -> LineAstEntry {
    LineAstEntry {
        name: leaf.name.clone(),
        kind: EntryKind::from(leaf.kind),
        is_group: attribution.is_group,
        start_column: leaf.span.start,
        end_column: leaf.span.end,
        argument_index: attribution.argument_index,
        argument_count: attribution.argument_count,
        enclosing_function_name: attribution.function.cloned(),
    }
}

fn empty_entry(column: usize, attribution: Attribution<'_>) -> LineAstEntry {
    LineAstEntry {
        name: SmolStr::default(),
        kind: EntryKind::Empty,
        is_group: attribution.is_group,
        start_column: column,
        end_column: column,
        argument_index: attribution.argument_index,
        argument_count: attribution.argument_count,
        enclosing_function_name: attribution.function.cloned(),
    }
}
