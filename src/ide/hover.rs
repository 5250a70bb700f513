//! Hover information implementation.

use crate::base::ColumnSpan;
use crate::hir::{Symbol, SymbolId, SymbolTable};

use super::resolve::{DomainSlot, parse_at_cursor, symbol_at};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// The hovered symbol.
    pub symbol: SymbolId,
    /// Columns of the hovered occurrence (1-based, end exclusive).
    pub span: ColumnSpan,
}

/// Get hover information for a cursor on a source line.
///
/// # Arguments
/// * `table` - The symbol table to resolve against
/// * `line` - Text of the line under the cursor
/// * `column` - Cursor column (1-based)
///
/// # Returns
/// Hover information, or None if nothing to show.
pub fn hover(table: &SymbolTable, line: &str, column: usize) -> Option<HoverResult> {
    let ast = parse_at_cursor(line)?;
    let found = symbol_at(table, &ast, column)?;
    Some(HoverResult {
        contents: build_hover_content(found.symbol, found.slot.as_ref(), table),
        symbol: found.symbol.id,
        span: found.span,
    })
}

/// Build markdown hover content for a symbol.
fn build_hover_content(symbol: &Symbol, slot: Option<&DomainSlot>, table: &SymbolTable) -> String {
    let mut content = String::new();

    content.push_str("```gams\n");
    content.push_str(&build_signature(symbol, table));
    content.push_str("\n```\n");

    if !symbol.description.is_empty() {
        content.push_str("\n---\n\n");
        content.push_str(&symbol.description);
        content.push('\n');
    }

    if let Some(location) = symbol.definition_location() {
        content.push_str("\n**Defined at:** `");
        content.push_str(&location.to_string());
        content.push_str("`\n");
    }

    if let Some(superset) = symbol.superset.and_then(|id| table.get(id)) {
        content.push_str(&format!("\n**Subset of:** `{}`\n", superset.name));
    }

    if !symbol.subsets.is_empty() {
        let names: Vec<String> = symbol
            .subsets
            .iter()
            .filter_map(|id| table.get(*id))
            .map(|subset| format!("`{}`", subset.name))
            .collect();
        content.push_str(&format!("\n**Subsets:** {}\n", names.join(", ")));
    }

    if let Some(slot) = slot {
        content.push_str(&format!(
            "\n**Position {} of `{}`**",
            slot.argument_index + 1,
            slot.function
        ));
        if let Some(expected) = slot.expected {
            content.push_str(&format!(", expects `{}`", table.domain_name(expected)));
        }
        content.push('\n');
    }

    content
}

/// Build a declaration-style signature, e.g. `Parameter d(i,j)`.
fn build_signature(symbol: &Symbol, table: &SymbolTable) -> String {
    format!(
        "{} {}{}",
        symbol.kind.display(),
        symbol.name,
        table.domain_signature(symbol)
    )
}
