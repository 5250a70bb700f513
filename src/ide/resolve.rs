//! Resolving the occurrence under the cursor.
//!
//! Joins a parsed line with the symbol table: which symbol sits under a
//! column, and which domain position of which call the column fills.

use smol_str::SmolStr;

use crate::base::ColumnSpan;
use crate::hir::{DomainRef, Symbol, SymbolTable};
use crate::parser::{LineAst, LineAstEntry, ParseErrorKind, parse_line_ast};

/// The argument slot a cursor sits in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSlot {
    /// Name of the enclosing call as written.
    pub function: SmolStr,
    pub argument_index: usize,
    /// Number of arguments written in the call.
    pub argument_count: usize,
    /// Declared dimension of the called symbol, when the call names one.
    pub dimension: Option<usize>,
    /// Domain entry declared for this position.
    pub expected: Option<DomainRef>,
}

impl DomainSlot {
    /// Whether this is the last written argument of the call.
    pub fn is_last(&self) -> bool {
        self.argument_index + 1 == self.argument_count
    }

    /// The slot is the last one written, but the declaration has more
    /// positions after it.
    pub fn expects_more(&self) -> bool {
        self.is_last()
            && self
                .dimension
                .is_some_and(|dimension| self.argument_index + 1 < dimension)
    }
}

/// A symbol found under the cursor.
#[derive(Clone, Debug)]
pub struct SymbolAtCursor<'t> {
    pub symbol: &'t Symbol,
    /// Columns of the occurrence on the line.
    pub span: ColumnSpan,
    /// True when the cursor is on the name of a call (`demand` in `demand(i)`).
    pub is_call: bool,
    pub slot: Option<DomainSlot>,
}

/// Resolve the symbol under a 1-based cursor column.
///
/// Call names are checked before argument entries; literals, numbers and
/// unknown names resolve to nothing.
pub fn symbol_at<'t>(
    table: &'t SymbolTable,
    line: &LineAst,
    column: usize,
) -> Option<SymbolAtCursor<'t>> {
    if let Some(call) = line.call_at(column) {
        let symbol = table.lookup(&call.name)?;
        return Some(SymbolAtCursor {
            symbol,
            span: call.name_span,
            is_call: true,
            slot: None,
        });
    }

    let entry = line.entry_at(column)?;
    if !entry.is_identifier() {
        return None;
    }
    let symbol = table.lookup(&entry.name)?;
    Some(SymbolAtCursor {
        symbol,
        span: entry.span(),
        is_call: false,
        slot: slot_for_entry(table, entry),
    })
}

/// The argument slot under a 1-based cursor column, if any.
pub fn slot_at(table: &SymbolTable, line: &LineAst, column: usize) -> Option<DomainSlot> {
    slot_for_entry(table, line.entry_at(column)?)
}

fn slot_for_entry(table: &SymbolTable, entry: &LineAstEntry) -> Option<DomainSlot> {
    let function = entry.enclosing_function_name.as_ref()?;
    let argument_index = entry.argument_index?;
    let argument_count = entry.argument_count?;
    let called = table.lookup(function);
    Some(DomainSlot {
        function: function.clone(),
        argument_index,
        argument_count,
        dimension: called.map(Symbol::dimension),
        expected: called.and_then(|symbol| symbol.domain_at(argument_index)),
    })
}

/// Parse a line that is still being typed.
///
/// Unclosed calls and groups are closed at the end of the text, so
/// `demand(i,` reads as `demand(i,)`. Other errors yield `None`.
pub fn parse_at_cursor(text: &str) -> Option<LineAst> {
    let mut text = text.to_string();
    let attempts = text.matches('(').count();
    for _ in 0..=attempts {
        match parse_line_ast(&text) {
            Ok(ast) => return Some(ast),
            Err(err)
                if matches!(
                    err.kind,
                    ParseErrorKind::UnclosedCall | ParseErrorKind::UnclosedGroup
                ) =>
            {
                text.push(')');
            }
            Err(err) => {
                tracing::trace!("cursor line not parsed: {}", err);
                return None;
            }
        }
    }
    None
}
