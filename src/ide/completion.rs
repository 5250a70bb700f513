//! Completion suggestions implementation.
//!
//! Inside an argument slot of a symbol with a declared domain, only the
//! domain set and its subsets are offered. Everywhere else every symbol
//! matching the typed prefix is.

use std::sync::Arc;

use crate::base::text_utils::word_prefix_before_cursor;
use crate::hir::{DomainRef, Symbol, SymbolKind, SymbolTable};

use super::resolve::{DomainSlot, parse_at_cursor, slot_at};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Set,
    Parameter,
    Variable,
    Equation,
    Model,
    Function,
    Other,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Set => 13,       // Enum
            CompletionKind::Parameter => 21, // Constant
            CompletionKind::Variable => 6,   // Variable
            CompletionKind::Equation => 24,  // Operator
            CompletionKind::Model => 9,      // Module
            CompletionKind::Function => 3,   // Function
            CompletionKind::Other => 1,      // Text
        }
    }
}

impl From<&SymbolKind> for CompletionKind {
    fn from(kind: &SymbolKind) -> Self {
        match kind {
            SymbolKind::Set | SymbolKind::Alias => CompletionKind::Set,
            SymbolKind::Parameter | SymbolKind::Acronym => CompletionKind::Parameter,
            SymbolKind::Variable => CompletionKind::Variable,
            SymbolKind::Equation => CompletionKind::Equation,
            SymbolKind::Model => CompletionKind::Model,
            SymbolKind::Function | SymbolKind::Macro => CompletionKind::Function,
            SymbolKind::File | SymbolKind::Other(_) => CompletionKind::Other,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Create from a symbol, with its signature as detail.
    pub fn from_symbol(symbol: &Symbol, table: &SymbolTable) -> Self {
        let detail = format!(
            "{} {}{}",
            symbol.kind.display(),
            symbol.name,
            table.domain_signature(symbol)
        );
        let mut item = Self::new(symbol.name.as_str(), CompletionKind::from(&symbol.kind))
            .with_detail(detail);
        if !symbol.description.is_empty() {
            item = item.with_documentation(symbol.description.as_str());
        }
        item
    }
}

const PRIORITY_EXPECTED: u32 = 10;
const PRIORITY_SUBSET: u32 = 20;
const PRIORITY_SET: u32 = 40;
const PRIORITY_GENERAL: u32 = 50;

/// Get completion suggestions at a position.
///
/// # Arguments
/// * `table` - The symbol table to suggest from
/// * `line` - Text of the line under the cursor
/// * `column` - Cursor column (1-based; the caret sits before this column)
///
/// # Returns
/// List of completion suggestions, best first.
pub fn completions(table: &SymbolTable, line: &str, column: usize) -> Vec<CompletionItem> {
    let position = column.saturating_sub(1);
    let prefix = word_prefix_before_cursor(line, position).to_lowercase();
    let before: String = line.chars().take(position).collect();

    // The whole line knows about separators after the cursor; the text
    // before it still works when the rest of the line does not parse.
    let slot = parse_at_cursor(line)
        .and_then(|ast| slot_at(table, &ast, column))
        .or_else(|| parse_at_cursor(&before).and_then(|ast| slot_at(table, &ast, column)));
    let mut items = match &slot {
        Some(slot) if slot.dimension.is_some() => domain_completions(table, slot),
        _ => general_completions(table),
    };

    items.retain(|item| item.label.to_lowercase().starts_with(&prefix));
    items.sort_by(|a, b| {
        a.sort_priority
            .cmp(&b.sort_priority)
            .then_with(|| a.label.cmp(&b.label))
    });
    items.dedup_by(|a, b| a.label == b.label);
    items
}

/// Sets acceptable at a domain position.
fn domain_completions(table: &SymbolTable, slot: &DomainSlot) -> Vec<CompletionItem> {
    let mut items = match slot.expected {
        Some(DomainRef::Set(id)) => {
            let Some(expected) = table.get(id) else {
                return Vec::new();
            };
            let mut items =
                vec![CompletionItem::from_symbol(expected, table).with_priority(PRIORITY_EXPECTED)];
            items.extend(
                expected
                    .subsets
                    .iter()
                    .filter_map(|subset| table.get(*subset))
                    .map(|subset| {
                        CompletionItem::from_symbol(subset, table).with_priority(PRIORITY_SUBSET)
                    }),
            );
            items
        }
        // Universe, or more arguments than declared positions.
        Some(DomainRef::Universe) | None => table
            .sets()
            .map(|set| CompletionItem::from_symbol(set, table).with_priority(PRIORITY_SET))
            .collect(),
    };

    if slot.expects_more() {
        for item in &mut items {
            item.insert_text = Some(Arc::from(format!("{},", item.label)));
        }
    }
    items
}

fn general_completions(table: &SymbolTable) -> Vec<CompletionItem> {
    table
        .symbols()
        .map(|symbol| CompletionItem::from_symbol(symbol, table).with_priority(PRIORITY_GENERAL))
        .collect()
}
