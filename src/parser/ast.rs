//! Line AST types.
//!
//! Parsing a line happens in two phases. The parser first builds a nested
//! [`LineTree`] where calls and groups own their arguments. The tree is then
//! flattened into a left-to-right sequence of [`LineAstEntry`] values, one
//! per leaf occurrence, each tagged with the nearest enclosing call.

use smol_str::SmolStr;

use crate::base::ColumnSpan;

// ============================================================================
// NESTED TREE
// ============================================================================

/// What a leaf occurrence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Identifier,
    /// `'text'` or `"text"`; the leaf name is the text between the quotes.
    Quoted,
    Number,
    /// `*` standing alone in an argument slot.
    Wildcard,
}

/// A leaf occurrence: identifier, literal or wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub kind: LeafKind,
    pub name: SmolStr,
    /// Symbol attribute written after the name (`l` in `x.l`).
    pub attribute: Option<SmolStr>,
    pub span: ColumnSpan,
}

/// `name(arguments)`, with the parenthesis directly after the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: SmolStr,
    /// Symbol attribute between name and parenthesis (`l` in `x.l(i)`).
    pub attribute: Option<SmolStr>,
    pub name_span: ColumnSpan,
    pub arguments: Vec<Argument>,
    /// From the first character of the name through the closing parenthesis.
    pub span: ColumnSpan,
}

/// A parenthesized list without a preceding name, such as `(i,j)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub arguments: Vec<Argument>,
    /// From the opening through the closing parenthesis.
    pub span: ColumnSpan,
}

/// One comma-separated slot of a call or group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Occurrences inside the slot; operators between them are dropped.
    pub items: Vec<Expr>,
    /// Text between the separators around the slot, separators excluded.
    pub span: ColumnSpan,
}

impl Argument {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Leaf(Leaf),
    Call(Call),
    Group(Group),
}

impl Expr {
    pub fn span(&self) -> ColumnSpan {
        match self {
            Expr::Leaf(leaf) => leaf.span,
            Expr::Call(call) => call.span,
            Expr::Group(group) => group.span,
        }
    }
}

/// The nested parse of one source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTree {
    pub items: Vec<Expr>,
}

impl LineTree {
    /// All calls on the line in source order, nested calls included.
    pub fn calls(&self) -> Vec<&Call> {
        let mut calls = Vec::new();
        for item in &self.items {
            collect_calls(item, &mut calls);
        }
        calls
    }
}

fn collect_calls<'t>(expr: &'t Expr, calls: &mut Vec<&'t Call>) {
    let arguments = match expr {
        Expr::Leaf(_) => return,
        Expr::Call(call) => {
            calls.push(call);
            &call.arguments
        }
        Expr::Group(group) => &group.arguments,
    };
    for item in arguments.iter().flat_map(|arg| &arg.items) {
        collect_calls(item, calls);
    }
}

// ============================================================================
// FLATTENED ENTRIES
// ============================================================================

/// Kind of a flattened entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Identifier,
    Quoted,
    Number,
    Wildcard,
    /// Placeholder for an omitted argument, as in `p(i,)`.
    Empty,
}

impl From<LeafKind> for EntryKind {
    fn from(kind: LeafKind) -> Self {
        match kind {
            LeafKind::Identifier => EntryKind::Identifier,
            LeafKind::Quoted => EntryKind::Quoted,
            LeafKind::Number => EntryKind::Number,
            LeafKind::Wildcard => EntryKind::Wildcard,
        }
    }
}

/// One occurrence on a parsed source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineAstEntry {
    /// Identifier, literal text, number, `*`, or empty for placeholders.
    pub name: SmolStr,
    pub kind: EntryKind,
    /// True when the occurrence sits inside a bare group; attribution then
    /// refers to the call around the group.
    pub is_group: bool,
    /// 1-based column of the first character.
    pub start_column: usize,
    /// 1-based column after the last character.
    pub end_column: usize,
    /// Position among the sibling arguments of the enclosing call.
    pub argument_index: Option<usize>,
    /// Number of arguments of the enclosing call.
    pub argument_count: Option<usize>,
    pub enclosing_function_name: Option<SmolStr>,
}

impl LineAstEntry {
    pub fn is_quoted(&self) -> bool {
        self.kind == EntryKind::Quoted
    }

    pub fn is_empty(&self) -> bool {
        self.kind == EntryKind::Empty
    }

    /// Identifiers are the only entries that can name a symbol.
    pub fn is_identifier(&self) -> bool {
        self.kind == EntryKind::Identifier
    }

    pub fn span(&self) -> ColumnSpan {
        ColumnSpan::new(self.start_column, self.end_column)
    }

    /// Whether this entry fills the last argument slot of its call.
    pub fn is_last_argument(&self) -> bool {
        match (self.argument_index, self.argument_count) {
            (Some(index), Some(count)) => index + 1 == count,
            _ => false,
        }
    }
}
