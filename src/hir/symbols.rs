//! Symbols of the reference dump.

use std::fmt;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::SourceLocation;
use crate::syntax::ReferenceAction;

/// Identifier of a symbol, taken from the dump's numeric record id.
///
/// Ids are only meaningful within one dump; a rebuild may renumber them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of symbol, from the dump's type column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Set,
    Alias,
    Parameter,
    Variable,
    Equation,
    Model,
    Acronym,
    File,
    Function,
    Macro,
    /// Any other type name, upper-cased.
    Other(SmolStr),
}

impl SymbolKind {
    /// Parse a type name case-insensitively (`SET`, `PARAM`, `VAR`, ...).
    pub fn parse(type_name: &str) -> Self {
        match type_name.to_ascii_uppercase().as_str() {
            "SET" => Self::Set,
            "ALIAS" => Self::Alias,
            "PARAM" | "PARAMETER" => Self::Parameter,
            "VAR" | "VARIABLE" => Self::Variable,
            "EQU" | "EQUATION" => Self::Equation,
            "MODEL" => Self::Model,
            "ACRNM" | "ACRONYM" => Self::Acronym,
            "FILE" => Self::File,
            "FUNCT" | "FUNCTION" => Self::Function,
            "MACRO" => Self::Macro,
            other => Self::Other(SmolStr::new(other)),
        }
    }

    /// Get a display string for this kind.
    pub fn display(&self) -> &str {
        match self {
            Self::Set => "Set",
            Self::Alias => "Alias",
            Self::Parameter => "Parameter",
            Self::Variable => "Variable",
            Self::Equation => "Equation",
            Self::Model => "Model",
            Self::Acronym => "Acronym",
            Self::File => "File",
            Self::Function => "Function",
            Self::Macro => "Macro",
            Self::Other(name) => name,
        }
    }

    /// Sets and their aliases can appear as domain entries.
    pub fn is_set_like(&self) -> bool {
        matches!(self, Self::Set | Self::Alias)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// One position of a symbol's domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainRef {
    /// The `*` pseudo-set accepting any element.
    Universe,
    Set(SymbolId),
}

impl DomainRef {
    pub const UNIVERSE_NAME: &'static str = "*";

    pub fn symbol(self) -> Option<SymbolId> {
        match self {
            DomainRef::Universe => None,
            DomainRef::Set(id) => Some(id),
        }
    }

    pub fn is_universe(self) -> bool {
        self == DomainRef::Universe
    }
}

/// A symbol with everything the dump recorded about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    /// Name in its original case.
    pub name: SmolStr,
    pub name_lowercase: SmolStr,
    pub kind: SymbolKind,
    pub description: String,
    pub domain: Vec<DomainRef>,

    pub declared_at: Option<SourceLocation>,
    pub defined_at: Option<SourceLocation>,
    pub assigned_at: Vec<SourceLocation>,
    pub referenced_at: Vec<SourceLocation>,
    pub controlled_at: Vec<SourceLocation>,
    /// Locations of every other action, keyed by action in emission order.
    pub other_actions: IndexMap<SmolStr, Vec<SourceLocation>>,

    /// True for a one-dimensional set whose single domain entry is another set.
    pub is_subset: bool,
    pub superset: Option<SymbolId>,
    /// Direct and transitive subsets of this set.
    pub subsets: Vec<SymbolId>,
}

impl Symbol {
    pub fn new(id: SymbolId, name: &str, kind: SymbolKind) -> Self {
        Self {
            id,
            name: SmolStr::new(name),
            name_lowercase: SmolStr::new(name.to_lowercase()),
            kind,
            description: String::new(),
            domain: Vec::new(),
            declared_at: None,
            defined_at: None,
            assigned_at: Vec::new(),
            referenced_at: Vec::new(),
            controlled_at: Vec::new(),
            other_actions: IndexMap::new(),
            is_subset: false,
            superset: None,
            subsets: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.domain.len()
    }

    /// The domain entry expected at argument `index`, if the symbol has one.
    pub fn domain_at(&self, index: usize) -> Option<DomainRef> {
        self.domain.get(index).copied()
    }

    /// Record a location under its action. A second `declared`/`defined`
    /// location replaces the first.
    pub fn add_location(&mut self, action: &ReferenceAction, location: SourceLocation) {
        match action {
            ReferenceAction::Declared => self.declared_at = Some(location),
            ReferenceAction::Defined => self.defined_at = Some(location),
            ReferenceAction::Assigned => self.assigned_at.push(location),
            ReferenceAction::Referenced => self.referenced_at.push(location),
            ReferenceAction::Controlled => self.controlled_at.push(location),
            ReferenceAction::Other(keyword) => self
                .other_actions
                .entry(keyword.clone())
                .or_default()
                .push(location),
        }
    }

    /// Where the symbol gets its content: the definition, else the declaration.
    pub fn definition_location(&self) -> Option<&SourceLocation> {
        self.defined_at.as_ref().or(self.declared_at.as_ref())
    }

    /// Every recorded location with its action, declaration first.
    pub fn locations(&self) -> Vec<(ReferenceAction, &SourceLocation)> {
        let mut locations = Vec::new();
        if let Some(loc) = &self.declared_at {
            locations.push((ReferenceAction::Declared, loc));
        }
        if let Some(loc) = &self.defined_at {
            locations.push((ReferenceAction::Defined, loc));
        }
        let lists = [
            (ReferenceAction::Assigned, &self.assigned_at),
            (ReferenceAction::Referenced, &self.referenced_at),
            (ReferenceAction::Controlled, &self.controlled_at),
        ];
        for (action, list) in lists {
            locations.extend(list.iter().map(|loc| (action.clone(), loc)));
        }
        for (keyword, list) in &self.other_actions {
            let action = ReferenceAction::Other(keyword.clone());
            locations.extend(list.iter().map(|loc| (action.clone(), loc)));
        }
        locations
    }
}
