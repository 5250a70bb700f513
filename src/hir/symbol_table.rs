//! Symbol table built from a reference dump.
//!
//! The build runs in two passes over the dump. Pass one classifies each line
//! into a [`ReferenceRecord`]. Pass two creates symbols in emission order,
//! attaches locations, and resolves every definition's domain against the
//! complete id set, so a domain may name a symbol that appears later in the
//! dump. Subset relationships and the case-insensitive name index are derived
//! afterwards.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::symbols::{DomainRef, Symbol, SymbolId, SymbolKind};
use crate::syntax::{
    DefinitionRecord, LocationRecord, MalformedReason, MalformedReferenceRecord, ReferenceRecord,
};

/// All symbols of one compile, indexed by id and by lower-cased name.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<SymbolId, Symbol>,
    by_name: FxHashMap<SmolStr, SymbolId>,
    diagnostics: Vec<MalformedReferenceRecord>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    /// Look up a symbol by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let id = self.by_name.get(name.to_lowercase().as_str())?;
        self.symbols.get(id)
    }

    /// All symbols in the order the dump introduced them.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Sets and aliases, the symbols that can appear in a domain.
    pub fn sets(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols().filter(|symbol| symbol.kind.is_set_like())
    }

    /// Records that were skipped while building.
    pub fn diagnostics(&self) -> &[MalformedReferenceRecord] {
        &self.diagnostics
    }

    /// Display name of a domain entry; `*` for the universe.
    pub fn domain_name(&self, domain: DomainRef) -> &str {
        match domain {
            DomainRef::Universe => DomainRef::UNIVERSE_NAME,
            DomainRef::Set(id) => self.get(id).map_or("?", |symbol| symbol.name.as_str()),
        }
    }

    /// Domain names joined as written in a declaration, e.g. `(i,j)`.
    pub fn domain_signature(&self, symbol: &Symbol) -> String {
        if symbol.domain.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = symbol
            .domain
            .iter()
            .map(|entry| self.domain_name(*entry))
            .collect();
        format!("({})", names.join(","))
    }

    /// Supersets of `id`, nearest first.
    pub fn superset_chain(&self, id: SymbolId) -> Vec<SymbolId> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(id);
        let mut current = self.get(id).and_then(|symbol| symbol.superset);
        while let Some(ancestor) = current {
            if !seen.insert(ancestor) {
                break;
            }
            chain.push(ancestor);
            current = self.get(ancestor).and_then(|symbol| symbol.superset);
        }
        chain
    }

    /// Whether `id` is `set` itself or one of its subsets.
    pub fn is_within(&self, id: SymbolId, set: SymbolId) -> bool {
        id == set || self.get(set).is_some_and(|s| s.subsets.contains(&id))
    }

    fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.id, symbol);
    }

    fn index_names(&mut self) {
        self.by_name.clear();
        for symbol in self.symbols.values() {
            self.by_name
                .entry(symbol.name_lowercase.clone())
                .or_insert(symbol.id);
        }
    }
}

/// Build a symbol table from the lines of a reference dump.
///
/// Malformed lines are skipped and kept in [`SymbolTable::diagnostics`];
/// the build itself never fails.
pub fn build_reference_tree<I>(lines: I) -> SymbolTable
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut table = SymbolTable::new();

    // Pass 1: classify.
    let mut records: Vec<(usize, ReferenceRecord)> = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        match ReferenceRecord::parse(line.as_ref()) {
            Ok(ReferenceRecord::Ignored) => {}
            Ok(record) => records.push((line_number, record)),
            Err(reason) => skip(&mut table, line_number, reason),
        }
    }

    // Pass 2: symbols and locations, then domains against the full id set.
    let mut definitions: Vec<(usize, DefinitionRecord)> = Vec::new();
    for (line_number, record) in records {
        match record {
            ReferenceRecord::Location(location) => apply_location(&mut table, location),
            ReferenceRecord::Definition(definition) => {
                let id = SymbolId(definition.symbol_id);
                if table.get(id).is_none() {
                    let kind = SymbolKind::parse(&definition.type_name);
                    table.insert(Symbol::new(id, &definition.name, kind));
                }
                definitions.push((line_number, definition));
            }
            ReferenceRecord::Ignored => {}
        }
    }
    for (line_number, definition) in definitions {
        if let Err(reason) = apply_definition(&mut table, &definition) {
            skip(&mut table, line_number, reason);
        }
    }

    propagate_subsets(&mut table);
    table.index_names();

    tracing::debug!(
        "reference tree: {} symbols, {} skipped records",
        table.len(),
        table.diagnostics.len()
    );
    table
}

fn skip(table: &mut SymbolTable, line_number: usize, reason: MalformedReason) {
    let record = MalformedReferenceRecord::new(line_number, reason);
    tracing::trace!("skipping {record}");
    table.diagnostics.push(record);
}

fn apply_location(table: &mut SymbolTable, record: LocationRecord) {
    let id = SymbolId(record.symbol_id);
    let symbol = table.symbols.entry(id).or_insert_with(|| {
        Symbol::new(id, &record.name, SymbolKind::parse(&record.type_name))
    });
    symbol.add_location(&record.action, record.location);
}

fn apply_definition(
    table: &mut SymbolTable,
    definition: &DefinitionRecord,
) -> Result<(), MalformedReason> {
    let domain = definition
        .domain
        .iter()
        .map(|&raw| match raw {
            0 => Ok(DomainRef::Universe),
            raw if table.symbols.contains_key(&SymbolId(raw)) => Ok(DomainRef::Set(SymbolId(raw))),
            raw => Err(MalformedReason::UnknownDomainSymbol(raw)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(symbol) = table.symbols.get_mut(&SymbolId(definition.symbol_id)) {
        symbol.domain = domain;
        symbol.description = definition.description.clone();
    }
    Ok(())
}

/// Mark one-dimensional sets over another set as subsets and register each
/// on every ancestor of its superset chain.
fn propagate_subsets(table: &mut SymbolTable) {
    let mut subsets = Vec::new();
    for symbol in table.symbols.values_mut() {
        if symbol.kind != SymbolKind::Set || symbol.domain.len() != 1 {
            continue;
        }
        match symbol.domain[0] {
            DomainRef::Set(superset) if superset != symbol.id => {
                symbol.is_subset = true;
                symbol.superset = Some(superset);
                subsets.push(symbol.id);
            }
            _ => {}
        }
    }

    for subset in subsets {
        let mut visited = FxHashSet::default();
        visited.insert(subset);
        let mut current = table.get(subset).and_then(|symbol| symbol.superset);
        while let Some(ancestor) = current {
            if !visited.insert(ancestor) {
                tracing::warn!("superset chain of {subset} loops at {ancestor}");
                break;
            }
            let Some(symbol) = table.symbols.get_mut(&ancestor) else {
                break;
            };
            if !symbol.subsets.contains(&subset) {
                symbol.subsets.push(subset);
            }
            current = symbol.superset;
        }
    }
}
