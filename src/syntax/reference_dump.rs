//! Records of the compiler's reference dump (`rf=` output).
//!
//! The dump is line oriented with fields separated by single spaces. Each
//! line is classified once into a [`ReferenceRecord`]:
//!
//! ```text
//! location:   ref-no sym-id name type action global-line line column nesting file-no path...
//! definition: sym-id name type-code type dimension domain-id{dimension} description...
//! ```
//!
//! A line whose first field is `0` is the universe placeholder (also used as a
//! section separator) and carries nothing useful.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::SourceLocation;

/// Minimum field count of a location record (the path starts at field 10).
const LOCATION_MIN_FIELDS: usize = 11;
/// Field holding the action keyword of a location record, or the
/// dimension of a definition record.
const DISCRIMINATOR_FIELD: usize = 4;
const PATH_FIELD: usize = 10;
/// First domain field of a definition record.
const DOMAIN_FIELD: usize = 5;

/// What a location record says happened to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceAction {
    Declared,
    Defined,
    Assigned,
    Referenced,
    Controlled,
    /// Any other action (`impl-asn`, `index`, ...), lower-cased.
    Other(SmolStr),
}

impl ReferenceAction {
    pub fn parse(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "declared" => Self::Declared,
            "defined" => Self::Defined,
            "assigned" => Self::Assigned,
            "ref" => Self::Referenced,
            "control" => Self::Controlled,
            other => Self::Other(SmolStr::new(other)),
        }
    }

    /// The keyword as written in the dump.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Declared => "declared",
            Self::Defined => "defined",
            Self::Assigned => "assigned",
            Self::Referenced => "ref",
            Self::Controlled => "control",
            Self::Other(keyword) => keyword,
        }
    }
}

/// A declaration, definition, or usage of a symbol at a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub symbol_id: u32,
    pub name: SmolStr,
    pub type_name: SmolStr,
    pub action: ReferenceAction,
    pub global_line: u32,
    pub location: SourceLocation,
    pub include_nesting: u32,
}

/// A symbol's type, domain and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRecord {
    pub symbol_id: u32,
    pub name: SmolStr,
    pub type_name: SmolStr,
    /// Raw domain ids in declaration order; `0` is the universe `*`.
    pub domain: Vec<u32>,
    pub description: String,
}

/// One classified line of the reference dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceRecord {
    Location(LocationRecord),
    Definition(DefinitionRecord),
    /// Blank lines and id-`0` placeholder rows.
    Ignored,
}

/// Why a line could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected a numeric record id, found `{0}`")]
    InvalidId(String),
    #[error("unrecognized record with {0} fields")]
    Unrecognized(usize),
    #[error("invalid number `{value}` in field {field}")]
    InvalidNumber { field: usize, value: String },
    #[error("domain declares {expected} entries but only {found} are present")]
    TruncatedDomain { expected: usize, found: usize },
    #[error("domain refers to unknown symbol id {0}")]
    UnknownDomainSymbol(u32),
}

/// A dump line that was skipped while building the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reference dump line {line_number}: {reason}")]
pub struct MalformedReferenceRecord {
    /// 1-based line number in the dump.
    pub line_number: usize,
    pub reason: MalformedReason,
}

impl MalformedReferenceRecord {
    pub fn new(line_number: usize, reason: MalformedReason) -> Self {
        Self {
            line_number,
            reason,
        }
    }
}

impl ReferenceRecord {
    /// Classify one line of the dump.
    pub fn parse(line: &str) -> Result<Self, MalformedReason> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(Self::Ignored);
        }
        let fields: Vec<&str> = line.split(' ').collect();

        match fields[0] {
            "0" => return Ok(Self::Ignored),
            id if !is_unsigned(id) => return Err(MalformedReason::InvalidId(id.to_string())),
            _ => {}
        }

        match fields.get(DISCRIMINATOR_FIELD) {
            Some(dimension) if is_unsigned(dimension) => {
                parse_definition(&fields).map(Self::Definition)
            }
            Some(action) if is_action_keyword(action) && fields.len() >= LOCATION_MIN_FIELDS => {
                parse_location(&fields).map(Self::Location)
            }
            _ => Err(MalformedReason::Unrecognized(fields.len())),
        }
    }
}

/// `ref-no sym-id name type action global-line line column nesting file-no path...`
fn parse_location(fields: &[&str]) -> Result<LocationRecord, MalformedReason> {
    let symbol_id = number_field(fields, 1)?;
    for field in [0, 9] {
        number_field(fields, field)?;
    }
    let global_line = number_field(fields, 5)?;
    let line = number_field(fields, 6)?;
    let column = number_field(fields, 7)?;
    let include_nesting = number_field(fields, 8)?;
    let path = fields[PATH_FIELD..].join(" ");

    Ok(LocationRecord {
        symbol_id,
        name: SmolStr::new(fields[2]),
        type_name: SmolStr::new(fields[3]),
        action: ReferenceAction::parse(fields[DISCRIMINATOR_FIELD]),
        global_line,
        location: SourceLocation::new(line, column, path),
        include_nesting,
    })
}

/// `sym-id name type-code type dimension domain-id{dimension} description...`
fn parse_definition(fields: &[&str]) -> Result<DefinitionRecord, MalformedReason> {
    let symbol_id = number_field(fields, 0)?;
    let dimension = number_field(fields, DISCRIMINATOR_FIELD)? as usize;

    let available = fields.len() - DOMAIN_FIELD;
    if available < dimension {
        return Err(MalformedReason::TruncatedDomain {
            expected: dimension,
            found: available,
        });
    }
    let domain = (DOMAIN_FIELD..DOMAIN_FIELD + dimension)
        .map(|field| number_field(fields, field))
        .collect::<Result<Vec<_>, _>>()?;
    let description = fields[DOMAIN_FIELD + dimension..].join(" ");

    Ok(DefinitionRecord {
        symbol_id,
        name: SmolStr::new(fields[1]),
        type_name: SmolStr::new(fields[3]),
        domain,
        description: description.trim().to_string(),
    })
}

fn number_field(fields: &[&str], field: usize) -> Result<u32, MalformedReason> {
    let value = fields.get(field).copied().unwrap_or_default();
    value.parse().map_err(|_| MalformedReason::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn is_unsigned(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Action keywords are letters, possibly hyphenated (`impl-asn`).
fn is_action_keyword(field: &str) -> bool {
    field.starts_with(|c: char| c.is_ascii_alphabetic())
        && field.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}
