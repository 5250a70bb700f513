//! The "Include File Summary" section of a compilation listing.
//!
//! ```text
//! Include File Summary
//!
//!    SEQ   GLOBAL TYPE      PARENT   LOCAL  FILENAME
//!
//!      1        1 INPUT          0       0  /work/model.gms
//!      2       10 INCLUDE        1      10  ./work/data.gms
//!      3       15 INCLUDE        2       5  ../work/sub.gms
//! ```
//!
//! The leading dots on a filename repeat the nesting depth and are not part
//! of the path.

use smol_str::SmolStr;
use thiserror::Error;

/// Literal header line opening the section.
pub const INCLUDE_SUMMARY_HEADER: &str = "Include File Summary";
/// First word of the column header line inside the section.
const COLUMN_HEADER_START: &str = "SEQ";
/// Numeric and type columns before the filename.
const LEADING_COLUMNS: usize = 5;

/// One row of the include summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeFileSummaryRecord {
    pub sequence_number: u32,
    pub global_line: u32,
    /// `INPUT` for the main file, otherwise the directive that pulled the
    /// file in (`INCLUDE`, `BATINCLUDE`, `CALL`, `GDXIN`, ...).
    pub record_type: SmolStr,
    /// Sequence number of the logical parent in emission order.
    pub parent_index: u32,
    /// Line in the referencing file where the inclusion happens.
    pub local_line: u32,
    pub filename: String,
}

impl IncludeFileSummaryRecord {
    pub fn new(
        sequence_number: u32,
        global_line: u32,
        record_type: &str,
        parent_index: u32,
        local_line: u32,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number,
            global_line,
            record_type: SmolStr::new(record_type.to_ascii_uppercase()),
            parent_index,
            local_line,
            filename: filename.into(),
        }
    }

    /// Parse one data row; `None` if the line is not a data row.
    pub fn parse(line: &str) -> Option<Self> {
        let (columns, rest) = split_leading_columns(line)?;
        let filename = rest.trim().trim_start_matches('.');
        if filename.is_empty() {
            return None;
        }
        Some(Self::new(
            columns[0].parse().ok()?,
            columns[1].parse().ok()?,
            columns[2],
            columns[3].parse().ok()?,
            columns[4].parse().ok()?,
            filename,
        ))
    }
}

/// The listing had no include summary, usually because include tracing was
/// switched off for the compile. This is an expected state, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("listing has no \"{INCLUDE_SUMMARY_HEADER}\" section")]
pub struct IncludeSummaryAbsent;

/// Extract the include summary rows from a full listing.
pub fn parse_include_summary(
    listing: &str,
) -> Result<Vec<IncludeFileSummaryRecord>, IncludeSummaryAbsent> {
    let mut lines = listing.lines();
    if !lines
        .by_ref()
        .any(|line| line.trim() == INCLUDE_SUMMARY_HEADER)
    {
        return Err(IncludeSummaryAbsent);
    }

    let mut records = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COLUMN_HEADER_START) {
            if records.is_empty() {
                continue;
            }
            break;
        }
        match IncludeFileSummaryRecord::parse(line) {
            Some(record) => records.push(record),
            None => break,
        }
    }

    tracing::debug!("include summary: {} records", records.len());
    Ok(records)
}

/// Split off the leading numeric/type columns, keeping the rest of the line
/// intact so filenames with spaces survive.
fn split_leading_columns(line: &str) -> Option<([&str; LEADING_COLUMNS], &str)> {
    let mut columns = [""; LEADING_COLUMNS];
    let mut rest = line;
    for column in columns.iter_mut() {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace)?;
        *column = &rest[..end];
        rest = &rest[end..];
    }
    Some((columns, rest))
}
