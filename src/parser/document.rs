//! Whole-document parsing.
//!
//! Lines are independent for the line parser, so a document is parsed in
//! parallel once the `$onText`/`$offText` comment blocks are known.

use rayon::prelude::*;

use super::ast::LineAstEntry;
use super::parser::line_entries;

/// Parse every line of a document, indexed by 0-based line number.
///
/// Lines inside a `$onText` ... `$offText` block, and malformed lines, have
/// no occurrences.
pub fn parse_document(text: &str) -> Vec<Vec<LineAstEntry>> {
    let lines: Vec<&str> = text.lines().collect();
    let commented = block_comment_mask(&lines);

    lines
        .par_iter()
        .zip(commented.par_iter())
        .map(|(line, &is_comment)| {
            if is_comment {
                Vec::new()
            } else {
                line_entries(line)
            }
        })
        .collect()
}

/// Marks lines that belong to a `$onText`/`$offText` block, delimiters included.
fn block_comment_mask(lines: &[&str]) -> Vec<bool> {
    let mut inside = false;
    lines
        .iter()
        .map(|line| {
            let directive = dollar_directive(line);
            if directive.eq_ignore_ascii_case("ontext") {
                inside = true;
                return true;
            }
            if directive.eq_ignore_ascii_case("offtext") {
                let was_inside = inside;
                inside = false;
                return was_inside;
            }
            inside
        })
        .collect()
}

/// The keyword of a dollar control line (`onText` for `$onText`), or "".
fn dollar_directive(line: &str) -> &str {
    line.strip_prefix('$')
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or("")
}
