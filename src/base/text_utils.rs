//! Text manipulation utilities for working with source lines.
//!
//! Positions here are 0-based character indices into the line, the way
//! editors hand them over. Convert to the 1-based columns used by
//! [`ColumnSpan`](super::ColumnSpan) with `index + 1`.

/// Check if a character is considered part of a word (identifier).
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the word (identifier) at the cursor position in a line of text.
///
/// # Example
/// ```
/// use gamsls::base::text_utils::extract_word_at_cursor;
///
/// let line = "x(i,j) = demand(j);";
/// assert_eq!(extract_word_at_cursor(line, 10), Some("demand".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 6), None); // space
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, position)?;
    Some(chars[start..end].iter().collect())
}

/// The part of the word that ends right before the cursor.
///
/// This is what completion filters against: for `dem|and` the prefix is
/// `dem`. Returns an empty string when the cursor is not preceded by a word
/// character.
///
/// # Example
/// ```
/// use gamsls::base::text_utils::word_prefix_before_cursor;
///
/// assert_eq!(word_prefix_before_cursor("x(i,dem", 7), "dem");
/// assert_eq!(word_prefix_before_cursor("x(i,", 4), "");
/// ```
pub fn word_prefix_before_cursor(line: &str, position: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = position.min(chars.len());
    let mut start = end;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }
    chars[start..end].iter().collect()
}
