/// A column range on a single source line.
///
/// Columns are 1-indexed character columns; `end` is exclusive, so a
/// zero-width span has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `column`.
    pub fn empty_at(column: usize) -> Self {
        Self {
            start: column,
            end: column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a cursor column touches this span.
    ///
    /// A cursor sitting directly after the last character still touches
    /// the span, which is how editors report a caret at the end of a word.
    pub fn touches(&self, column: usize) -> bool {
        column >= self.start && column <= self.end
    }

    /// Check if a column falls strictly inside this span.
    pub fn contains(&self, column: usize) -> bool {
        column >= self.start && column < self.end
    }
}
