//! Token and position types shared by every rule table.

use std::fmt;

/// Row/column location of a character in the source text.
///
/// `row` is the 0-based line number, `col` the 0-based character offset
/// within that line (counted in `char`s, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// A lexed token. Never spans more than one row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K> {
    pub kind: K,
    pub position: Position,
    /// Number of consecutive columns covered on `position.row`.
    pub width: usize,
    pub text: String,
}

impl<K> Token<K> {
    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    /// One past the last covered column.
    pub fn end_col(&self) -> usize {
        self.position.col + self.width
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} at {} (width {})",
            self.kind, self.text, self.position, self.width
        )
    }
}
