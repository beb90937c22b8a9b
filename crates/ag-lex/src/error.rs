//! Lexical error types.

use std::fmt;

use thiserror::Error;

use crate::token::Position;

/// A run of characters on one line that no rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnmatchedSpan {
    /// Where the unmatched run begins.
    pub position: Position,
    pub text: String,
}

impl fmt::Display for UnmatchedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid token \"{}\" found at row {}, col {}.",
            self.text, self.position.row, self.position.col
        )
    }
}

/// Every unmatched span found in the input, reported together after the
/// whole text has been scanned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_lines(.spans))]
pub struct TokenizationError {
    pub spans: Vec<UnmatchedSpan>,
}

impl TokenizationError {
    pub fn new(spans: Vec<UnmatchedSpan>) -> Self {
        Self { spans }
    }

    pub fn spans(&self) -> &[UnmatchedSpan] {
        &self.spans
    }
}

fn join_lines(spans: &[UnmatchedSpan]) -> String {
    spans
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_one_span_per_line() {
        let err = TokenizationError::new(vec![
            UnmatchedSpan {
                position: Position::new(0, 2),
                text: "#".into(),
            },
            UnmatchedSpan {
                position: Position::new(4, 0),
                text: "~~".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid token \"#\" found at row 0, col 2.\n\
             Invalid token \"~~\" found at row 4, col 0."
        );
    }
}
