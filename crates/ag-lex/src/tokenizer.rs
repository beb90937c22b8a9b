//! Line-oriented tokenizer driven by a priority-ordered rule table.
//!
//! At every column the rules are tried in table order and the first one
//! that matches consumes its match. Columns no rule accepts are gathered
//! into [`UnmatchedSpan`]s; scanning always finishes the whole input so
//! that every lexical error is reported in one go.

use crate::error::{TokenizationError, UnmatchedSpan};
use crate::rule::TokenRule;
use crate::token::{Position, Token};

/// A tokenizer over a borrowed rule table.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'r, K> {
    rules: &'r [TokenRule<K>],
}

impl<'r, K: Copy> Tokenizer<'r, K> {
    /// Earlier rules win conflicts with later ones.
    pub const fn new(rules: &'r [TokenRule<K>]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r [TokenRule<K>] {
        self.rules
    }

    /// Tokenize `text` line by line.
    ///
    /// Empty lines yield no tokens but still advance the row counter.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token<K>>, TokenizationError> {
        let mut tokens = Vec::new();
        let mut unmatched = Vec::new();

        for (row, line) in text.lines().enumerate() {
            if !line.is_empty() {
                self.scan_line(row, line, &mut tokens, &mut unmatched);
            }
        }

        if unmatched.is_empty() {
            Ok(tokens)
        } else {
            Err(TokenizationError::new(unmatched))
        }
    }

    fn scan_line(
        &self,
        row: usize,
        line: &str,
        tokens: &mut Vec<Token<K>>,
        unmatched: &mut Vec<UnmatchedSpan>,
    ) {
        let chars: Vec<char> = line.chars().collect();
        let mut col = 0;
        let mut bad_start: Option<usize> = None;

        while col < chars.len() {
            match self.match_at(&chars[col..]) {
                Some((kind, width)) => {
                    if let Some(start) = bad_start.take() {
                        unmatched.push(span(row, start, &chars[start..col]));
                    }
                    tokens.push(Token {
                        kind,
                        position: Position::new(row, col),
                        width,
                        text: chars[col..col + width].iter().collect(),
                    });
                    col += width;
                }
                None => {
                    bad_start.get_or_insert(col);
                    col += 1;
                }
            }
        }

        if let Some(start) = bad_start {
            unmatched.push(span(row, start, &chars[start..]));
        }
    }

    fn match_at(&self, input: &[char]) -> Option<(K, usize)> {
        self.rules
            .iter()
            .find_map(|rule| rule.pattern.match_len(input).map(|len| (rule.kind, len)))
    }
}

fn span(row: usize, col: usize, chars: &[char]) -> UnmatchedSpan {
    UnmatchedSpan {
        position: Position::new(row, col),
        text: chars.iter().collect(),
    }
}
