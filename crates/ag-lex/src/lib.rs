//! ag-lex: line-oriented, rule-table tokenizer.
//!
//! Provides:
//! - Token and position types with row/column spans
//! - Rule tables built from literal characters and character-class runs
//! - A tokenizer that aggregates every lexical error before failing
//!
//! # Example
//!
//! ```
//! use ag_lex::{TokenRule, Tokenizer};
//!
//! fn is_word(c: char) -> bool {
//!     c.is_ascii_alphabetic()
//! }
//!
//! const RULES: [TokenRule<&str>; 2] = [
//!     TokenRule::run("word", is_word),
//!     TokenRule::literal("bar", '|'),
//! ];
//!
//! let tokens = Tokenizer::new(&RULES).tokenize("ab|c").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].position.col, 3);
//! ```

pub mod error;
pub mod rule;
pub mod token;
pub mod tokenizer;

// Re-exports for ergonomics
pub use error::{TokenizationError, UnmatchedSpan};
pub use rule::{Pattern, TokenRule};
pub use token::{Position, Token};
pub use tokenizer::Tokenizer;
