//! Token rules: the building blocks of a rule table.

/// How a rule recognizes its token at a given column.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Exactly one occurrence of the character.
    Literal(char),
    /// The longest non-empty run of characters satisfying the predicate.
    Run(fn(char) -> bool),
}

impl Pattern {
    /// Length in chars of the match at the start of `input`, if any.
    pub fn match_len(&self, input: &[char]) -> Option<usize> {
        match *self {
            Pattern::Literal(c) => (input.first() == Some(&c)).then_some(1),
            Pattern::Run(accept) => {
                let len = input.iter().take_while(|&&c| accept(c)).count();
                (len > 0).then_some(len)
            }
        }
    }
}

/// A token kind paired with the pattern that produces it.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule<K> {
    pub kind: K,
    pub pattern: Pattern,
}

impl<K> TokenRule<K> {
    pub const fn literal(kind: K, c: char) -> Self {
        Self {
            kind,
            pattern: Pattern::Literal(c),
        }
    }

    pub const fn run(kind: K, accept: fn(char) -> bool) -> Self {
        Self {
            kind,
            pattern: Pattern::Run(accept),
        }
    }
}
