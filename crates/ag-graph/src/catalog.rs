//! The fixed glyph catalog: token rules and edge-segment port tables.

use ag_lex::{Token, TokenRule, TokenizationError, Tokenizer};

/// Kinds of token that can appear in a graph diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `[A-Za-z0-9_]+`, a vertex label.
    Identifier,
    /// A run of spaces.
    Space,
    /// `\`
    BackSlash,
    /// `/`
    ForwardSlash,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `^`
    TopAngle,
    /// `|`
    Pipe,
}

/// A token lexed from a graph diagram.
pub type GraphToken = Token<TokenKind>;

/// Relative offset, from a segment's own cell, where a neighbor may touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port {
    pub row: isize,
    pub col: isize,
}

impl Port {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// Attachment rules shared by every segment drawn with the same glyph.
#[derive(Debug, PartialEq, Eq)]
pub struct SegmentKind {
    pub glyph: char,
    pub ports: &'static [Port],
    pub min_connections: usize,
    pub max_connections: usize,
}

pub static BACK_SLASH: SegmentKind = SegmentKind {
    glyph: '\\',
    ports: &[Port::new(-1, -1), Port::new(1, 1)],
    min_connections: 2,
    max_connections: 2,
};

pub static FORWARD_SLASH: SegmentKind = SegmentKind {
    glyph: '/',
    ports: &[Port::new(-1, 1), Port::new(1, -1)],
    min_connections: 2,
    max_connections: 2,
};

pub static LEFT_ANGLE: SegmentKind = SegmentKind {
    glyph: '<',
    ports: &[Port::new(-1, 1), Port::new(1, 1)],
    min_connections: 2,
    max_connections: 2,
};

pub static RIGHT_ANGLE: SegmentKind = SegmentKind {
    glyph: '>',
    ports: &[Port::new(-1, -1), Port::new(1, -1)],
    min_connections: 2,
    max_connections: 2,
};

pub static TOP_ANGLE: SegmentKind = SegmentKind {
    glyph: '^',
    ports: &[Port::new(1, -1), Port::new(1, 1)],
    min_connections: 2,
    max_connections: 2,
};

pub static PIPE: SegmentKind = SegmentKind {
    glyph: '|',
    ports: &[
        Port::new(-1, -1),
        Port::new(-1, 0),
        Port::new(-1, 1),
        Port::new(1, -1),
        Port::new(1, 0),
        Port::new(1, 1),
    ],
    min_connections: 2,
    max_connections: 6,
};

impl TokenKind {
    /// Port table for edge glyphs; `None` for identifiers and spaces.
    pub fn segment_kind(self) -> Option<&'static SegmentKind> {
        match self {
            TokenKind::Identifier | TokenKind::Space => None,
            TokenKind::BackSlash => Some(&BACK_SLASH),
            TokenKind::ForwardSlash => Some(&FORWARD_SLASH),
            TokenKind::LeftAngle => Some(&LEFT_ANGLE),
            TokenKind::RightAngle => Some(&RIGHT_ANGLE),
            TokenKind::TopAngle => Some(&TOP_ANGLE),
            TokenKind::Pipe => Some(&PIPE),
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_space(c: char) -> bool {
    c == ' '
}

/// Token rules in priority order.
pub static RULES: [TokenRule<TokenKind>; 8] = [
    TokenRule::run(TokenKind::Identifier, is_identifier_char),
    TokenRule::run(TokenKind::Space, is_space),
    TokenRule::literal(TokenKind::BackSlash, '\\'),
    TokenRule::literal(TokenKind::ForwardSlash, '/'),
    TokenRule::literal(TokenKind::LeftAngle, '<'),
    TokenRule::literal(TokenKind::RightAngle, '>'),
    TokenRule::literal(TokenKind::TopAngle, '^'),
    TokenRule::literal(TokenKind::Pipe, '|'),
];

pub static TOKENIZER: Tokenizer<'static, TokenKind> = Tokenizer::new(&RULES);

/// Tokenize a diagram with the graph catalog.
pub fn tokenize(text: &str) -> Result<Vec<GraphToken>, TokenizationError> {
    TOKENIZER.tokenize(text)
}
