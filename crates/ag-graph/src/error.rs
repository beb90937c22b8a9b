//! Graph compilation error types.

use ag_core::CoreError;
use ag_lex::TokenizationError;
use thiserror::Error;

use crate::catalog::GraphToken;

pub type GraphResult<T> = Result<T, GraphError>;

/// Everything that can make a compilation fail.
///
/// Compilation is all-or-nothing: any of these aborts the call and no
/// partial vertex list or matrix is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The diagram contains characters outside the glyph catalog.
    #[error(transparent)]
    Tokenize(#[from] TokenizationError),

    /// An edge segment resolved fewer connections than its glyph requires.
    #[error(
        "Stray edge segment '{}' in graph at row {}, col {}.",
        .token.text,
        .token.position.row,
        .token.position.col
    )]
    StrayEdge {
        token: GraphToken,
        connections: usize,
        min: usize,
    },

    /// An edge segment resolved more connections than its glyph allows.
    #[error(
        "Overconnected edge segment '{}' in graph at row {}, col {} ({connections} connections, at most {max}).",
        .token.text,
        .token.position.row,
        .token.position.col
    )]
    OverconnectedEdge {
        token: GraphToken,
        connections: usize,
        max: usize,
    },

    /// Every offending segment, when errors are aggregated.
    #[error("{}", join_lines(.0))]
    Connectivity(Vec<GraphError>),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GraphError {
    /// The offending token for connectivity errors.
    pub fn token(&self) -> Option<&GraphToken> {
        match self {
            GraphError::StrayEdge { token, .. } | GraphError::OverconnectedEdge { token, .. } => {
                Some(token)
            }
            _ => None,
        }
    }
}

fn join_lines(errors: &[GraphError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TokenKind;
    use ag_lex::Position;

    fn slash(row: usize, col: usize) -> GraphToken {
        GraphToken {
            kind: TokenKind::ForwardSlash,
            position: Position::new(row, col),
            width: 1,
            text: "/".into(),
        }
    }

    #[test]
    fn stray_edge_message_names_glyph_and_cell() {
        let err = GraphError::StrayEdge {
            token: slash(2, 5),
            connections: 1,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "Stray edge segment '/' in graph at row 2, col 5."
        );
        assert_eq!(err.token().map(|t| t.position), Some(Position::new(2, 5)));
    }

    #[test]
    fn connectivity_lists_every_segment() {
        let err = GraphError::Connectivity(vec![
            GraphError::StrayEdge {
                token: slash(0, 0),
                connections: 0,
                min: 2,
            },
            GraphError::OverconnectedEdge {
                token: slash(1, 1),
                connections: 3,
                max: 2,
            },
        ]);
        let msg = err.to_string();
        assert_eq!(msg.lines().count(), 2);
        assert!(msg.contains("(3 connections, at most 2)"));
        assert!(err.token().is_none());
    }
}
