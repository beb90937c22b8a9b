//! Grid items and the geometric attachment protocol.

use std::collections::BTreeMap;

use ag_core::VertexId;
use ag_lex::Position;

use crate::catalog::{GraphToken, SegmentKind};
use crate::error::{GraphError, GraphResult};

/// Vertex identity -> multiplicity of the paths reaching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachedMap(BTreeMap<VertexId, u32>);

impl AttachedMap {
    pub const EMPTY: AttachedMap = AttachedMap(BTreeMap::new());

    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(vertex: VertexId) -> Self {
        let mut map = Self::new();
        map.add(vertex, 1);
        map
    }

    pub fn add(&mut self, vertex: VertexId, multiplicity: u32) {
        *self.0.entry(vertex).or_insert(0) += multiplicity;
    }

    /// Sum `other` into `self` by identity.
    pub fn merge(&mut self, other: &AttachedMap) {
        for (&vertex, &multiplicity) in &other.0 {
            self.add(vertex, multiplicity);
        }
    }

    /// Remove a single occurrence of `vertex`, dropping it at zero.
    pub fn discount(&mut self, vertex: VertexId) {
        if let Some(m) = self.0.get_mut(&vertex) {
            *m -= 1;
            if *m == 0 {
                self.0.remove(&vertex);
            }
        }
    }

    pub fn get(&self, vertex: VertexId) -> u32 {
        self.0.get(&vertex).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, u32)> + '_ {
        self.0.iter().map(|(&v, &m)| (v, m))
    }
}

impl FromIterator<(VertexId, u32)> for AttachedMap {
    fn from_iter<I: IntoIterator<Item = (VertexId, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (vertex, multiplicity) in iter {
            map.add(vertex, multiplicity);
        }
        map
    }
}

/// Traversal state of an edge segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// On the current traversal path; re-entry means a cycle.
    Visiting,
    /// Resolved; `attached` holds the cached result.
    Visited,
}

/// What occupies a cell: a labelled vertex or one edge glyph.
#[derive(Debug, Clone)]
pub enum ItemKind {
    Vertex {
        vertex: VertexId,
        /// Memoized adjacency, filled by the first `get_adjacent`.
        adjacent: Option<AttachedMap>,
    },
    Segment {
        kind: &'static SegmentKind,
        state: VisitState,
        connections: usize,
        attached: AttachedMap,
    },
}

/// A grid occupant together with the token it came from.
#[derive(Debug, Clone)]
pub struct GridItem {
    pub token: GraphToken,
    pub kind: ItemKind,
}

impl GridItem {
    pub fn vertex(token: GraphToken, vertex: VertexId) -> Self {
        Self {
            token,
            kind: ItemKind::Vertex {
                vertex,
                adjacent: None,
            },
        }
    }

    pub fn segment(token: GraphToken, kind: &'static SegmentKind) -> Self {
        Self {
            token,
            kind: ItemKind::Segment {
                kind,
                state: VisitState::Unvisited,
                connections: 0,
                attached: AttachedMap::new(),
            },
        }
    }

    pub fn position(&self) -> Position {
        self.token.position
    }

    pub fn width(&self) -> usize {
        self.token.width
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self.kind, ItemKind::Vertex { .. })
    }

    /// The vertex identity, for vertex items.
    pub fn vertex_id(&self) -> Option<VertexId> {
        match self.kind {
            ItemKind::Vertex { vertex, .. } => Some(vertex),
            ItemKind::Segment { .. } => None,
        }
    }

    /// Connections counted so far; always 0 for vertices.
    pub fn connections(&self) -> usize {
        match self.kind {
            ItemKind::Vertex { .. } => 0,
            ItemKind::Segment { connections, .. } => connections,
        }
    }

    /// One-sided attachment test.
    ///
    /// A vertex touches anything inside the ring of cells around its label.
    /// A segment touches `other` only if one of its ports lands on a column
    /// `other` covers.
    pub fn is_attached_to(&self, other: &GridItem) -> bool {
        let Position { row, col } = self.position();
        let other_pos = other.position();
        let other_end = other_pos.col + other.width();

        match &self.kind {
            ItemKind::Vertex { .. } => {
                other_pos.row.abs_diff(row) <= 1
                    && other_pos.col <= col + self.width()
                    && other_end >= col
            }
            ItemKind::Segment { kind, .. } => kind.ports.iter().any(|port| {
                let r = row as isize + port.row;
                let c = col as isize + port.col;
                r == other_pos.row as isize
                    && c >= other_pos.col as isize
                    && c < other_end as isize
            }),
        }
    }

    /// Check the final connection count against the segment's bounds.
    pub fn assert_processed(&self) -> GraphResult<()> {
        let ItemKind::Segment {
            kind, connections, ..
        } = &self.kind
        else {
            return Ok(());
        };

        if *connections < kind.min_connections {
            return Err(GraphError::StrayEdge {
                token: self.token.clone(),
                connections: *connections,
                min: kind.min_connections,
            });
        }
        if *connections > kind.max_connections {
            return Err(GraphError::OverconnectedEdge {
                token: self.token.clone(),
                connections: *connections,
                max: kind.max_connections,
            });
        }
        Ok(())
    }
}

/// Attachment holds only when both sides agree.
pub fn are_attached(a: &GridItem, b: &GridItem) -> bool {
    a.is_attached_to(b) && b.is_attached_to(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BACK_SLASH, FORWARD_SLASH, PIPE, TokenKind};

    fn token(kind: TokenKind, row: usize, col: usize, text: &str) -> GraphToken {
        GraphToken {
            kind,
            position: Position::new(row, col),
            width: text.chars().count(),
            text: text.into(),
        }
    }

    fn vertex(row: usize, col: usize, name: &str) -> GridItem {
        GridItem::vertex(
            token(TokenKind::Identifier, row, col, name),
            VertexId::from_index(0),
        )
    }

    fn segment(kind: &'static SegmentKind, row: usize, col: usize) -> GridItem {
        let token_kind = match kind.glyph {
            '\\' => TokenKind::BackSlash,
            '/' => TokenKind::ForwardSlash,
            _ => TokenKind::Pipe,
        };
        GridItem::segment(
            token(token_kind, row, col, &kind.glyph.to_string()),
            kind,
        )
    }

    #[test]
    fn attached_map_sums_and_discounts() {
        let a = VertexId::from_index(0);
        let b = VertexId::from_index(1);
        let mut map: AttachedMap = [(a, 1), (b, 2)].into_iter().collect();
        map.merge(&AttachedMap::singleton(a));
        assert_eq!(map.get(a), 2);

        map.discount(a);
        map.discount(a);
        assert_eq!(map.get(a), 0);
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(b, 2)]);
    }

    #[test]
    fn vertex_touches_its_surrounding_ring() {
        let v = vertex(1, 2, "abc");
        for (row, col) in [(0, 1), (0, 5), (2, 3), (1, 1), (1, 5)] {
            assert!(v.is_attached_to(&segment(&PIPE, row, col)), "({row},{col})");
        }
        for (row, col) in [(0, 0), (0, 6), (3, 3), (1, 6)] {
            assert!(!v.is_attached_to(&segment(&PIPE, row, col)), "({row},{col})");
        }
    }

    #[test]
    fn slash_ports_are_directional() {
        let top = vertex(0, 3, "a");
        let slash = segment(&FORWARD_SLASH, 1, 2);
        let backslash = segment(&BACK_SLASH, 1, 2);

        assert!(are_attached(&top, &slash));
        // `\` at (1,2) reaches up-left to (0,1), not (0,3).
        assert!(top.is_attached_to(&backslash));
        assert!(!are_attached(&top, &backslash));
    }

    #[test]
    fn segment_ports_see_any_column_of_a_wide_label() {
        let label = vertex(0, 0, "long");
        assert!(are_attached(&segment(&PIPE, 1, 3), &label));
        assert!(are_attached(&segment(&BACK_SLASH, 1, 4), &label));
        assert!(!are_attached(&segment(&BACK_SLASH, 1, 5), &label));
    }

    #[test]
    fn stacked_pipes_attach() {
        assert!(are_attached(&segment(&PIPE, 0, 0), &segment(&PIPE, 1, 0)));
        assert!(are_attached(&segment(&PIPE, 0, 0), &segment(&PIPE, 1, 1)));
        // Side by side pipes share no port.
        assert!(!are_attached(&segment(&PIPE, 0, 0), &segment(&PIPE, 0, 1)));
    }

    #[test]
    fn assert_processed_checks_both_bounds() {
        let mut slash = segment(&FORWARD_SLASH, 4, 7);
        match slash.assert_processed() {
            Err(GraphError::StrayEdge {
                token,
                connections,
                min,
            }) => {
                assert_eq!(token.position, Position::new(4, 7));
                assert_eq!((connections, min), (0, 2));
            }
            other => panic!("expected stray edge, got {other:?}"),
        }

        if let ItemKind::Segment { connections, .. } = &mut slash.kind {
            *connections = 2;
        }
        assert!(slash.assert_processed().is_ok());

        if let ItemKind::Segment { connections, .. } = &mut slash.kind {
            *connections = 3;
        }
        assert!(matches!(
            slash.assert_processed(),
            Err(GraphError::OverconnectedEdge {
                connections: 3,
                max: 2,
                ..
            })
        ));
    }

    #[test]
    fn pipe_allows_up_to_six() {
        let mut pipe = segment(&PIPE, 0, 0);
        if let ItemKind::Segment { connections, .. } = &mut pipe.kind {
            *connections = 6;
        }
        assert!(pipe.assert_processed().is_ok());
        if let ItemKind::Segment { connections, .. } = &mut pipe.kind {
            *connections = 7;
        }
        assert!(matches!(
            pipe.assert_processed(),
            Err(GraphError::OverconnectedEdge { max: 6, .. })
        ));
    }

    #[test]
    fn vertices_are_always_processed() {
        assert!(vertex(0, 0, "a").assert_processed().is_ok());
        assert_eq!(vertex(0, 0, "a").connections(), 0);
    }
}
