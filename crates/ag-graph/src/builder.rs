//! Incremental placement of tokens onto the grid.

use ag_core::{ItemId, VertexId};

use crate::catalog::{GraphToken, TokenKind};
use crate::compiler::Vertex;
use crate::error::GraphResult;
use crate::grid::Grid;
use crate::item::GridItem;

/// Builder that turns a token stream into a populated grid.
///
/// Feed tokens in stream order with `add_token`, then call `build()` to
/// get the [`Layout`] the resolver works on. Vertex ids follow the order
/// identifiers were added.
#[derive(Debug, Default)]
pub struct GridBuilder {
    grid: Grid,
    items: Vec<GridItem>,
    vertices: Vec<Vertex>,
    vertex_items: Vec<ItemId>,
    segments: Vec<ItemId>,
}

/// Everything one compilation needs after placement.
#[derive(Debug)]
pub struct Layout {
    pub(crate) grid: Grid,
    pub(crate) items: Vec<GridItem>,
    pub(crate) vertices: Vec<Vertex>,
    /// Arena id of each vertex, indexed by vertex id.
    pub(crate) vertex_items: Vec<ItemId>,
    /// Edge segments in token order.
    pub(crate) segments: Vec<ItemId>,
}

impl GridBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one token. Returns the arena id of the item created for it,
    /// or `None` for spaces, which only mark their cells empty.
    pub fn add_token(&mut self, token: GraphToken) -> GraphResult<Option<ItemId>> {
        let position = token.position;
        let width = token.width;

        let item = match token.kind {
            TokenKind::Space => None,
            TokenKind::Identifier => {
                let vertex = VertexId::from_usize(self.vertices.len());
                self.vertices.push(Vertex {
                    id: vertex,
                    name: token.text.clone(),
                    row: position.row,
                    col: position.col,
                });
                let id = self.push_item(GridItem::vertex(token, vertex));
                self.vertex_items.push(id);
                Some(id)
            }
            kind => match kind.segment_kind() {
                Some(segment) => {
                    let id = self.push_item(GridItem::segment(token, segment));
                    self.segments.push(id);
                    Some(id)
                }
                None => None,
            },
        };

        self.grid.insert(position, width, item)?;
        Ok(item)
    }

    /// Number of vertices placed so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge segments placed so far.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Freeze the placement.
    pub fn build(self) -> Layout {
        Layout {
            grid: self.grid,
            items: self.items,
            vertices: self.vertices,
            vertex_items: self.vertex_items,
            segments: self.segments,
        }
    }

    fn push_item(&mut self, item: GridItem) -> ItemId {
        let id = ItemId::from_usize(self.items.len());
        self.items.push(item);
        id
    }
}

impl Layout {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }
}
