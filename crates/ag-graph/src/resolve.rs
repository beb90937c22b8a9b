//! Reachability resolution over the item arena.
//!
//! Each edge segment walks Unvisited -> Visiting -> Visited exactly once.
//! Re-entering a Visiting segment means the walk went around a closed loop;
//! that re-entry contributes nothing. The walk keeps its own frame stack, so
//! arbitrarily long edge runs cannot overflow the call stack.

use ag_core::{CoreError, CoreResult, ItemId, VertexId};

use crate::grid::Grid;
use crate::item::{AttachedMap, GridItem, ItemKind, VisitState, are_attached};

/// One segment whose neighbors are still being folded in.
struct Frame {
    item: ItemId,
    neighbors: Vec<ItemId>,
    next: usize,
    acc: AttachedMap,
}

/// What a neighbor contributes without descending into it.
enum Step {
    Vertex(VertexId),
    Cached,
    Cycle,
    Descend,
}

/// Mutable view over one compilation's grid items.
pub struct Resolver<'a> {
    grid: &'a Grid,
    items: &'a mut [GridItem],
}

impl<'a> Resolver<'a> {
    pub fn new(grid: &'a Grid, items: &'a mut [GridItem]) -> Self {
        Self { grid, items }
    }

    fn item(&self, id: ItemId) -> &GridItem {
        &self.items[id.as_usize()]
    }

    /// Neighbors mutually attached to `id`, in grid scan order.
    pub fn attached_neighbors(&self, id: ItemId) -> Vec<ItemId> {
        let item = self.item(id);
        let pos = item.position();
        self.grid
            .neighbors(pos.row, pos.col, item.width())
            .into_iter()
            .filter(|&n| n != id && are_attached(item, self.item(n)))
            .collect()
    }

    /// Vertices reachable from `id`, with multiplicities.
    ///
    /// A vertex is terminal and yields itself. A segment yields the sum of
    /// what its mutually attached neighbors yield.
    pub fn get_attached(&mut self, id: ItemId) -> AttachedMap {
        match self.step(id) {
            Step::Vertex(vertex) => return AttachedMap::singleton(vertex),
            Step::Cycle => return AttachedMap::new(),
            Step::Cached => return self.cached(id).clone(),
            Step::Descend => {}
        }

        let mut stack = vec![self.enter(id)];
        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.neighbors.get(frame.next) else {
                let Some(done) = stack.pop() else { break };
                self.leave(done.item, done.acc);
                match stack.last_mut() {
                    Some(parent) => parent.acc.merge(self.cached(done.item)),
                    None => break,
                }
                continue;
            };
            frame.next += 1;

            match self.step(next) {
                Step::Vertex(vertex) => frame.acc.add(vertex, 1),
                Step::Cached => frame.acc.merge(self.cached(next)),
                Step::Cycle => {}
                Step::Descend => {
                    let child = self.enter(next);
                    stack.push(child);
                }
            }
        }

        self.cached(id).clone()
    }

    /// Vertices adjacent to vertex `id` through edge segments (memoized).
    ///
    /// Each attached segment's map includes `id` once for the segment's own
    /// touch; that occurrence is discounted, so `id` only remains when a
    /// path loops back to it.
    pub fn get_adjacent(&mut self, id: ItemId) -> CoreResult<AttachedMap> {
        let me = match &self.item(id).kind {
            ItemKind::Vertex {
                adjacent: Some(memo),
                ..
            } => return Ok(memo.clone()),
            ItemKind::Vertex { vertex, .. } => *vertex,
            ItemKind::Segment { .. } => {
                return Err(CoreError::Invariant {
                    what: "adjacency requested for an edge segment",
                });
            }
        };

        let mut adjacent = AttachedMap::new();
        for n in self.attached_neighbors(id) {
            if self.item(n).is_vertex() {
                continue;
            }
            let mut reached = self.get_attached(n);
            reached.discount(me);
            adjacent.merge(&reached);
        }

        if let ItemKind::Vertex { adjacent: memo, .. } = &mut self.items[id.as_usize()].kind {
            *memo = Some(adjacent.clone());
        }
        Ok(adjacent)
    }

    fn step(&self, id: ItemId) -> Step {
        match &self.item(id).kind {
            ItemKind::Vertex { vertex, .. } => Step::Vertex(*vertex),
            ItemKind::Segment { state, .. } => match state {
                VisitState::Unvisited => Step::Descend,
                VisitState::Visiting => Step::Cycle,
                VisitState::Visited => Step::Cached,
            },
        }
    }

    /// Mark `id` Visiting and count its connections.
    fn enter(&mut self, id: ItemId) -> Frame {
        let neighbors = self.attached_neighbors(id);
        if let ItemKind::Segment {
            state, connections, ..
        } = &mut self.items[id.as_usize()].kind
        {
            *state = VisitState::Visiting;
            *connections += neighbors.len();
        }
        Frame {
            item: id,
            neighbors,
            next: 0,
            acc: AttachedMap::new(),
        }
    }

    fn leave(&mut self, id: ItemId, acc: AttachedMap) {
        if let ItemKind::Segment {
            state, attached, ..
        } = &mut self.items[id.as_usize()].kind
        {
            *state = VisitState::Visited;
            *attached = acc;
        }
    }

    fn cached(&self, id: ItemId) -> &AttachedMap {
        static EMPTY: AttachedMap = AttachedMap::EMPTY;
        match &self.item(id).kind {
            ItemKind::Segment { attached, .. } => attached,
            ItemKind::Vertex { .. } => &EMPTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;
    use crate::catalog::tokenize;

    fn layout(text: &str) -> crate::builder::Layout {
        let mut builder = GridBuilder::new();
        for token in tokenize(text).unwrap() {
            builder.add_token(token).unwrap();
        }
        builder.build()
    }

    fn v(i: u32) -> VertexId {
        VertexId::from_index(i)
    }

    #[test]
    fn segment_between_two_vertices_reaches_both() {
        let mut layout = layout("a\n|\nb");
        let pipe = layout.segments[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);

        let reached = resolver.get_attached(pipe);
        assert_eq!(reached.iter().collect::<Vec<_>>(), vec![(v(0), 1), (v(1), 1)]);
        assert_eq!(layout.items[pipe.as_usize()].connections(), 2);
    }

    #[test]
    fn repeated_calls_do_not_recount() {
        let mut layout = layout("a\n|\n|\nb");
        let top = layout.segments[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);

        let first = resolver.get_attached(top);
        let second = resolver.get_attached(top);
        assert_eq!(first, second);
        for &seg in &layout.segments {
            assert_eq!(layout.items[seg.as_usize()].connections(), 2);
        }
    }

    #[test]
    fn vertex_is_terminal() {
        let mut layout = layout("a");
        let a = layout.vertex_items[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);
        assert_eq!(resolver.get_attached(a), AttachedMap::singleton(v(0)));
    }

    #[test]
    fn vertexless_ring_terminates_empty() {
        // A closed diamond of glyphs with nothing attached.
        let mut layout = layout(" ^\n< >\n |");
        let first = layout.segments[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);
        assert!(resolver.get_attached(first).is_empty());
        for &seg in &layout.segments {
            assert_eq!(layout.items[seg.as_usize()].connections(), 2);
        }
    }

    #[test]
    fn adjacency_discounts_own_touch() {
        let mut layout = layout("  a\n / \\\nb   c");
        let a = layout.vertex_items[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);

        let adjacent = resolver.get_adjacent(a).unwrap();
        assert_eq!(adjacent.iter().collect::<Vec<_>>(), vec![(v(1), 1), (v(2), 1)]);
        // Memoized result is returned on the second call.
        assert_eq!(resolver.get_adjacent(a).unwrap(), adjacent);
    }

    #[test]
    fn adjacency_of_segment_is_an_invariant_error() {
        let mut layout = layout("a\n|\nb");
        let pipe = layout.segments[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);
        assert!(matches!(
            resolver.get_adjacent(pipe),
            Err(CoreError::Invariant { .. })
        ));
    }

    #[test]
    fn long_runs_do_not_overflow_the_stack() {
        let mut text = String::from("top\n");
        for _ in 0..20_000 {
            text.push_str(" |\n");
        }
        text.push_str("bottom");

        let mut layout = layout(&text);
        let top = layout.vertex_items[0];
        let mut resolver = Resolver::new(&layout.grid, &mut layout.items);
        let adjacent = resolver.get_adjacent(top).unwrap();
        assert_eq!(adjacent.iter().collect::<Vec<_>>(), vec![(v(1), 1)]);
    }
}
