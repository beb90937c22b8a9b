//! The compilation pipeline: tokenize, place, resolve, assemble, validate.

use ag_core::VertexId;
use ag_core::timing::Timer;
use ag_lex::TokenizationError;
use tracing::{debug, trace};

use crate::adjacency::AdjacencyMatrix;
use crate::builder::{GridBuilder, Layout};
use crate::catalog::{self, GraphToken};
use crate::error::GraphResult;
use crate::item::AttachedMap;
use crate::resolve::Resolver;
use crate::validate;

/// A vertex of the compiled graph.
///
/// Vertices are never merged by name: two labels reading `a` are two
/// vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
    /// Row of the label in the diagram.
    pub row: usize,
    /// First column of the label.
    pub col: usize,
}

/// The result of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompiledGraph {
    /// Vertices in discovery order (top to bottom, left to right).
    pub vertices: Vec<Vertex>,
    pub adjacency: AdjacencyMatrix,
}

impl CompiledGraph {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    /// Multiplicity between two vertices (0 for unknown ids).
    pub fn multiplicity(&self, a: VertexId, b: VertexId) -> u32 {
        self.adjacency.get(a.as_usize(), b.as_usize()).unwrap_or(0)
    }
}

/// How connection-count failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EdgeErrorPolicy {
    /// Fail with the first offending segment in token order.
    #[default]
    FirstFailure,
    /// Fail with every offending segment at once.
    Aggregate,
}

/// Compiler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CompileOptions {
    pub edge_errors: EdgeErrorPolicy,
}

/// Compiles ASCII-art diagrams into vertices and an adjacency matrix.
///
/// Holds only immutable options; all per-diagram state lives inside a
/// single `compile` call.
#[derive(Debug, Clone, Default)]
pub struct GraphCompiler {
    options: CompileOptions,
}

impl GraphCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Tokenize with the graph catalog.
    pub fn tokenize(&self, text: &str) -> Result<Vec<GraphToken>, TokenizationError> {
        catalog::tokenize(text)
    }

    /// Compile a diagram.
    ///
    /// Connection counts are only checked after every vertex has been
    /// resolved and the matrix assembled; any failure discards the result.
    pub fn compile(&self, text: &str) -> GraphResult<CompiledGraph> {
        let timer = Timer::start("tokenize");
        let tokens = self.tokenize(text)?;
        timer.stop_and_log();
        debug!(tokens = tokens.len(), "tokenized diagram");

        let timer = Timer::start("place");
        let mut builder = GridBuilder::new();
        for token in tokens {
            builder.add_token(token)?;
        }
        let Layout {
            grid,
            mut items,
            vertices,
            vertex_items,
            segments,
        } = builder.build();
        timer.stop_and_log();
        debug!(
            vertices = vertices.len(),
            segments = segments.len(),
            rows = grid.row_count(),
            "placed items on grid"
        );

        let timer = Timer::start("resolve");
        let mut resolver = Resolver::new(&grid, &mut items);
        let mut reports: Vec<AttachedMap> = Vec::with_capacity(vertices.len());
        for (vertex, &item) in vertices.iter().zip(&vertex_items) {
            let adjacent = resolver.get_adjacent(item)?;
            trace!(
                vertex = %vertex.name,
                id = %vertex.id,
                reached = adjacent.len(),
                "resolved vertex"
            );
            reports.push(adjacent);
        }
        timer.stop_and_log();

        let mut adjacency = AdjacencyMatrix::new(vertices.len());
        for (vertex, adjacent) in vertices.iter().zip(&reports) {
            for (other, multiplicity) in adjacent.iter() {
                adjacency.record(vertex.id.as_usize(), other.as_usize(), multiplicity)?;
            }
        }

        validate::validate_connections(&items, &segments, self.options.edge_errors)?;
        debug!(edges = adjacency.edge_count(), "compiled graph");

        Ok(CompiledGraph {
            vertices,
            adjacency,
        })
    }
}

/// Tokenize a diagram with the graph catalog.
pub fn tokenize(text: &str) -> Result<Vec<GraphToken>, TokenizationError> {
    catalog::tokenize(text)
}

/// Compile a diagram with default options.
pub fn compile(text: &str) -> GraphResult<CompiledGraph> {
    GraphCompiler::new().compile(text)
}
