//! ag-graph: compiles ASCII-art diagrams into graphs.
//!
//! Provides:
//! - The fixed glyph catalog (token rules and segment port tables)
//! - A spatial grid of placed tokens
//! - Cycle-safe, memoized resolution of which vertices each edge reaches
//! - A triangular adjacency matrix of edge multiplicities
//!
//! # Example
//!
//! ```
//! use ag_graph::compile;
//!
//! let graph = compile("  a\n / \\\nb   c").unwrap();
//!
//! assert_eq!(graph.vertices.len(), 3);
//! assert_eq!(graph.adjacency.rows(), &[vec![0], vec![1, 0], vec![1, 0, 0]]);
//! ```

pub mod adjacency;
pub mod builder;
pub mod catalog;
pub mod compiler;
pub mod error;
pub mod grid;
pub mod item;
pub mod resolve;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use adjacency::AdjacencyMatrix;
pub use builder::{GridBuilder, Layout};
pub use catalog::{GraphToken, SegmentKind, TokenKind};
pub use compiler::{
    CompileOptions, CompiledGraph, EdgeErrorPolicy, GraphCompiler, Vertex, compile, tokenize,
};
pub use error::{GraphError, GraphResult};
pub use grid::Grid;
pub use item::{AttachedMap, GridItem, ItemKind, VisitState};
pub use resolve::Resolver;
