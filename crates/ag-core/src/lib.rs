//! ag-core: shared foundation for asciigraph.
//!
//! Contains:
//! - ids (compact IDs for vertices and grid items)
//! - error (shared error types)
//! - timing (opt-in stage timers)

pub mod error;
pub mod ids;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult, ensure_in_bounds};
pub use ids::*;
