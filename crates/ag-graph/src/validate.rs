//! Post-resolution validation of edge-segment connection counts.

use ag_core::ItemId;

use crate::compiler::EdgeErrorPolicy;
use crate::error::{GraphError, GraphResult};
use crate::item::GridItem;

/// Check every segment's connection count against its glyph bounds.
///
/// Segments are checked in token order. With [`EdgeErrorPolicy::FirstFailure`]
/// the first offender is returned as is; with [`EdgeErrorPolicy::Aggregate`]
/// every offender is collected into [`GraphError::Connectivity`].
pub(crate) fn validate_connections(
    items: &[GridItem],
    segments: &[ItemId],
    policy: EdgeErrorPolicy,
) -> GraphResult<()> {
    let mut failures = Vec::new();

    for &id in segments {
        if let Err(err) = items[id.as_usize()].assert_processed() {
            match policy {
                EdgeErrorPolicy::FirstFailure => return Err(err),
                EdgeErrorPolicy::Aggregate => failures.push(err),
            }
        }
    }

    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0)),
        _ => Err(GraphError::Connectivity(failures)),
    }
}
