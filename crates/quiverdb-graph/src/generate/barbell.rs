//! Barbell graph emission.

use quiverdb_core::GraphId;
use quiverdb_storage::catalog::Catalog;
use quiverdb_storage::sink::InsertionSink;

use super::complete::emit_complete;
use super::context::ShapeWriter;
use super::error::{GenerateError, GenerateResult};

/// Emit a barbell: two complete bells joined by a single bridge edge.
///
/// Both bells go through [`emit_complete`], so each bell's vertex ids are
/// tracked explicitly; the bridge runs from the first vertex of the first
/// bell to the last vertex of the second. Bell membership comes from the
/// recorded ids, never from arithmetic on counter bases, so repeated
/// generation against warm sequences keeps the bells disjoint. Callers
/// validate `bell_size >= 3` before emission.
///
/// Returns the id of the first created vertex.
pub(super) fn emit_barbell<C: Catalog, S: InsertionSink>(
    writer: &mut ShapeWriter<'_, C, S>,
    bell_size: u64,
) -> GenerateResult<GraphId> {
    let first_bell = emit_complete(writer, bell_size)?;
    let second_bell = emit_complete(writer, bell_size)?;

    let (Some(&bridge_start), Some(&bridge_end)) = (first_bell.first(), second_bell.last()) else {
        return Err(GenerateError::Internal("barbell emitted an empty bell".to_owned()));
    };
    writer.connect(bridge_start, bridge_end)?;
    Ok(bridge_start)
}
