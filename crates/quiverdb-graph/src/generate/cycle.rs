//! Cycle graph emission.

use quiverdb_core::GraphId;
use quiverdb_storage::catalog::Catalog;
use quiverdb_storage::sink::InsertionSink;

use super::context::ShapeWriter;
use super::error::GenerateResult;

/// Emit a cycle over `vertices` fresh vertices.
///
/// The first vertex is created alone; every later vertex is connected to
/// its predecessor immediately after creation, and a final edge closes the
/// cycle from the last vertex back to the first. Callers validate
/// `vertices >= 3` before emission.
///
/// Returns the id of the first created vertex.
pub(super) fn emit_cycle<C: Catalog, S: InsertionSink>(
    writer: &mut ShapeWriter<'_, C, S>,
    vertices: u64,
) -> GenerateResult<GraphId> {
    let first = writer.create_vertex()?;
    let mut prev = first;
    for _ in 1..vertices {
        let next = writer.create_vertex()?;
        writer.connect(prev, next)?;
        prev = next;
    }
    writer.connect(prev, first)?;
    Ok(first)
}
