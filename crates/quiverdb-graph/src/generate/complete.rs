//! Complete graph emission.

use quiverdb_core::GraphId;
use quiverdb_storage::catalog::Catalog;
use quiverdb_storage::sink::InsertionSink;

use super::context::ShapeWriter;
use super::error::{GenerateError, GenerateResult};

/// Emit a complete graph over `vertices` fresh vertices.
///
/// All vertices are created before any edge. Edges then cover every
/// unordered vertex pair exactly once, directed from the earlier-created
/// vertex to the later one, so `n` vertices always carry `n * (n - 1) / 2`
/// edges and no self-loops. Fewer than 2 vertices yield no edges. Callers
/// bound `vertices` to the id space before emission.
///
/// Returns the created vertex ids in creation order, so composite shapes
/// can address individual vertices afterwards.
pub(super) fn emit_complete<C: Catalog, S: InsertionSink>(
    writer: &mut ShapeWriter<'_, C, S>,
    vertices: u64,
) -> GenerateResult<Vec<GraphId>> {
    let capacity = usize::try_from(vertices).map_err(|_| {
        GenerateError::InvalidArgument(format!(
            "vertex count does not fit this platform: {vertices}"
        ))
    })?;
    let mut created = Vec::with_capacity(capacity);
    for _ in 0..vertices {
        created.push(writer.create_vertex()?);
    }
    for (i, &start) in created.iter().enumerate() {
        for &end in &created[i + 1..] {
            writer.connect(start, end)?;
        }
    }
    Ok(created)
}
