//! Insertion seam for generated records.

mod error;

pub use error::SinkError;

use quiverdb_core::{Edge, GraphOid, LabelName, Vertex};

/// Destination for generated vertex and edge records.
///
/// Generators call the sink once per created record, in the shape-defined
/// creation order. Implementations persist records under the given graph
/// and label; the enclosing transaction belongs to the caller, so a failed
/// insertion simply propagates and aborts the generation with no
/// compensating cleanup here.
pub trait InsertionSink {
    /// Insert one vertex record under the given label.
    ///
    /// # Errors
    ///
    /// Implementations report duplicate ids and backend failures.
    fn insert_vertex(
        &mut self,
        graph: GraphOid,
        label: &LabelName,
        vertex: Vertex,
    ) -> Result<(), SinkError>;

    /// Insert one edge record under the given label.
    ///
    /// Both endpoints were inserted earlier in the same generation call or
    /// an earlier one; implementations may reject edges whose endpoints
    /// they have never seen.
    ///
    /// # Errors
    ///
    /// Implementations report duplicate ids, unknown endpoints, and backend
    /// failures.
    fn insert_edge(
        &mut self,
        graph: GraphOid,
        label: &LabelName,
        edge: Edge,
    ) -> Result<(), SinkError>;
}
