//! In-memory insertion sink.

use std::collections::HashSet;

use quiverdb_core::{Edge, GraphId, GraphOid, LabelName, Vertex};

use crate::sink::{InsertionSink, SinkError};

/// One recorded insertion.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkOp {
    /// A vertex insertion.
    Vertex {
        /// The graph the vertex was inserted into.
        graph: GraphOid,
        /// The label the vertex was inserted under.
        label: LabelName,
        /// The inserted record.
        vertex: Vertex,
    },
    /// An edge insertion.
    Edge {
        /// The graph the edge was inserted into.
        graph: GraphOid,
        /// The label the edge was inserted under.
        label: LabelName,
        /// The inserted record.
        edge: Edge,
    },
}

/// In-memory [`InsertionSink`] that records every insertion in order.
///
/// Duplicate ids and edges with never-inserted endpoints are rejected, so
/// tests catch id reuse and dangling references at the insertion point.
#[derive(Debug, Default)]
pub struct MemorySink {
    ops: Vec<SinkOp>,
    vertex_ids: HashSet<GraphId>,
    edge_ids: HashSet<GraphId>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in insertion order.
    #[must_use]
    pub fn ops(&self) -> &[SinkOp] {
        &self.ops
    }

    /// All inserted vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.ops.iter().filter_map(|op| match op {
            SinkOp::Vertex { vertex, .. } => Some(vertex),
            SinkOp::Edge { .. } => None,
        })
    }

    /// All inserted edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.ops.iter().filter_map(|op| match op {
            SinkOp::Edge { edge, .. } => Some(edge),
            SinkOp::Vertex { .. } => None,
        })
    }

    /// Number of inserted vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Number of inserted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_ids.len()
    }
}

impl InsertionSink for MemorySink {
    fn insert_vertex(
        &mut self,
        graph: GraphOid,
        label: &LabelName,
        vertex: Vertex,
    ) -> Result<(), SinkError> {
        if !self.vertex_ids.insert(vertex.id) {
            return Err(SinkError::VertexAlreadyExists(vertex.id));
        }
        self.ops.push(SinkOp::Vertex { graph, label: label.clone(), vertex });
        Ok(())
    }

    fn insert_edge(
        &mut self,
        graph: GraphOid,
        label: &LabelName,
        edge: Edge,
    ) -> Result<(), SinkError> {
        if self.edge_ids.contains(&edge.id) {
            return Err(SinkError::EdgeAlreadyExists(edge.id));
        }
        if !self.vertex_ids.contains(&edge.start) {
            return Err(SinkError::UnknownEndpoint(edge.start));
        }
        if !self.vertex_ids.contains(&edge.end) {
            return Err(SinkError::UnknownEndpoint(edge.end));
        }
        self.edge_ids.insert(edge.id);
        self.ops.push(SinkOp::Edge { graph, label: label.clone(), edge });
        Ok(())
    }
}
