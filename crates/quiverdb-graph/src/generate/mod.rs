//! Synthetic topology generation.
//!
//! Generators materialize well-known graph shapes as vertex and edge
//! records inside one graph. Identity resolution happens once per call
//! through [`GenerationContext`]; records flow to an insertion sink in a
//! shape-defined order; the caller owns the enclosing transaction, so a
//! failed call propagates its error and leaves cleanup to that transaction.
//!
//! Generation is never idempotent on records: repeating a call reuses the
//! graph and labels but lays a fresh, disjoint copy of the shape.
//!
//! # Example
//!
//! ```
//! use quiverdb_graph::generate::{generate_cycle, GenerateRequest};
//! use quiverdb_storage::backends::memory::{MemoryCatalog, MemorySink};
//!
//! let catalog = MemoryCatalog::new();
//! let mut sink = MemorySink::new();
//! let request = GenerateRequest::new("social", "knows");
//! let first = generate_cycle(&catalog, &mut sink, &request, 5)?;
//!
//! assert_eq!(sink.vertex_count(), 5);
//! assert_eq!(sink.edge_count(), 5);
//! assert_eq!(first.local_id(), 1);
//! # Ok::<(), quiverdb_graph::generate::GenerateError>(())
//! ```

mod barbell;
mod complete;
mod context;
mod cycle;
mod error;

pub use context::GenerationContext;
pub use error::{GenerateError, GenerateResult};

use std::collections::HashMap;

use quiverdb_core::types::LOCAL_ID_MAX;
use quiverdb_core::{GraphId, GraphName, LabelName, Value};
use quiverdb_storage::catalog::Catalog;
use quiverdb_storage::sink::InsertionSink;
use tracing::debug;

use self::barbell::emit_barbell;
use self::complete::emit_complete;
use self::context::ShapeWriter;
use self::cycle::emit_cycle;

/// Arguments shared by every topology generator.
///
/// Names are resolved (and created when absent) at the start of a call;
/// payloads are cloned onto every created record.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Name of the graph to generate into.
    pub graph: GraphName,
    /// Label for created vertices; `None` selects the graph's default
    /// vertex label.
    pub vertex_label: Option<LabelName>,
    /// Label for created edges.
    pub edge_label: LabelName,
    /// Property payload for every created vertex.
    pub vertex_properties: HashMap<String, Value>,
    /// Property payload for every created edge.
    pub edge_properties: HashMap<String, Value>,
}

impl GenerateRequest {
    /// Create a request with empty payloads and the default vertex label.
    #[must_use]
    pub fn new(graph: impl Into<GraphName>, edge_label: impl Into<LabelName>) -> Self {
        Self {
            graph: graph.into(),
            vertex_label: None,
            edge_label: edge_label.into(),
            vertex_properties: HashMap::new(),
            edge_properties: HashMap::new(),
        }
    }

    /// Set an explicit vertex label.
    #[must_use]
    pub fn with_vertex_label(mut self, label: impl Into<LabelName>) -> Self {
        self.vertex_label = Some(label.into());
        self
    }

    /// Add a property to the vertex payload.
    #[must_use]
    pub fn with_vertex_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vertex_properties.insert(key.into(), value.into());
        self
    }

    /// Add a property to the edge payload.
    #[must_use]
    pub fn with_edge_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.edge_properties.insert(key.into(), value.into());
        self
    }
}

/// A generatable topology.
///
/// The set of shapes is closed: every variant validates its parameters and
/// dispatches through [`Topology::generate`], so adding a shape means
/// adding a variant and its emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every pair of distinct vertices is connected by exactly one edge.
    Complete {
        /// Number of vertices, at most [`LOCAL_ID_MAX`]; fewer than 2
        /// yield no edges.
        vertices: u64,
    },
    /// All vertices form one closed chain.
    Cycle {
        /// Number of vertices; at least 3, at most [`LOCAL_ID_MAX`].
        vertices: u64,
    },
    /// Two complete bells joined by a single bridge edge.
    Barbell {
        /// Number of vertices per bell; at least 3, at most half of
        /// [`LOCAL_ID_MAX`].
        bell_size: u64,
        /// Number of intermediate vertices on the bridge. Accepted for
        /// forward compatibility; only `0` is materialized and the bridge
        /// is always the single direct edge.
        bridge_size: u64,
    },
}

impl Topology {
    /// The shape's name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complete { .. } => "complete",
            Self::Cycle { .. } => "cycle",
            Self::Barbell { .. } => "barbell",
        }
    }

    /// Validate shape parameters.
    ///
    /// Counts are bounded below by each shape's minimum and above by the
    /// id space: one label partition can never address more than
    /// [`LOCAL_ID_MAX`] vertices, so a request for more is rejected here,
    /// before any catalog or sink effect. A warm sequence can still run
    /// out mid-call; that surfaces as an allocation error instead.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if a cycle has fewer
    /// than 3 vertices, a barbell bell has fewer than 3, or a count
    /// exceeds the id space.
    pub fn validate(&self) -> GenerateResult<()> {
        match *self {
            Self::Complete { vertices } | Self::Cycle { vertices }
                if vertices > LOCAL_ID_MAX =>
            {
                Err(GenerateError::InvalidArgument(format!(
                    "{} requires at most {LOCAL_ID_MAX} vertices, got {vertices}",
                    self.name()
                )))
            }
            Self::Complete { .. } => Ok(()),
            Self::Cycle { vertices } if vertices < 3 => Err(GenerateError::InvalidArgument(
                format!("cycle requires at least 3 vertices, got {vertices}"),
            )),
            Self::Cycle { .. } => Ok(()),
            Self::Barbell { bell_size, .. } if bell_size < 3 => {
                Err(GenerateError::InvalidArgument(format!(
                    "barbell bell requires at least 3 vertices, got {bell_size}"
                )))
            }
            Self::Barbell { bell_size, .. } if bell_size > LOCAL_ID_MAX / 2 => {
                Err(GenerateError::InvalidArgument(format!(
                    "barbell bell requires at most {} vertices, got {bell_size}",
                    LOCAL_ID_MAX / 2
                )))
            }
            Self::Barbell { .. } => Ok(()),
        }
    }

    /// Generate this topology into `sink`, resolving names through `catalog`.
    ///
    /// Parameters are validated and the context resolved before the first
    /// record is created, so an invalid request leaves catalog and sink
    /// untouched. Repeated calls with the same request reuse the existing
    /// graph and labels and lay a fresh, disjoint copy of the shape.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] for parameter and name
    /// rejections; catalog, allocation, and sink failures propagate, with
    /// any partially created records left to the caller's transaction.
    pub fn generate<C: Catalog, S: InsertionSink>(
        &self,
        catalog: &C,
        sink: &mut S,
        request: &GenerateRequest,
    ) -> GenerateResult<Generated> {
        self.validate()?;
        let ctx = GenerationContext::build(catalog, request)?;
        debug!(topology = self.name(), graph = %ctx.graph.name, "generating topology");

        let mut writer = ShapeWriter::new(&ctx, catalog, sink);
        let first_vertex = match *self {
            Self::Complete { vertices } => emit_complete(&mut writer, vertices)?.first().copied(),
            Self::Cycle { vertices } => Some(emit_cycle(&mut writer, vertices)?),
            Self::Barbell { bell_size, .. } => {
                // TODO: materialize bridge paths with intermediate vertices
                // for nonzero bridge sizes; the single direct edge is the
                // only bridge emitted today.
                Some(emit_barbell(&mut writer, bell_size)?)
            }
        };

        let generated = Generated {
            vertices: writer.vertices_created(),
            edges: writer.edges_created(),
            first_vertex,
        };
        debug!(
            topology = self.name(),
            vertices = generated.vertices,
            edges = generated.edges,
            "topology generated"
        );
        Ok(generated)
    }
}

/// Summary of one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    /// Number of vertices created.
    pub vertices: u64,
    /// Number of edges created.
    pub edges: u64,
    /// The first created vertex, when any vertex was created.
    ///
    /// For cycles this is the anchor vertex the closing edge returns to.
    pub first_vertex: Option<GraphId>,
}

/// Generate a complete graph over `vertices` fresh vertices.
///
/// Fewer than 2 vertices yield no edges.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] if `vertices` exceeds
/// [`LOCAL_ID_MAX`]; see [`Topology::generate`] for the rest.
pub fn generate_complete<C: Catalog, S: InsertionSink>(
    catalog: &C,
    sink: &mut S,
    request: &GenerateRequest,
    vertices: u64,
) -> GenerateResult<()> {
    Topology::Complete { vertices }.generate(catalog, sink, request)?;
    Ok(())
}

/// Generate a cycle over `vertices` fresh vertices and return its first
/// vertex.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] if `vertices < 3`; see
/// [`Topology::generate`] for the rest.
pub fn generate_cycle<C: Catalog, S: InsertionSink>(
    catalog: &C,
    sink: &mut S,
    request: &GenerateRequest,
    vertices: u64,
) -> GenerateResult<GraphId> {
    let generated = Topology::Cycle { vertices }.generate(catalog, sink, request)?;
    generated
        .first_vertex
        .ok_or_else(|| GenerateError::Internal("cycle generated no vertices".to_owned()))
}

/// Generate a barbell of two `bell_size` bells joined by a single bridge
/// edge.
///
/// `bridge_size` is accepted for forward compatibility; only `0` is
/// materialized.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] if `bell_size < 3`; see
/// [`Topology::generate`] for the rest.
pub fn generate_barbell<C: Catalog, S: InsertionSink>(
    catalog: &C,
    sink: &mut S,
    request: &GenerateRequest,
    bell_size: u64,
    bridge_size: u64,
) -> GenerateResult<()> {
    Topology::Barbell { bell_size, bridge_size }.generate(catalog, sink, request)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiverdb_storage::backends::memory::{MemoryCatalog, MemorySink};

    #[test]
    fn validate_accepts_and_rejects_the_documented_bounds() {
        assert!(Topology::Complete { vertices: 0 }.validate().is_ok());
        assert!(Topology::Cycle { vertices: 3 }.validate().is_ok());
        assert!(matches!(
            Topology::Cycle { vertices: 2 }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
        assert!(Topology::Barbell { bell_size: 3, bridge_size: 0 }.validate().is_ok());
        assert!(matches!(
            Topology::Barbell { bell_size: 2, bridge_size: 0 }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn validate_rejects_counts_beyond_the_id_space() {
        assert!(Topology::Complete { vertices: LOCAL_ID_MAX }.validate().is_ok());
        assert!(matches!(
            Topology::Complete { vertices: LOCAL_ID_MAX + 1 }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
        assert!(matches!(
            Topology::Complete { vertices: u64::MAX }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
        assert!(matches!(
            Topology::Cycle { vertices: u64::MAX }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
        assert!(Topology::Barbell { bell_size: LOCAL_ID_MAX / 2, bridge_size: 0 }
            .validate()
            .is_ok());
        assert!(matches!(
            Topology::Barbell { bell_size: LOCAL_ID_MAX / 2 + 1, bridge_size: 0 }.validate(),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn topology_names_are_stable() {
        assert_eq!(Topology::Complete { vertices: 1 }.name(), "complete");
        assert_eq!(Topology::Cycle { vertices: 3 }.name(), "cycle");
        assert_eq!(Topology::Barbell { bell_size: 3, bridge_size: 0 }.name(), "barbell");
    }

    #[test]
    fn request_builders_set_labels_and_payloads() {
        let request = GenerateRequest::new("g", "e")
            .with_vertex_label("v")
            .with_vertex_property("kind", "generated")
            .with_edge_property("weight", 1i64);
        assert_eq!(request.vertex_label, Some(LabelName::new("v")));
        assert_eq!(request.vertex_properties.len(), 1);
        assert_eq!(request.edge_properties.len(), 1);
    }

    #[test]
    fn generate_reports_counts_and_the_first_vertex() {
        let catalog = MemoryCatalog::new();
        let mut sink = MemorySink::new();
        let request = GenerateRequest::new("testgraph", "connects");
        let generated =
            Topology::Complete { vertices: 4 }.generate(&catalog, &mut sink, &request).unwrap();
        assert_eq!(generated.vertices, 4);
        assert_eq!(generated.edges, 6);
        assert_eq!(generated.first_vertex, sink.vertices().next().map(|v| v.id));
    }

    #[test]
    fn empty_complete_graph_creates_names_but_no_records() {
        let catalog = MemoryCatalog::new();
        let mut sink = MemorySink::new();
        let request = GenerateRequest::new("testgraph", "connects");
        let generated =
            Topology::Complete { vertices: 0 }.generate(&catalog, &mut sink, &request).unwrap();
        assert_eq!(generated.vertices, 0);
        assert_eq!(generated.edges, 0);
        assert_eq!(generated.first_vertex, None);
        assert_eq!(catalog.graph_count(), 1);
        assert!(sink.ops().is_empty());
    }
}
