//! Request-scoped generation context.
//!
//! [`GenerationContext::build`] resolves every name a generator needs into
//! catalog entries exactly once, creating missing graphs and labels on the
//! way. The context is immutable afterwards: generators only read it, and
//! only the catalog's sequences advance while a shape is emitted.

use std::collections::HashMap;

use quiverdb_core::{Edge, GraphId, LabelKind, LabelName, Value, Vertex};
use quiverdb_storage::catalog::{Catalog, GraphEntry, LabelEntry, DEFAULT_VERTEX_LABEL};
use quiverdb_storage::sink::InsertionSink;

use super::error::{GenerateError, GenerateResult};
use super::GenerateRequest;

/// Resolved identities and payloads for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// The graph records are created in.
    pub graph: GraphEntry,
    /// The label new vertices are created under.
    pub vertex_label: LabelEntry,
    /// The label new edges are created under.
    pub edge_label: LabelEntry,
    /// Property payload cloned onto every created vertex.
    pub vertex_properties: HashMap<String, Value>,
    /// Property payload cloned onto every created edge.
    pub edge_properties: HashMap<String, Value>,
}

impl GenerationContext {
    /// Resolve a request into a context, creating missing catalog entries.
    ///
    /// Arguments are validated before the catalog is touched: an empty
    /// graph name, an empty edge label, or a vertex label equal to the edge
    /// label (after the default is applied) is rejected with no side
    /// effects. Existing graphs and labels are reused, so building the same
    /// context twice creates nothing the second time.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] for the rejections above,
    /// or [`GenerateError::Catalog`] when resolution or creation fails.
    pub fn build<C: Catalog>(catalog: &C, request: &GenerateRequest) -> GenerateResult<Self> {
        if request.graph.is_empty() {
            return Err(GenerateError::InvalidArgument("graph name must not be empty".to_owned()));
        }
        if request.edge_label.is_empty() {
            return Err(GenerateError::InvalidArgument("edge label must not be empty".to_owned()));
        }
        let vertex_label_name = request
            .vertex_label
            .clone()
            .unwrap_or_else(|| LabelName::new(DEFAULT_VERTEX_LABEL));
        if vertex_label_name == request.edge_label {
            return Err(GenerateError::InvalidArgument(format!(
                "vertex label and edge label must differ: {vertex_label_name}"
            )));
        }

        let graph = if catalog.graph_exists(&request.graph)? {
            catalog.resolve_graph(&request.graph)?
        } else {
            catalog.create_graph(&request.graph)?
        };
        let vertex_label = ensure_label(catalog, &graph, &vertex_label_name, LabelKind::Vertex)?;
        let edge_label = ensure_label(catalog, &graph, &request.edge_label, LabelKind::Edge)?;

        Ok(Self {
            graph,
            vertex_label,
            edge_label,
            vertex_properties: request.vertex_properties.clone(),
            edge_properties: request.edge_properties.clone(),
        })
    }
}

/// Resolve a label of the given kind, creating it first when absent.
fn ensure_label<C: Catalog>(
    catalog: &C,
    graph: &GraphEntry,
    name: &LabelName,
    kind: LabelKind,
) -> GenerateResult<LabelEntry> {
    if catalog.label_exists(graph.oid, name)? {
        Ok(catalog.resolve_label(graph.oid, name, kind)?)
    } else {
        Ok(catalog.create_label(graph.oid, name, kind)?)
    }
}

/// Allocates ids and feeds records to the sink for one generation call.
///
/// Every created record goes through here, so id allocation and insertion
/// order follow a single code path regardless of shape.
pub(super) struct ShapeWriter<'a, C: Catalog, S: InsertionSink> {
    ctx: &'a GenerationContext,
    catalog: &'a C,
    sink: &'a mut S,
    vertices_created: u64,
    edges_created: u64,
}

impl<'a, C: Catalog, S: InsertionSink> ShapeWriter<'a, C, S> {
    pub(super) fn new(ctx: &'a GenerationContext, catalog: &'a C, sink: &'a mut S) -> Self {
        Self { ctx, catalog, sink, vertices_created: 0, edges_created: 0 }
    }

    /// Create one vertex under the context's vertex label.
    pub(super) fn create_vertex(&mut self) -> GenerateResult<GraphId> {
        let local = self.catalog.next_local_id(self.ctx.vertex_label.sequence)?;
        let id = GraphId::compose(self.ctx.vertex_label.id, local)?;
        let vertex = Vertex::with_properties(id, self.ctx.vertex_properties.clone());
        self.sink.insert_vertex(self.ctx.graph.oid, &self.ctx.vertex_label.name, vertex)?;
        self.vertices_created += 1;
        Ok(id)
    }

    /// Create one edge from `start` to `end` under the context's edge label.
    pub(super) fn connect(&mut self, start: GraphId, end: GraphId) -> GenerateResult<GraphId> {
        let local = self.catalog.next_local_id(self.ctx.edge_label.sequence)?;
        let id = GraphId::compose(self.ctx.edge_label.id, local)?;
        let edge = Edge::with_properties(id, start, end, self.ctx.edge_properties.clone());
        self.sink.insert_edge(self.ctx.graph.oid, &self.ctx.edge_label.name, edge)?;
        self.edges_created += 1;
        Ok(id)
    }

    /// Number of vertices created so far.
    pub(super) fn vertices_created(&self) -> u64 {
        self.vertices_created
    }

    /// Number of edges created so far.
    pub(super) fn edges_created(&self) -> u64 {
        self.edges_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiverdb_storage::backends::memory::MemoryCatalog;
    use quiverdb_storage::catalog::CatalogError;

    fn request() -> GenerateRequest {
        GenerateRequest::new("testgraph", "connects")
    }

    #[test]
    fn build_creates_graph_and_labels_once() {
        let catalog = MemoryCatalog::new();
        let first = GenerationContext::build(&catalog, &request()).unwrap();
        assert_eq!(catalog.graph_count(), 1);
        // Two default labels plus the requested edge label.
        assert_eq!(catalog.label_count(first.graph.oid), 3);

        let second = GenerationContext::build(&catalog, &request()).unwrap();
        assert_eq!(catalog.graph_count(), 1);
        assert_eq!(catalog.label_count(first.graph.oid), 3);
        assert_eq!(second.graph, first.graph);
        assert_eq!(second.vertex_label, first.vertex_label);
        assert_eq!(second.edge_label, first.edge_label);
    }

    #[test]
    fn omitted_vertex_label_resolves_to_the_default() {
        let catalog = MemoryCatalog::new();
        let ctx = GenerationContext::build(&catalog, &request()).unwrap();
        assert_eq!(ctx.vertex_label.name.as_str(), DEFAULT_VERTEX_LABEL);
        assert_eq!(ctx.vertex_label.kind, LabelKind::Vertex);
        assert_eq!(ctx.edge_label.kind, LabelKind::Edge);
    }

    #[test]
    fn empty_graph_name_is_rejected_before_any_creation() {
        let catalog = MemoryCatalog::new();
        let err = GenerationContext::build(&catalog, &GenerateRequest::new("", "connects"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert_eq!(catalog.graph_count(), 0);
    }

    #[test]
    fn empty_edge_label_is_rejected_before_any_creation() {
        let catalog = MemoryCatalog::new();
        let err =
            GenerationContext::build(&catalog, &GenerateRequest::new("testgraph", "")).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert_eq!(catalog.graph_count(), 0);
    }

    #[test]
    fn equal_labels_are_rejected_before_any_creation() {
        let catalog = MemoryCatalog::new();
        let req = GenerateRequest::new("testgraph", "same").with_vertex_label("same");
        let err = GenerationContext::build(&catalog, &req).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert_eq!(catalog.graph_count(), 0);
    }

    #[test]
    fn defaulted_vertex_label_can_still_collide_with_the_edge_label() {
        let catalog = MemoryCatalog::new();
        let req = GenerateRequest::new("testgraph", DEFAULT_VERTEX_LABEL);
        let err = GenerationContext::build(&catalog, &req).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidArgument(_)));
        assert_eq!(catalog.graph_count(), 0);
    }

    #[test]
    fn label_kind_mismatch_surfaces_as_a_catalog_error() {
        let catalog = MemoryCatalog::new();
        GenerationContext::build(&catalog, &request()).unwrap();

        // "connects" now exists as an edge label; requesting it as the
        // vertex label must fail.
        let req = GenerateRequest::new("testgraph", "links").with_vertex_label("connects");
        let err = GenerationContext::build(&catalog, &req).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Catalog(CatalogError::LabelKindMismatch { .. })
        ));
    }
}
