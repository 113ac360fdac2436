//! Catalog and sequence seams.
//!
//! The catalog maps graph and label names to the identifiers the composite
//! id layout packs, and owns the per-label sequences that hand out local
//! ids. Generation code only talks to the [`Catalog`] trait; the in-memory
//! implementation in [`crate::backends`] is the reference used by tests.

mod error;

pub use error::{AllocationError, CatalogError};

use quiverdb_core::{GraphName, GraphOid, LabelId, LabelKind, LabelName, SequenceId};
use serde::{Deserialize, Serialize};

/// Name of the vertex label every graph is born with.
///
/// Vertices created without an explicit label land here.
pub const DEFAULT_VERTEX_LABEL: &str = "_default_vertex";

/// Name of the edge label every graph is born with.
pub const DEFAULT_EDGE_LABEL: &str = "_default_edge";

/// A resolved graph catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEntry {
    /// The graph's name.
    pub name: GraphName,
    /// The catalog-assigned graph identifier.
    pub oid: GraphOid,
}

/// A resolved label catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// The label's name.
    pub name: LabelName,
    /// The catalog-assigned label identifier.
    pub id: LabelId,
    /// The kind of records this label partitions.
    pub kind: LabelKind,
    /// Handle for the label's local-id sequence.
    pub sequence: SequenceId,
}

/// Name resolution, entry creation, and local-id allocation.
///
/// All methods take `&self`; implementations own whatever synchronization
/// they need. [`Catalog::next_local_id`] must never hand the same id to two
/// callers of the same sequence, even across threads.
pub trait Catalog: Send + Sync {
    /// Check whether a graph with the given name exists.
    fn graph_exists(&self, name: &GraphName) -> Result<bool, CatalogError>;

    /// Create a graph and seed its default labels.
    ///
    /// The new graph is born with [`DEFAULT_VERTEX_LABEL`] and
    /// [`DEFAULT_EDGE_LABEL`] already created.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::GraphAlreadyExists`] if the name is taken.
    fn create_graph(&self, name: &GraphName) -> Result<GraphEntry, CatalogError>;

    /// Resolve a graph by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::GraphNotFound`] if no graph has the name.
    fn resolve_graph(&self, name: &GraphName) -> Result<GraphEntry, CatalogError>;

    /// Check whether a label with the given name exists in a graph.
    fn label_exists(&self, graph: GraphOid, name: &LabelName) -> Result<bool, CatalogError>;

    /// Create a label of the given kind in a graph.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LabelAlreadyExists`] if the name is taken in
    /// the graph, or [`CatalogError::LabelLimitReached`] once the graph has
    /// no label ids left to assign.
    fn create_label(
        &self,
        graph: GraphOid,
        name: &LabelName,
        kind: LabelKind,
    ) -> Result<LabelEntry, CatalogError>;

    /// Resolve a label by name, checking it was created as `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LabelNotFound`] if the name is unknown, or
    /// [`CatalogError::LabelKindMismatch`] if the label exists under the
    /// other kind.
    fn resolve_label(
        &self,
        graph: GraphOid,
        name: &LabelName,
        kind: LabelKind,
    ) -> Result<LabelEntry, CatalogError>;

    /// Allocate the next unused local id from a sequence.
    ///
    /// Ids are monotonically increasing and never reused, even after the
    /// records they addressed are deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::UnknownSequence`] for a stale handle, or
    /// [`AllocationError::Exhausted`] once the sequence has handed out its
    /// last encodable id.
    fn next_local_id(&self, sequence: SequenceId) -> Result<u64, AllocationError>;
}
