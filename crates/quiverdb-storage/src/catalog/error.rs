//! Error types for catalog and sequence operations.

use quiverdb_core::{GraphName, GraphOid, LabelKind, LabelName, SequenceId};
use thiserror::Error;

/// Errors that can occur while resolving or creating catalog entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A graph was not found by name.
    #[error("graph not found: {0}")]
    GraphNotFound(GraphName),

    /// A graph with the given name already exists.
    #[error("graph already exists: {0}")]
    GraphAlreadyExists(GraphName),

    /// A graph oid does not refer to a known graph.
    #[error("unknown graph: {0}")]
    UnknownGraph(GraphOid),

    /// A label was not found in the given graph.
    #[error("label not found in graph {graph}: {name}")]
    LabelNotFound {
        /// The graph that was searched.
        graph: GraphOid,
        /// The label name that was not found.
        name: LabelName,
    },

    /// A label with the given name already exists in the graph.
    #[error("label already exists in graph {graph}: {name}")]
    LabelAlreadyExists {
        /// The graph holding the existing label.
        graph: GraphOid,
        /// The duplicated label name.
        name: LabelName,
    },

    /// A label exists but was created as the other kind.
    #[error("label {name} is a {actual} label, not a {expected} label")]
    LabelKindMismatch {
        /// The label name that was resolved.
        name: LabelName,
        /// The kind the caller asked for.
        expected: LabelKind,
        /// The kind the label was created as.
        actual: LabelKind,
    },

    /// The graph has no label ids left to assign.
    #[error("label id space exhausted for graph {0}")]
    LabelLimitReached(GraphOid),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors that can occur while allocating local ids.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The handle does not refer to a known sequence.
    #[error("unknown sequence: {0}")]
    UnknownSequence(SequenceId),

    /// The sequence has handed out its last encodable id.
    #[error("sequence exhausted: {0}")]
    Exhausted(SequenceId),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
