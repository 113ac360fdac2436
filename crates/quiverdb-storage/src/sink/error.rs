//! Error types for insertion sinks.

use quiverdb_core::GraphId;
use thiserror::Error;

/// Errors that can occur while persisting generated records.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A vertex with the given id has already been inserted.
    #[error("vertex already exists: {0}")]
    VertexAlreadyExists(GraphId),

    /// An edge with the given id has already been inserted.
    #[error("edge already exists: {0}")]
    EdgeAlreadyExists(GraphId),

    /// An edge referenced a vertex that was never inserted.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(GraphId),

    /// A backend failure occurred.
    #[error("backend error: {0}")]
    Backend(String),
}
