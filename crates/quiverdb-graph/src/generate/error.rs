//! Error types for topology generation.

use quiverdb_core::CoreError;
use quiverdb_storage::{AllocationError, CatalogError, SinkError};
use thiserror::Error;

/// Errors that can occur while generating a topology.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A request argument failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A composite id could not be composed.
    #[error("encoding error: {0}")]
    Encoding(#[from] CoreError),

    /// A catalog resolution or creation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A local id could not be allocated.
    #[error("allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// A record could not be persisted.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// An internal invariant was broken.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
