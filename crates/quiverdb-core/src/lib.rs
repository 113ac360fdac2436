//! `QuiverDB` Core
//!
//! This crate provides the fundamental types of the `QuiverDB` graph model:
//! composite identifiers, label-partitioned vertex and edge records, and
//! property values.
//!
//! # Modules
//!
//! - [`types`] - Core data types (GraphId, Vertex, Edge, Value, names)
//! - [`error`] - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{
    Edge, GraphId, GraphName, GraphOid, LabelId, LabelKind, LabelName, SequenceId, Value, Vertex,
};
