//! Core data types for `QuiverDB`.
//!
//! This module defines the fundamental types that represent vertices, edges,
//! and their identifiers in the label-partitioned data model.

mod edge;
mod graph_id;
mod id;
mod label;
mod value;
mod vertex;


pub use edge::Edge;
pub use graph_id::{GraphId, LABEL_ID_MAX, LABEL_ID_MIN, LOCAL_ID_MAX, LOCAL_ID_MIN};
pub use id::{GraphOid, LabelId, SequenceId};
pub use label::{GraphName, LabelKind, LabelName};
pub use value::Value;
pub use vertex::Vertex;
