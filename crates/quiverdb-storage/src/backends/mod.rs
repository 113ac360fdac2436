//! Reference backend implementations.
//!
//! This module contains concrete implementations of the catalog and sink
//! traits.
//!
//! # Available Backends
//!
//! - [`memory`] - In-memory catalog and sink for tests and embedding

pub mod memory;

pub use memory::{MemoryCatalog, MemorySink, SinkOp};
