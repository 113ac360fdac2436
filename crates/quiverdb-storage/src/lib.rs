//! `QuiverDB` Storage
//!
//! This crate provides the external-collaborator seams that topology
//! generation drives: the catalog (name resolution and local-id sequences)
//! and the insertion sink, together with in-memory reference backends.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog trait, resolved entries, and sequence allocation
//! - [`sink`] - Insertion sink trait
//! - [`backends`] - Reference backend implementations

pub mod backends;
pub mod catalog;
pub mod sink;

pub use catalog::{AllocationError, Catalog, CatalogError, GraphEntry, LabelEntry};
pub use sink::{InsertionSink, SinkError};
