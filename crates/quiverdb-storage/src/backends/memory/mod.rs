//! In-memory catalog and sink backends.
//!
//! Both backends keep everything in process memory and are the reference
//! implementations the integration tests drive generation against. They are
//! also usable from embedding code that does not need durability.

mod catalog;
mod sink;

pub use catalog::MemoryCatalog;
pub use sink::{MemorySink, SinkOp};
