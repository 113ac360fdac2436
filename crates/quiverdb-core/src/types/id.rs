//! Catalog-assigned identifiers for graphs, labels, and sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a graph in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphOid(u32);

impl GraphOid {
    /// Create a new `GraphOid` from a raw u32 value.
    #[must_use]
    pub const fn new(oid: u32) -> Self {
        Self(oid)
    }

    /// Get the raw u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for GraphOid {
    fn from(oid: u32) -> Self {
        Self::new(oid)
    }
}

impl fmt::Display for GraphOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a label within a graph.
///
/// Label ids are assigned by the catalog starting from 1 (0 is reserved for
/// "no label"). Only ids up to [`LABEL_ID_MAX`] fit the composite id layout.
///
/// [`LABEL_ID_MAX`]: super::LABEL_ID_MAX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelId(u32);

impl LabelId {
    /// Create a new `LabelId` from a raw u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for LabelId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for a label's local-id sequence.
///
/// Every label owns one sequence; the catalog hands out the handle when the
/// label is created and resolves allocation requests against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(u32);

impl SequenceId {
    /// Create a new `SequenceId` from a raw u32 value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for SequenceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
