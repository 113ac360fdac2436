//! Composite identifiers for vertices and edges.
//!
//! A [`GraphId`] packs a label identity and a per-label counter value into a
//! single 64-bit value: the upper 16 bits hold the label id, the lower 48
//! bits hold the local id. Composition and decomposition live here and
//! nowhere else; no other module shifts or masks the packed value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::LabelId;

/// Number of bits reserved for the local id field.
const LOCAL_ID_BITS: u32 = 48;

/// Smallest label id that can be packed into a [`GraphId`].
pub const LABEL_ID_MIN: u32 = 1;

/// Largest label id that can be packed into a [`GraphId`].
pub const LABEL_ID_MAX: u32 = 0xFFFF;

/// Smallest local id that can be packed into a [`GraphId`].
pub const LOCAL_ID_MIN: u64 = 1;

/// Largest local id that can be packed into a [`GraphId`].
pub const LOCAL_ID_MAX: u64 = (1u64 << LOCAL_ID_BITS) - 1;

/// Composite identifier for a vertex or edge.
///
/// Ids are unique across a whole graph: records under different labels can
/// never collide because the label id is part of the packed value. Zero is
/// not a valid value for either field, so the all-zero id never occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(u64);

impl GraphId {
    /// Pack a label id and a local id into a composite id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::LabelIdOutOfRange`] if `label` falls outside
    /// `LABEL_ID_MIN..=LABEL_ID_MAX`, or [`CoreError::LocalIdOutOfRange`] if
    /// `local` falls outside `LOCAL_ID_MIN..=LOCAL_ID_MAX`.
    pub const fn compose(label: LabelId, local: u64) -> Result<Self, CoreError> {
        let raw_label = label.as_u32();
        if raw_label < LABEL_ID_MIN || raw_label > LABEL_ID_MAX {
            return Err(CoreError::LabelIdOutOfRange(raw_label));
        }
        if local < LOCAL_ID_MIN || local > LOCAL_ID_MAX {
            return Err(CoreError::LocalIdOutOfRange(local));
        }
        Ok(Self(((raw_label as u64) << LOCAL_ID_BITS) | local))
    }

    /// Split the composite id back into its label and local components.
    ///
    /// Exact inverse of [`GraphId::compose`] for every pair it accepts.
    #[must_use]
    pub const fn decompose(self) -> (LabelId, u64) {
        (self.label_id(), self.local_id())
    }

    /// Get the label id component.
    #[must_use]
    pub const fn label_id(self) -> LabelId {
        LabelId::new((self.0 >> LOCAL_ID_BITS) as u32)
    }

    /// Get the local id component.
    #[must_use]
    pub const fn local_id(self) -> u64 {
        self.0 & LOCAL_ID_MAX
    }

    /// Get the packed u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
