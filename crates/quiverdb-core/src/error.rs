//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A label id does not fit the 16-bit field of a composite id.
    #[error("label id out of range: {0}")]
    LabelIdOutOfRange(u32),

    /// A local id does not fit the 48-bit field of a composite id.
    #[error("local id out of range: {0}")]
    LocalIdOutOfRange(u64),
}
