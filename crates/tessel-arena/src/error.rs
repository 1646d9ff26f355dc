//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing buffer is too small for the requested allocation.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Capacity of the backing buffer in bytes.
        capacity: usize,
    },
    /// The configured slot size does not match the slot type.
    SlotSizeMismatch {
        /// `size_of` the arena's slot type.
        expected: usize,
        /// Slot size from the configuration.
        actual: usize,
    },
    /// A slot index past the end of the allocation.
    SlotOutOfRange {
        /// The offending index (first index past the end for ranges).
        index: usize,
        /// Number of allocated slots.
        slot_count: usize,
    },
    /// Structurally invalid configuration.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
            Self::SlotSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "slot size mismatch: slot type is {expected} bytes, config says {actual}"
                )
            }
            Self::SlotOutOfRange { index, slot_count } => {
                write!(f, "slot {index} out of range for {slot_count} slots")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
