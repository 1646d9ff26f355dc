//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an arena allocation.
///
/// Sizes are in bytes so that the configuration can be checked against
/// any backing buffer independent of its element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total bytes to carve out of the backing buffer.
    ///
    /// Must be a multiple of `slot_bytes`.
    pub total_bytes: usize,

    /// Size of one slot in bytes. Must be non-zero.
    pub slot_bytes: usize,
}

impl ArenaConfig {
    /// Create a config from raw byte sizes.
    pub fn new(total_bytes: usize, slot_bytes: usize) -> Self {
        Self {
            total_bytes,
            slot_bytes,
        }
    }

    /// Config for `slot_count` slots of type `T`.
    ///
    /// Saturates on overflow; the resulting config then fails capacity
    /// checks instead of wrapping.
    pub fn for_slots<T>(slot_count: usize) -> Self {
        let slot_bytes = std::mem::size_of::<T>();
        Self {
            total_bytes: slot_count.saturating_mul(slot_bytes),
            slot_bytes,
        }
    }

    /// Number of slots described by this config.
    ///
    /// Returns 0 when `slot_bytes` is zero.
    pub fn slot_count(&self) -> usize {
        self.total_bytes.checked_div(self.slot_bytes).unwrap_or(0)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.slot_bytes == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "slot_bytes must be non-zero".to_string(),
            });
        }
        if self.total_bytes % self.slot_bytes != 0 {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "total_bytes {} is not a multiple of slot_bytes {}",
                    self.total_bytes, self.slot_bytes
                ),
            });
        }
        Ok(())
    }
}
