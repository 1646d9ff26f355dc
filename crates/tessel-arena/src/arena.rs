//! The fixed-capacity slot arena.

use crate::buffer::BackingBuffer;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A fixed number of `T` slots carved from a [`BackingBuffer`].
///
/// Allocated slots are zero-initialised (`T::default()`) and stay
/// contiguous for the arena's lifetime. Slots past `slot_count` in the
/// buffer are untouched and unreachable until release.
///
/// # Examples
///
/// ```
/// use tessel_arena::{Arena, ArenaConfig, BackingBuffer};
///
/// let buffer = BackingBuffer::<u32>::new(16);
/// let mut arena = Arena::allocate(ArenaConfig::for_slots::<u32>(4), buffer).unwrap();
/// *arena.slot_mut(3).unwrap() = 7;
/// assert_eq!(arena.slots(2, 2).unwrap(), &[0, 7]);
///
/// let buffer = arena.release();
/// assert_eq!(buffer.capacity(), 16);
/// ```
#[derive(Debug)]
pub struct Arena<T> {
    buffer: BackingBuffer<T>,
    slot_count: usize,
}

impl<T: Copy + Default> Arena<T> {
    /// Allocate `config.slot_count()` slots from `buffer`.
    ///
    /// Fails if the config is malformed, if its slot size disagrees with
    /// `size_of::<T>()`, or if the buffer is smaller than
    /// `config.total_bytes`. On failure the buffer is dropped.
    pub fn allocate(config: ArenaConfig, mut buffer: BackingBuffer<T>) -> Result<Self, ArenaError> {
        config.validate()?;
        let expected = std::mem::size_of::<T>();
        if config.slot_bytes != expected {
            return Err(ArenaError::SlotSizeMismatch {
                expected,
                actual: config.slot_bytes,
            });
        }
        if config.total_bytes > buffer.capacity_bytes() {
            return Err(ArenaError::CapacityExceeded {
                requested: config.total_bytes,
                capacity: buffer.capacity_bytes(),
            });
        }
        let slot_count = config.slot_count();
        buffer.as_mut_slice()[..slot_count].fill(T::default());
        tracing::trace!(slot_count, slot_bytes = expected, "arena allocated");
        Ok(Self { buffer, slot_count })
    }
}

impl<T> Arena<T> {
    /// Number of allocated slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Bytes in use by the allocation.
    pub fn memory_bytes(&self) -> usize {
        self.slot_count * std::mem::size_of::<T>()
    }

    /// Shared reference to slot `index`.
    pub fn slot(&self, index: usize) -> Result<&T, ArenaError> {
        self.as_slice().get(index).ok_or(ArenaError::SlotOutOfRange {
            index,
            slot_count: self.slot_count,
        })
    }

    /// Mutable reference to slot `index`.
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut T, ArenaError> {
        let slot_count = self.slot_count;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArenaError::SlotOutOfRange { index, slot_count })
    }

    /// `len` contiguous slots starting at `start`.
    pub fn slots(&self, start: usize, len: usize) -> Result<&[T], ArenaError> {
        let end = self.checked_end(start, len)?;
        Ok(&self.as_slice()[start..end])
    }

    /// `len` contiguous mutable slots starting at `start`.
    pub fn slots_mut(&mut self, start: usize, len: usize) -> Result<&mut [T], ArenaError> {
        let end = self.checked_end(start, len)?;
        Ok(&mut self.as_mut_slice()[start..end])
    }

    /// Every allocated slot.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.slot_count]
    }

    /// Every allocated slot, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let n = self.slot_count;
        &mut self.buffer.as_mut_slice()[..n]
    }

    /// Give the backing buffer back to the caller.
    ///
    /// Consumes the arena, so no slot borrow can outlive the release.
    pub fn release(self) -> BackingBuffer<T> {
        tracing::trace!(slot_count = self.slot_count, "arena released");
        self.buffer
    }

    fn checked_end(&self, start: usize, len: usize) -> Result<usize, ArenaError> {
        match start.checked_add(len) {
            Some(end) if end <= self.slot_count => Ok(end),
            _ => Err(ArenaError::SlotOutOfRange {
                index: start.saturating_add(len),
                slot_count: self.slot_count,
            }),
        }
    }
}
