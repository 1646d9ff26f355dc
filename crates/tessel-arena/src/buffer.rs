//! Caller-owned backing storage for an [`Arena`](crate::Arena).

/// A contiguous buffer of `T` slots supplied by the caller.
///
/// The buffer is moved into the arena on allocation and returned intact
/// on release, so the same memory can back a sequence of maps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackingBuffer<T> {
    slots: Vec<T>,
}

impl<T: Copy + Default> BackingBuffer<T> {
    /// Create a buffer with room for `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
        }
    }

    /// Create a buffer holding as many whole slots as fit in `bytes`.
    pub fn with_capacity_bytes(bytes: usize) -> Self {
        let slot_bytes = std::mem::size_of::<T>().max(1);
        Self::new(bytes / slot_bytes)
    }
}

impl<T> BackingBuffer<T> {
    /// Capacity in slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> From<Vec<T>> for BackingBuffer<T> {
    fn from(slots: Vec<T>) -> Self {
        Self { slots }
    }
}

impl<T> From<BackingBuffer<T>> for Vec<T> {
    fn from(buffer: BackingBuffer<T>) -> Self {
        buffer.slots
    }
}
