//! Fixed-capacity slot arena for Tessel tile maps.
//!
//! An [`Arena`] carves a fixed number of equally-sized slots out of a
//! caller-supplied [`BackingBuffer`]. There is no resizing and no free
//! list: capacity is decided once at [`Arena::allocate`] and the buffer is
//! handed back by [`Arena::release`].
//!
//! # Architecture
//!
//! ```text
//! BackingBuffer<T> (caller-owned Vec<T>)
//!        │ allocate(config)
//!        ▼
//! Arena<T> ── slot(i) / slots(start, len) ──▶ &T / &[T]
//!        │ release()
//!        ▼
//! BackingBuffer<T> (returned to caller)
//! ```
//!
//! Slots are addressed by index, never by pointer, so every borrow handed
//! out is checked against the arena's lifetime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod buffer;
pub mod config;
pub mod error;

pub use arena::Arena;
pub use buffer::BackingBuffer;
pub use config::ArenaConfig;
pub use error::ArenaError;
