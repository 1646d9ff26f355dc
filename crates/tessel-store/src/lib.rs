//! Arena-backed tile map storage for Tessel.
//!
//! A [`TileMapStore`] owns one contiguous run of
//! [`TileRecord`](tessel_core::TileRecord)s: `size_x * size_y` cells,
//! each holding `layer_count` layers. Callers never see raw offsets.
//! Instead they get borrow-checked views:
//!
//! - [`TileView`] over the layer stack of one cell, and
//! - [`LayerView`] over a single layer, translating between resource
//!   names and the compact handles stored in the arena.
//!
//! Whole maps move in and out by name through
//! [`TileMapStore::set_tiles`] and [`TileMapStore::dump_tiles`], using
//! [`LayerDescriptor`]s.
//!
//! Views borrow the store mutably, so a view can never outlive its store,
//! alias another mutable view, or survive
//! [`TileMapStore::free_memory`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod layer;
pub mod store;
pub mod tile;

pub use config::MapConfig;
pub use descriptor::{CellLayers, LayerDescriptor};
pub use error::StoreError;
pub use layer::LayerView;
pub use store::TileMapStore;
pub use tile::TileView;
