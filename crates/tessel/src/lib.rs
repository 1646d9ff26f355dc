//! Tessel: arena-backed tile map storage with projection geometry.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tessel::prelude::*;
//!
//! // Register the resources the map may reference.
//! let models: NameRegistry = ["quad"].into_iter().collect();
//! let textures: NameRegistry = ["grass", "water-0", "water-1"].into_iter().collect();
//! let mut animations = AnimationLibrary::new();
//! animations.insert(
//!     "water",
//!     Animation::new(vec![
//!         Frame::new("water-0", "quad", 250),
//!         Frame::new("water-1", "quad", 250),
//!     ]),
//! );
//! let registries =
//!     ResourceRegistries::new(Arc::new(models), Arc::new(textures), Arc::new(animations));
//!
//! // An 8×8 isometric map with two layers per cell.
//! let config = MapConfig::new("island", 8, 8, 2).with_geometry(MapGeometry {
//!     orientation: Orientation::Isometric,
//!     tile_size: TileSize::new(64, 32),
//!     ..MapGeometry::default()
//! });
//! let mut store = TileMapStore::with_exact_buffer(config, registries).unwrap();
//!
//! // Grass everywhere, water in one corner.
//! let mut grid = vec![vec![vec![LayerDescriptor::tile(0, "quad", "grass")]; 8]; 8];
//! grid[0][0].push(LayerDescriptor::animated(1, "water"));
//! store.set_tiles(&grid).unwrap();
//!
//! let mut corner = store.get_tile(0, 0, false).unwrap();
//! assert_eq!(corner.layers().count(), 2);
//! assert_eq!(corner.get_layer_tile(1).unwrap().texture(), Ok(Some("water-0")));
//!
//! assert_eq!(store.size_on_screen(), ScreenSize { width: 512, height: 256 });
//! let buffer = store.free_memory().unwrap();
//! assert_eq!(buffer.capacity(), 128);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Handles, `TileRecord`, animations, registries |
//! | [`arena`] | `tessel-arena` | Fixed-capacity slot arena and backing buffers |
//! | [`geometry`] | `tessel-geometry` | Projections, screen footprint, scroll clamping |
//! | [`store`] | `tessel-store` | `TileMapStore`, tile and layer views, bulk I/O |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core handles, records, and registries (`tessel-core`).
pub use tessel_core as types;

/// Slot arena and caller-owned backing buffers (`tessel-arena`).
///
/// Pass a [`arena::BackingBuffer`] to
/// [`store::TileMapStore::new`] to reuse memory across maps.
pub use tessel_arena as arena;

/// Projection geometry (`tessel-geometry`).
///
/// [`geometry::MapGeometry`] computes footprints and tile origins;
/// [`geometry::lock_scroll`] keeps a camera over the map.
pub use tessel_geometry as geometry;

/// Tile map storage (`tessel-store`).
pub use tessel_store as store;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Resources
    pub use tessel_core::{
        Animation, AnimationLibrary, Frame, NameRegistry, ResourceKind, ResourceRegistries,
        TileRecord,
    };

    // Arena
    pub use tessel_arena::BackingBuffer;

    // Geometry
    pub use tessel_geometry::{
        lock_scroll, MapGeometry, Orientation, ScreenPoint, ScreenSize, StaggerAxis,
        StaggerIndex, TileSize, Viewport,
    };

    // Store
    pub use tessel_store::{
        CellLayers, LayerDescriptor, LayerView, MapConfig, StoreError, TileMapStore, TileView,
    };
}
