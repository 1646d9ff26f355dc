//! Benchmark profiles and utilities for the Tessel tile map engine.
//!
//! Provides pre-built map profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid, 4 layers (40K records)
//! - [`stress_profile`]: 316x316 grid, 4 layers (~400K records)
//! - [`terrain_grid`]: deterministic bulk-load payload for either profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_geometry::{MapGeometry, Orientation, TileSize};
use tessel_store::{CellLayers, LayerDescriptor, MapConfig, StoreError, TileMapStore};
use tessel_test_utils::fixture_registries;

/// Reference benchmark profile: 100x100 isometric grid with 4 layers.
pub fn reference_profile() -> MapConfig {
    MapConfig::new("reference", 100, 100, 4).with_geometry(MapGeometry {
        orientation: Orientation::Isometric,
        tile_size: TileSize::new(64, 32),
        ..MapGeometry::default()
    })
}

/// Stress benchmark profile: 316x316 grid (~100K cells) with 4 layers.
///
/// Same geometry as [`reference_profile`] at 10x the cell count.
pub fn stress_profile() -> MapConfig {
    MapConfig {
        name: "stress".to_string(),
        size_x: 316,
        size_y: 316,
        ..reference_profile()
    }
}

/// Build a store for `config` over the fixture registries.
pub fn build_store(config: MapConfig) -> Result<TileMapStore, StoreError> {
    TileMapStore::with_exact_buffer(config, fixture_registries())
}

/// Deterministic terrain: ground on layer 0 everywhere, a water animation
/// on layer 1 in every seventh cell, and a prop on layer 2 along the
/// diagonals.
pub fn terrain_grid(size_x: u32, size_y: u32) -> Vec<Vec<CellLayers>> {
    (0..size_x)
        .map(|x| {
            (0..size_y)
                .map(|y| {
                    let ground = if (x + y) % 2 == 0 { "grass" } else { "sand" };
                    let mut cell = vec![LayerDescriptor::tile(0, "quad", ground)];
                    if (x * 31 + y) % 7 == 0 {
                        cell.push(LayerDescriptor::animated(1, "water"));
                    }
                    if x == y || x + y + 1 == size_x {
                        cell.push(LayerDescriptor::tile(2, "cube", "stone"));
                    }
                    cell
                })
                .collect()
        })
        .collect()
}
