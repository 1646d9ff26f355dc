//! Test utilities and fixtures for Tessel development.
//!
//! Provides a fixed set of fake resource registries (see [`fixtures`])
//! and a [`TestMapBuilder`] for constructing stores in test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tessel_core::ResourceRegistries;
use tessel_geometry::{MapGeometry, Orientation, TileSize};
use tessel_store::{CellLayers, LayerDescriptor, MapConfig, StoreError, TileMapStore};

pub use fixtures::{empty_registries, fixture_registries};

/// Builder for test stores with preconfigured dimensions and geometry.
///
/// Defaults to a 4×3 map with 2 layers, orthogonal 32×32 tiles and the
/// [`fixture_registries`].
pub struct TestMapBuilder {
    name: String,
    size_x: u32,
    size_y: u32,
    layer_count: u32,
    geometry: MapGeometry,
    registries: Option<ResourceRegistries>,
}

impl TestMapBuilder {
    pub fn new() -> Self {
        Self {
            name: "test-map".to_string(),
            size_x: 4,
            size_y: 3,
            layer_count: 2,
            geometry: MapGeometry::default(),
            registries: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn size(mut self, size_x: u32, size_y: u32) -> Self {
        self.size_x = size_x;
        self.size_y = size_y;
        self
    }

    pub fn layers(mut self, layer_count: u32) -> Self {
        self.layer_count = layer_count;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.geometry.orientation = orientation;
        self
    }

    pub fn tile_size(mut self, width: u32, height: u32) -> Self {
        self.geometry.tile_size = TileSize::new(width, height);
        self
    }

    pub fn registries(mut self, registries: ResourceRegistries) -> Self {
        self.registries = Some(registries);
        self
    }

    pub fn config(&self) -> MapConfig {
        MapConfig::new(
            self.name.clone(),
            self.size_x,
            self.size_y,
            self.layer_count,
        )
        .with_geometry(self.geometry)
    }

    /// Build a store over an exactly sized buffer.
    pub fn build(self) -> Result<TileMapStore, StoreError> {
        let config = self.config();
        let registries = self.registries.unwrap_or_else(fixture_registries);
        TileMapStore::with_exact_buffer(config, registries)
    }
}

impl Default for TestMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A `size_x` × `size_y` grid of empty cells.
pub fn empty_grid(size_x: u32, size_y: u32) -> Vec<Vec<CellLayers>> {
    vec![vec![Vec::new(); size_y as usize]; size_x as usize]
}

/// A grid where every cell has `grass` on a `quad` at layer 0, and the
/// cell at `(x, y)` with `x == y` also carries the `water` animation on
/// layer 1.
pub fn checker_grid(size_x: u32, size_y: u32) -> Vec<Vec<CellLayers>> {
    (0..size_x)
        .map(|x| {
            (0..size_y)
                .map(|y| {
                    let mut cell = vec![LayerDescriptor::tile(0, "quad", "grass")];
                    if x == y {
                        cell.push(LayerDescriptor::animated(1, "water"));
                    }
                    cell
                })
                .collect()
        })
        .collect()
}
