//! The tile map store: arena ownership, addressing, bulk I/O and geometry.

use tessel_arena::{Arena, ArenaConfig, BackingBuffer};
use tessel_core::{ResourceRegistries, TileRecord};
use tessel_geometry::{
    MapGeometry, Orientation, ScreenPoint, ScreenSize, StaggerAxis, StaggerIndex, TileSize,
};

use crate::config::MapConfig;
use crate::descriptor::{check_resolvable, describe_record, CellLayers};
use crate::error::StoreError;
use crate::tile::TileView;

/// Arena-backed storage for a `size_x` × `size_y` grid of layered cells.
///
/// Every cell owns `layer_count` contiguous [`TileRecord`]s. Cells are laid
/// out x-major: cell `(x, y)` starts at record
/// `(x * size_y + y) * layer_count`.
///
/// Views returned by [`get_tile`](Self::get_tile) and
/// [`tiles`](Self::tiles) borrow the store mutably and write straight
/// into the arena. After [`free_memory`](Self::free_memory) every data
/// operation fails with [`StoreError::UseAfterFree`]; configuration and
/// geometry remain readable.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tessel_arena::BackingBuffer;
/// use tessel_core::{AnimationLibrary, NameRegistry, ResourceRegistries};
/// use tessel_store::{MapConfig, TileMapStore};
///
/// let models: NameRegistry = ["quad"].into_iter().collect();
/// let textures: NameRegistry = ["grass"].into_iter().collect();
/// let registries = ResourceRegistries::new(
///     Arc::new(models),
///     Arc::new(textures),
///     Arc::new(AnimationLibrary::new()),
/// );
///
/// let config = MapConfig::new("meadow", 10, 5, 2);
/// let mut store = TileMapStore::new(config, BackingBuffer::new(100), registries).unwrap();
///
/// let mut tile = store.get_tile(3, 4, false).unwrap();
/// let mut ground = tile.get_layer_tile(0).unwrap();
/// ground.set_model("quad").unwrap();
/// ground.set_texture("grass").unwrap();
/// assert_eq!(tile.layers().count(), 1);
///
/// let size = store.size_on_screen();
/// assert_eq!((size.width, size.height), (320, 160));
///
/// let buffer = store.free_memory().unwrap();
/// assert_eq!(buffer.capacity(), 100);
/// assert!(store.get_tile(3, 4, false).is_err());
/// ```
pub struct TileMapStore {
    config: MapConfig,
    arena: Option<Arena<TileRecord>>,
    registries: ResourceRegistries,
}

impl TileMapStore {
    /// Create a store whose arena is carved out of `buffer`.
    ///
    /// Fails with [`StoreError::InvalidConfig`] for a malformed config and
    /// [`StoreError::Allocation`] when `buffer` holds fewer than
    /// `size_x * size_y * layer_count` records.
    pub fn new(
        config: MapConfig,
        buffer: BackingBuffer<TileRecord>,
        registries: ResourceRegistries,
    ) -> Result<Self, StoreError> {
        config.validate()?;
        let slots = config.slot_count().ok_or_else(|| StoreError::InvalidConfig {
            reason: "record count overflows usize".to_string(),
        })?;
        let arena = Arena::allocate(ArenaConfig::for_slots::<TileRecord>(slots), buffer)?;
        tracing::debug!(
            name = %config.name,
            size_x = config.size_x,
            size_y = config.size_y,
            layer_count = config.layer_count,
            bytes = arena.memory_bytes(),
            "tile map allocated"
        );
        Ok(Self {
            config,
            arena: Some(arena),
            registries,
        })
    }

    /// Create a store with a freshly allocated buffer of exactly the
    /// required size.
    pub fn with_exact_buffer(
        config: MapConfig,
        registries: ResourceRegistries,
    ) -> Result<Self, StoreError> {
        config.validate()?;
        let slots = config.slot_count().unwrap_or_default();
        Self::new(config, BackingBuffer::new(slots), registries)
    }

    // ── Configuration ──────────────────────────────────────────

    /// The full configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Map name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Grid dimensions `(size_x, size_y)`.
    pub fn size(&self) -> (u32, u32) {
        (self.config.size_x, self.config.size_y)
    }

    /// Layers per cell.
    pub fn layer_count(&self) -> u32 {
        self.config.layer_count
    }

    /// The registries used for name translation.
    pub fn registries(&self) -> &ResourceRegistries {
        &self.registries
    }

    /// Projection settings.
    pub fn geometry(&self) -> &MapGeometry {
        &self.config.geometry
    }

    /// Tile size in pixels.
    pub fn tile_size(&self) -> TileSize {
        self.config.geometry.tile_size
    }

    /// Set the tile size.
    pub fn set_tile_size(&mut self, tile_size: TileSize) {
        self.config.geometry.tile_size = tile_size;
    }

    /// Projection mode.
    pub fn orientation(&self) -> Orientation {
        self.config.geometry.orientation
    }

    /// Set the projection mode. Parse untrusted spellings with
    /// [`str::parse`], which rejects unknown modes.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.geometry.orientation = orientation;
    }

    /// Flat hex side length in pixels.
    pub fn hex_side_length(&self) -> u32 {
        self.config.geometry.hex_side_length
    }

    /// Set the flat hex side length.
    pub fn set_hex_side_length(&mut self, length: u32) {
        self.config.geometry.hex_side_length = length;
    }

    /// Stagger axis.
    pub fn stagger_axis(&self) -> StaggerAxis {
        self.config.geometry.stagger_axis
    }

    /// Set the stagger axis.
    pub fn set_stagger_axis(&mut self, axis: StaggerAxis) {
        self.config.geometry.stagger_axis = axis;
    }

    /// Stagger index.
    pub fn stagger_index(&self) -> StaggerIndex {
        self.config.geometry.stagger_index
    }

    /// Set the stagger index.
    pub fn set_stagger_index(&mut self, index: StaggerIndex) {
        self.config.geometry.stagger_index = index;
    }

    // ── Geometry ───────────────────────────────────────────────

    /// Total pixel footprint of the map under its current projection.
    pub fn size_on_screen(&self) -> ScreenSize {
        self.config
            .geometry
            .size_on_screen(self.config.size_x, self.config.size_y)
    }

    /// Top-left pixel of cell `(x, y)`.
    pub fn tile_origin(&self, x: u32, y: u32) -> Result<ScreenPoint, StoreError> {
        check_coords(&self.config, x, y)?;
        Ok(self.config.geometry.tile_origin(self.config.size_y, x, y))
    }

    // ── Cell access ────────────────────────────────────────────

    /// Whether [`free_memory`](Self::free_memory) has been called.
    pub fn is_released(&self) -> bool {
        self.arena.is_none()
    }

    /// View of cell `(x, y)`.
    ///
    /// With `clear`, every layer of the cell is reset to empty before the
    /// view is returned. This is a destructive write.
    pub fn get_tile(&mut self, x: u32, y: u32, clear: bool) -> Result<TileView<'_>, StoreError> {
        let arena = self.arena.as_mut().ok_or(StoreError::UseAfterFree)?;
        let start = cell_start(&self.config, x, y)?;
        let records = arena.slots_mut(start, self.config.layer_count as usize)?;
        if clear {
            records.iter_mut().for_each(TileRecord::clear);
            tracing::trace!(x, y, "cell cleared");
        }
        Ok(TileView::new(records, &self.registries, x, y))
    }

    /// Raw records of cell `(x, y)`, read-only.
    pub fn records(&self, x: u32, y: u32) -> Result<&[TileRecord], StoreError> {
        let arena = self.arena.as_ref().ok_or(StoreError::UseAfterFree)?;
        let start = cell_start(&self.config, x, y)?;
        Ok(arena.slots(start, self.config.layer_count as usize)?)
    }

    /// Views of every cell: `size_x` rows of `size_y` views, x-major.
    pub fn tiles(&mut self) -> Result<Vec<Vec<TileView<'_>>>, StoreError> {
        let arena = self.arena.as_mut().ok_or(StoreError::UseAfterFree)?;
        let registries = &self.registries;
        let layers = self.config.layer_count as usize;
        let column = self.config.size_y as usize * layers;

        Ok(arena
            .as_mut_slice()
            .chunks_exact_mut(column)
            .zip(0u32..)
            .map(|(cells, x)| {
                cells
                    .chunks_exact_mut(layers)
                    .zip(0u32..)
                    .map(move |(records, y)| TileView::new(records, registries, x, y))
                    .collect()
            })
            .collect())
    }

    // ── Bulk load / dump ───────────────────────────────────────

    /// Replace the whole grid from per-cell layer descriptors.
    ///
    /// `tiles` must have exactly `size_x` rows of exactly `size_y` cells.
    /// Shape, layer indices and every name are checked before anything is
    /// written, so a failed load leaves the store unchanged. Each cell is
    /// then cleared and its descriptors applied in order.
    pub fn set_tiles(&mut self, tiles: &[Vec<CellLayers>]) -> Result<(), StoreError> {
        if self.is_released() {
            return Err(StoreError::UseAfterFree);
        }
        self.check_shape(tiles)?;

        let mut layers_written = 0usize;
        for desc in tiles.iter().flatten().flatten() {
            if desc.layer >= self.config.layer_count {
                return Err(StoreError::OutOfRange {
                    what: "layer",
                    value: desc.layer,
                    bound: self.config.layer_count,
                });
            }
            check_resolvable(&self.registries, desc)?;
            layers_written += 1;
        }

        for (x, row) in (0u32..).zip(tiles) {
            for (y, cell) in (0u32..).zip(row) {
                let mut tile = self.get_tile(x, y, true)?;
                for desc in cell {
                    tile.get_layer_tile(desc.layer)?.apply(desc)?;
                }
            }
        }
        tracing::debug!(name = %self.config.name, layers_written, "tile map loaded");
        Ok(())
    }

    /// Describe every cell by name; the inverse of
    /// [`set_tiles`](Self::set_tiles).
    ///
    /// Every layer with any field set is listed, including texture-only
    /// layers that [`TileView::layers`] treats as empty. An animated layer
    /// whose texture and model no longer match its animation's first frame
    /// is dumped [`verbatim`](crate::LayerDescriptor::verbatim), so loading
    /// the dump reproduces every record exactly.
    pub fn dump_tiles(&self) -> Result<Vec<Vec<CellLayers>>, StoreError> {
        let arena = self.arena.as_ref().ok_or(StoreError::UseAfterFree)?;
        let layers = self.config.layer_count as usize;
        let column = self.config.size_y as usize * layers;

        let dump = arena
            .as_slice()
            .chunks_exact(column)
            .map(|cells| {
                cells
                    .chunks_exact(layers)
                    .map(|cell| self.describe_cell(cell))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(name = %self.config.name, "tile map dumped");
        Ok(dump)
    }

    // ── Release ────────────────────────────────────────────────

    /// Release the arena and hand the backing buffer back.
    ///
    /// Succeeds exactly once; later calls return
    /// [`StoreError::UseAfterFree`].
    pub fn free_memory(&mut self) -> Result<BackingBuffer<TileRecord>, StoreError> {
        let arena = self.arena.take().ok_or(StoreError::UseAfterFree)?;
        tracing::debug!(name = %self.config.name, "tile map released");
        Ok(arena.release())
    }

    fn check_shape(&self, tiles: &[Vec<CellLayers>]) -> Result<(), StoreError> {
        let size_x = self.config.size_x as usize;
        let size_y = self.config.size_y as usize;
        if tiles.len() != size_x {
            return Err(StoreError::ShapeMismatch {
                axis: "size_x",
                row: None,
                expected: size_x,
                actual: tiles.len(),
            });
        }
        if let Some((row, cells)) = tiles.iter().enumerate().find(|(_, r)| r.len() != size_y) {
            return Err(StoreError::ShapeMismatch {
                axis: "size_y",
                row: Some(row),
                expected: size_y,
                actual: cells.len(),
            });
        }
        Ok(())
    }

    fn describe_cell(&self, cell: &[TileRecord]) -> Result<CellLayers, StoreError> {
        cell.iter()
            .zip(0u32..)
            .filter(|(rec, _)| **rec != TileRecord::EMPTY)
            .map(|(rec, layer)| describe_record(&self.registries, layer, rec))
            .collect()
    }
}

impl Drop for TileMapStore {
    fn drop(&mut self) {
        if let Some(arena) = self.arena.take() {
            tracing::debug!(name = %self.config.name, "tile map released on drop");
            let _ = arena.release();
        }
    }
}

impl std::fmt::Debug for TileMapStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileMapStore")
            .field("config", &self.config)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}

// ── Addressing ─────────────────────────────────────────────────────

/// Reject `(x, y)` if either axis is out of range.
fn check_coords(config: &MapConfig, x: u32, y: u32) -> Result<(), StoreError> {
    if x >= config.size_x {
        return Err(StoreError::OutOfRange {
            what: "x",
            value: x,
            bound: config.size_x,
        });
    }
    if y >= config.size_y {
        return Err(StoreError::OutOfRange {
            what: "y",
            value: y,
            bound: config.size_y,
        });
    }
    Ok(())
}

/// Flattened cell index, x-major: `x * size_y + y`.
fn flatten(config: &MapConfig, x: u32, y: u32) -> usize {
    x as usize * config.size_y as usize + y as usize
}

/// First record of cell `(x, y)`.
fn cell_start(config: &MapConfig, x: u32, y: u32) -> Result<usize, StoreError> {
    check_coords(config, x, y)?;
    Ok(flatten(config, x, y) * config.layer_count as usize)
}
