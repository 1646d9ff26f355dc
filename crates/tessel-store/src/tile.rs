//! Accessor over the full layer stack of one cell.

use smallvec::SmallVec;
use tessel_core::{ResourceRegistries, TileRecord};

use crate::error::StoreError;
use crate::layer::LayerView;

/// Inline capacity for [`TileView::layers`]; most maps use few layers.
const INLINE_LAYERS: usize = 4;

/// A bound view of the `layer_count` contiguous records of one cell.
///
/// Obtained from [`TileMapStore::get_tile`](crate::TileMapStore::get_tile)
/// or [`TileMapStore::tiles`](crate::TileMapStore::tiles). It borrows the
/// store mutably, so it cannot outlive the store or survive a release.
#[derive(Debug)]
pub struct TileView<'a> {
    records: &'a mut [TileRecord],
    registries: &'a ResourceRegistries,
    x: u32,
    y: u32,
}

impl<'a> TileView<'a> {
    pub(crate) fn new(
        records: &'a mut [TileRecord],
        registries: &'a ResourceRegistries,
        x: u32,
        y: u32,
    ) -> Self {
        Self {
            records,
            registries,
            x,
            y,
        }
    }

    /// Cell x coordinate.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Cell y coordinate.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Number of layers in the cell.
    pub fn layer_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Raw records of every layer, in layer order.
    pub fn records(&self) -> &[TileRecord] {
        self.records
    }

    /// View of layer `layer`.
    pub fn get_layer_tile(&mut self, layer: u32) -> Result<LayerView<'_>, StoreError> {
        let bound = self.layer_count();
        let record = self
            .records
            .get_mut(layer as usize)
            .ok_or(StoreError::OutOfRange {
                what: "layer",
                value: layer,
                bound,
            })?;
        Ok(LayerView::new(record, self.registries, layer))
    }

    /// The non-empty layers, in increasing layer order.
    ///
    /// Emptiness is evaluated once, when this is called; the returned
    /// iterator is a single-pass snapshot. Call again for a fresh one.
    pub fn layers(&mut self) -> smallvec::IntoIter<[LayerView<'_>; INLINE_LAYERS]> {
        let registries = self.registries;
        let views: SmallVec<[LayerView<'_>; INLINE_LAYERS]> = self
            .records
            .iter_mut()
            .enumerate()
            .filter(|(_, rec)| !rec.is_empty())
            .map(|(i, rec)| LayerView::new(rec, registries, i as u32))
            .collect();
        views.into_iter()
    }

    /// Reset every layer to the empty state.
    pub fn clear(&mut self) {
        self.records.iter_mut().for_each(TileRecord::clear);
    }
}
