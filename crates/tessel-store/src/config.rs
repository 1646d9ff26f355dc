//! Map configuration and validation.

use tessel_geometry::MapGeometry;

use crate::error::StoreError;

/// Everything needed to lay out a tile map's arena and project it.
///
/// Passed to [`TileMapStore::new`](crate::TileMapStore::new).
/// [`validate()`](MapConfig::validate) checks structural invariants;
/// the store calls it before allocating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    /// Human-readable map name.
    pub name: String,
    /// Number of cells along x.
    pub size_x: u32,
    /// Number of cells along y.
    pub size_y: u32,
    /// Layers per cell.
    pub layer_count: u32,
    /// Projection settings.
    pub geometry: MapGeometry,
}

impl MapConfig {
    /// A map with default (orthogonal, 32×32) geometry.
    pub fn new(name: impl Into<String>, size_x: u32, size_y: u32, layer_count: u32) -> Self {
        Self {
            name: name.into(),
            size_x,
            size_y,
            layer_count,
            geometry: MapGeometry::default(),
        }
    }

    /// Replace the projection settings.
    pub fn with_geometry(mut self, geometry: MapGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Number of cells, `size_x * size_y`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.size_x as usize).checked_mul(self.size_y as usize)
    }

    /// Number of records the arena must hold,
    /// `size_x * size_y * layer_count`. `None` on overflow.
    pub fn slot_count(&self) -> Option<usize> {
        self.cell_count()?.checked_mul(self.layer_count as usize)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.size_x == 0 || self.size_y == 0 {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "grid must have at least one cell, got {}x{}",
                    self.size_x, self.size_y
                ),
            });
        }
        if self.layer_count == 0 {
            return Err(StoreError::InvalidConfig {
                reason: "layer_count must be at least 1".to_string(),
            });
        }
        let slots = self.slot_count().ok_or_else(|| StoreError::InvalidConfig {
            reason: format!(
                "{}x{}x{} records overflow usize",
                self.size_x, self.size_y, self.layer_count
            ),
        })?;
        if slots
            .checked_mul(std::mem::size_of::<tessel_core::TileRecord>())
            .is_none()
        {
            return Err(StoreError::InvalidConfig {
                reason: format!("{slots} records overflow the addressable byte range"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_count_multiplies_all_dimensions() {
        let config = MapConfig::new("m", 10, 5, 3);
        assert_eq!(config.cell_count(), Some(50));
        assert_eq!(config.slot_count(), Some(150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        for (x, y, l) in [(0, 5, 1), (5, 0, 1), (5, 5, 0)] {
            let config = MapConfig::new("m", x, y, l);
            assert!(
                matches!(config.validate(), Err(StoreError::InvalidConfig { .. })),
                "{x}x{y}x{l} should be rejected"
            );
        }
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn overflowing_slot_count_rejected() {
        let config = MapConfig::new("m", u32::MAX, u32::MAX, 2);
        assert!(config.slot_count().is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn overflowing_byte_size_rejected() {
        let config = MapConfig::new("m", u32::MAX, u32::MAX, u32::MAX);
        assert!(matches!(
            config.validate(),
            Err(StoreError::InvalidConfig { .. })
        ));
    }
}
