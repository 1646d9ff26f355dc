//! Pixel footprint and tile placement for each projection.

use crate::orientation::{Orientation, StaggerAxis, StaggerIndex};

/// Width and height of one tile in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TileSize {
    /// Create a tile size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(32, 32)
    }
}

/// Total pixel footprint of a map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u64,
    /// Height in pixels.
    pub height: u64,
}

/// Top-left pixel of a tile's bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Horizontal pixel offset.
    pub x: u64,
    /// Vertical pixel offset.
    pub y: u64,
}

/// Projection settings for a map.
///
/// All computations are pure functions of these settings plus the grid
/// dimensions. Division is integer division, rounding down.
///
/// # Examples
///
/// ```
/// use tessel_geometry::{MapGeometry, Orientation, ScreenSize, TileSize};
///
/// let geometry = MapGeometry {
///     orientation: Orientation::Isometric,
///     tile_size: TileSize::new(64, 32),
///     ..MapGeometry::default()
/// };
/// assert_eq!(
///     geometry.size_on_screen(4, 7),
///     ScreenSize { width: 448, height: 224 }
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapGeometry {
    /// Projection mode.
    pub orientation: Orientation,
    /// Size of one tile in pixels.
    pub tile_size: TileSize,
    /// Length of the flat hex side in pixels. Only read for
    /// [`Orientation::Hexagonal`].
    pub hex_side_length: u32,
    /// Offset axis for staggered and hexagonal maps.
    pub stagger_axis: StaggerAxis,
    /// Offset parity for staggered and hexagonal maps.
    pub stagger_index: StaggerIndex,
}

impl MapGeometry {
    /// Hex side length as it enters the stagger formulas: zero unless
    /// the map is hexagonal.
    fn side(&self) -> u64 {
        match self.orientation {
            Orientation::Hexagonal => u64::from(self.hex_side_length),
            _ => 0,
        }
    }

    /// Total pixel footprint of a `size_x` × `size_y` grid.
    ///
    /// A zero dimension yields a degenerate but non-panicking result.
    pub fn size_on_screen(&self, size_x: u32, size_y: u32) -> ScreenSize {
        let (sx, sy) = (u64::from(size_x), u64::from(size_y));
        let tw = u64::from(self.tile_size.width);
        let th = u64::from(self.tile_size.height);

        let (width, height) = match self.orientation {
            Orientation::Orthogonal => (sx * tw, sy * th),
            Orientation::Staggered | Orientation::Hexagonal => {
                let ts = self.side();
                match self.stagger_axis {
                    StaggerAxis::X => (sx.saturating_sub(1) * (tw + ts) / 2 + tw, sy * th + th / 2),
                    StaggerAxis::Y => (sx * tw + tw / 2, sy.saturating_sub(1) * (th + ts) / 2 + th),
                }
            }
            Orientation::Isometric => {
                let s = sx.max(sy);
                (s * tw, s * th)
            }
        };
        ScreenSize { width, height }
    }

    /// Top-left pixel of tile `(x, y)` in a `size_x` × `size_y` grid.
    ///
    /// Every in-bounds tile's box lies inside
    /// [`size_on_screen`](Self::size_on_screen). Bounds are the caller's
    /// responsibility; out-of-range coordinates clamp instead of panicking.
    pub fn tile_origin(&self, size_y: u32, x: u32, y: u32) -> ScreenPoint {
        let (x64, y64) = (u64::from(x), u64::from(y));
        let tw = u64::from(self.tile_size.width);
        let th = u64::from(self.tile_size.height);

        let (px, py) = match self.orientation {
            Orientation::Orthogonal => (x64 * tw, y64 * th),
            Orientation::Staggered | Orientation::Hexagonal => {
                let ts = self.side();
                match self.stagger_axis {
                    StaggerAxis::X => {
                        let shift = if self.stagger_index.shifts(x) { th / 2 } else { 0 };
                        (x64 * (tw + ts) / 2, y64 * th + shift)
                    }
                    StaggerAxis::Y => {
                        let shift = if self.stagger_index.shifts(y) { tw / 2 } else { 0 };
                        (x64 * tw + shift, y64 * (th + ts) / 2)
                    }
                }
            }
            Orientation::Isometric => {
                // Tile (0, size_y - 1) sits at the left edge.
                let column = (x64 + u64::from(size_y)).saturating_sub(1 + y64);
                (column * tw / 2, (x64 + y64) * th / 2)
            }
        };
        ScreenPoint { x: px, y: py }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(orientation: Orientation, tw: u32, th: u32) -> MapGeometry {
        MapGeometry {
            orientation,
            tile_size: TileSize::new(tw, th),
            ..MapGeometry::default()
        }
    }

    #[test]
    fn default_is_orthogonal_32() {
        let g = MapGeometry::default();
        assert_eq!(g.orientation, Orientation::Orthogonal);
        assert_eq!(g.tile_size, TileSize::new(32, 32));
        assert_eq!(g.stagger_axis, StaggerAxis::Y);
        assert_eq!(g.stagger_index, StaggerIndex::Odd);
        assert_eq!(g.hex_side_length, 0);
    }

    // ── size_on_screen ─────────────────────────────────────────

    #[test]
    fn orthogonal_footprint() {
        let g = geometry(Orientation::Orthogonal, 32, 32);
        assert_eq!(
            g.size_on_screen(10, 5),
            ScreenSize {
                width: 320,
                height: 160
            }
        );
    }

    #[test]
    fn isometric_uses_larger_dimension() {
        let g = geometry(Orientation::Isometric, 64, 32);
        assert_eq!(
            g.size_on_screen(4, 7),
            ScreenSize {
                width: 7 * 64,
                height: 7 * 32
            }
        );
        assert_eq!(g.size_on_screen(7, 4), g.size_on_screen(4, 7));
    }

    #[test]
    fn staggered_x_axis() {
        let mut g = geometry(Orientation::Staggered, 64, 32);
        g.stagger_axis = StaggerAxis::X;
        // (5-1)*64/2 + 64, 4*32 + 16
        assert_eq!(
            g.size_on_screen(5, 4),
            ScreenSize {
                width: 192,
                height: 144
            }
        );
    }

    #[test]
    fn staggered_y_axis() {
        let mut g = geometry(Orientation::Staggered, 64, 32);
        g.stagger_axis = StaggerAxis::Y;
        // 5*64 + 32, (4-1)*32/2 + 32
        assert_eq!(
            g.size_on_screen(5, 4),
            ScreenSize {
                width: 352,
                height: 80
            }
        );
    }

    #[test]
    fn staggered_ignores_hex_side() {
        let mut g = geometry(Orientation::Staggered, 64, 32);
        let before = g.size_on_screen(5, 4);
        g.hex_side_length = 20;
        assert_eq!(g.size_on_screen(5, 4), before);
    }

    #[test]
    fn hexagonal_x_axis_adds_side() {
        let mut g = geometry(Orientation::Hexagonal, 64, 32);
        g.stagger_axis = StaggerAxis::X;
        g.hex_side_length = 16;
        // (5-1)*(64+16)/2 + 64, 4*32 + 16
        assert_eq!(
            g.size_on_screen(5, 4),
            ScreenSize {
                width: 224,
                height: 144
            }
        );
    }

    #[test]
    fn hexagonal_y_axis_adds_side() {
        let mut g = geometry(Orientation::Hexagonal, 64, 32);
        g.stagger_axis = StaggerAxis::Y;
        g.hex_side_length = 16;
        // 5*64 + 32, (4-1)*(32+16)/2 + 32
        assert_eq!(
            g.size_on_screen(5, 4),
            ScreenSize {
                width: 352,
                height: 104
            }
        );
    }

    #[test]
    fn odd_half_tiles_round_down() {
        let mut g = geometry(Orientation::Staggered, 33, 17);
        g.stagger_axis = StaggerAxis::X;
        // (2-1)*33/2 + 33 = 16 + 33, 1*17 + 8
        assert_eq!(
            g.size_on_screen(2, 1),
            ScreenSize {
                width: 49,
                height: 25
            }
        );
    }

    #[test]
    fn single_column_stagger_has_no_underflow() {
        let mut g = geometry(Orientation::Hexagonal, 64, 32);
        g.stagger_axis = StaggerAxis::X;
        g.hex_side_length = 16;
        assert_eq!(g.size_on_screen(1, 1).width, 64);
        assert_eq!(g.size_on_screen(0, 0).width, 64);
    }

    // ── tile_origin ────────────────────────────────────────────

    #[test]
    fn orthogonal_origin() {
        let g = geometry(Orientation::Orthogonal, 32, 16);
        assert_eq!(g.tile_origin(5, 3, 2), ScreenPoint { x: 96, y: 32 });
    }

    #[test]
    fn stagger_index_selects_shifted_columns() {
        let mut g = geometry(Orientation::Staggered, 64, 32);
        g.stagger_axis = StaggerAxis::X;
        g.stagger_index = StaggerIndex::Odd;
        assert_eq!(g.tile_origin(4, 0, 1), ScreenPoint { x: 0, y: 32 });
        assert_eq!(g.tile_origin(4, 1, 1), ScreenPoint { x: 32, y: 48 });

        g.stagger_index = StaggerIndex::Even;
        assert_eq!(g.tile_origin(4, 0, 1), ScreenPoint { x: 0, y: 48 });
        assert_eq!(g.tile_origin(4, 1, 1), ScreenPoint { x: 32, y: 32 });
    }

    #[test]
    fn stagger_y_shifts_rows() {
        let mut g = geometry(Orientation::Hexagonal, 64, 32);
        g.stagger_axis = StaggerAxis::Y;
        g.hex_side_length = 16;
        assert_eq!(g.tile_origin(4, 2, 1), ScreenPoint { x: 160, y: 24 });
        assert_eq!(g.tile_origin(4, 2, 2), ScreenPoint { x: 128, y: 48 });
    }

    #[test]
    fn isometric_origin_places_left_corner_at_zero() {
        let g = geometry(Orientation::Isometric, 64, 32);
        assert_eq!(g.tile_origin(3, 0, 2), ScreenPoint { x: 0, y: 32 });
        assert_eq!(g.tile_origin(3, 0, 0), ScreenPoint { x: 64, y: 0 });
        assert_eq!(g.tile_origin(3, 2, 0), ScreenPoint { x: 128, y: 32 });
    }

    fn any_orientation() -> impl Strategy<Value = Orientation> {
        prop_oneof![
            Just(Orientation::Orthogonal),
            Just(Orientation::Staggered),
            Just(Orientation::Hexagonal),
            Just(Orientation::Isometric),
        ]
    }

    proptest! {
        #[test]
        fn every_tile_fits_inside_footprint(
            orientation in any_orientation(),
            axis_x in any::<bool>(),
            even in any::<bool>(),
            tw in 1u32..128,
            th in 1u32..128,
            side in 0u32..64,
            sx in 1u32..12,
            sy in 1u32..12,
            x in 0u32..12,
            y in 0u32..12,
        ) {
            let g = MapGeometry {
                orientation,
                tile_size: TileSize::new(tw, th),
                hex_side_length: side,
                stagger_axis: if axis_x { StaggerAxis::X } else { StaggerAxis::Y },
                stagger_index: if even { StaggerIndex::Even } else { StaggerIndex::Odd },
            };
            let (x, y) = (x % sx, y % sy);
            let size = g.size_on_screen(sx, sy);
            let origin = g.tile_origin(sy, x, y);
            prop_assert!(origin.x + u64::from(tw) <= size.width);
            prop_assert!(origin.y + u64::from(th) <= size.height);
        }

        #[test]
        fn footprint_grows_with_grid(
            orientation in any_orientation(),
            tw in 1u32..128,
            th in 1u32..128,
            sx in 1u32..50,
            sy in 1u32..50,
        ) {
            let g = geometry(orientation, tw, th);
            let small = g.size_on_screen(sx, sy);
            let wide = g.size_on_screen(sx + 1, sy);
            let tall = g.size_on_screen(sx, sy + 1);
            prop_assert!(wide.width >= small.width);
            prop_assert!(tall.height >= small.height);
        }
    }
}
