//! Camera scroll clamping against a map's footprint.

use crate::geometry::ScreenSize;

/// The on-screen rectangle the map is drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Bottom-left corner of the viewport.
    pub pos: [f32; 2],
    /// Width and height of the viewport.
    pub size: [f32; 2],
}

/// Clamp a requested camera scroll so the map keeps covering the viewport.
///
/// `camera` is the current camera offset and `distance` the requested
/// change. The returned distance never moves the map's near edge past the
/// viewport's near edge, nor its far edge inside the viewport's far edge.
/// When the map is smaller than the viewport the near edge wins.
pub fn lock_scroll(
    camera: [f32; 2],
    viewport: &Viewport,
    map_size: ScreenSize,
    distance: [f32; 2],
) -> [f32; 2] {
    let map = [map_size.width as f32, map_size.height as f32];
    std::array::from_fn(|axis| {
        clamp_axis(
            camera[axis],
            viewport.pos[axis],
            viewport.size[axis],
            map[axis],
            distance[axis],
        )
    })
}

fn clamp_axis(camera: f32, view_pos: f32, view_size: f32, map: f32, d: f32) -> f32 {
    if camera + d > view_pos {
        view_pos - camera
    } else if camera + map + d <= view_pos + view_size {
        view_pos + view_size - camera - map
    } else {
        d
    }
}
