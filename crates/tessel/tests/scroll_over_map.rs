//! Camera clamping driven by a live store's footprint.

use tessel::prelude::*;
use tessel_test_utils::TestMapBuilder;

#[test]
fn camera_stops_at_map_edges() {
    let store = TestMapBuilder::new()
        .size(10, 5)
        .layers(1)
        .build()
        .unwrap();
    let map = store.size_on_screen();
    assert_eq!((map.width, map.height), (320, 160));

    let viewport = Viewport {
        pos: [0.0, 0.0],
        size: [200.0, 100.0],
    };

    // Dragging right from the origin would expose empty space on the left.
    assert_eq!(
        lock_scroll([0.0, 0.0], &viewport, map, [15.0, 0.0]),
        [0.0, 0.0]
    );
    // Within bounds the request passes through.
    assert_eq!(
        lock_scroll([-50.0, -20.0], &viewport, map, [-10.0, 5.0]),
        [-10.0, 5.0]
    );
    // Dragging past the far edge is pulled back to align the edges.
    assert_eq!(
        lock_scroll([-110.0, -50.0], &viewport, map, [-30.0, -30.0]),
        [-10.0, -10.0]
    );
}

#[test]
fn released_store_keeps_its_geometry() {
    let mut store = TestMapBuilder::new()
        .size(4, 7)
        .orientation(Orientation::Isometric)
        .tile_size(64, 32)
        .build()
        .unwrap();
    store.free_memory().unwrap();
    assert_eq!(
        store.size_on_screen(),
        ScreenSize {
            width: 448,
            height: 224
        }
    );
    assert!(matches!(
        store.dump_tiles(),
        Err(StoreError::UseAfterFree)
    ));
}
