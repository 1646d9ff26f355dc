//! Criterion micro-benchmarks for arena allocation, cell access, and bulk I/O.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_arena::BackingBuffer;
use tessel_bench::{build_store, reference_profile, stress_profile, terrain_grid};
use tessel_core::TileRecord;
use tessel_store::TileMapStore;
use tessel_test_utils::fixture_registries;

/// Benchmark: allocate a 10K-cell store into a recycled buffer.
fn bench_allocate_reference(c: &mut Criterion) {
    let config = reference_profile();
    let slots = config.slot_count().unwrap();
    let mut buffer = Some(BackingBuffer::<TileRecord>::new(slots));

    c.bench_function("allocate_reference_10k", |b| {
        b.iter(|| {
            let mut store = TileMapStore::new(
                config.clone(),
                buffer.take().unwrap(),
                fixture_registries(),
            )
            .unwrap();
            buffer = Some(store.free_memory().unwrap());
        });
    });
}

/// Benchmark: read the model of layer 0 in every cell.
fn bench_get_tile_all_cells(c: &mut Criterion) {
    let mut store = build_store(reference_profile()).unwrap();
    store.set_tiles(&terrain_grid(100, 100)).unwrap();

    c.bench_function("get_tile_reference_10k", |b| {
        b.iter(|| {
            for x in 0..100 {
                for y in 0..100 {
                    let mut tile = store.get_tile(x, y, false).unwrap();
                    let model = tile.get_layer_tile(0).unwrap().model().unwrap();
                    black_box(model);
                }
            }
        });
    });
}

/// Benchmark: walk the non-empty layers of every cell via `tiles()`.
fn bench_iterate_layers(c: &mut Criterion) {
    let mut store = build_store(reference_profile()).unwrap();
    store.set_tiles(&terrain_grid(100, 100)).unwrap();

    c.bench_function("iterate_layers_reference_10k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for row in store.tiles().unwrap().iter_mut() {
                for tile in row.iter_mut() {
                    count += tile.layers().count();
                }
            }
            black_box(count);
        });
    });
}

/// Benchmark: bulk-load the reference terrain.
fn bench_set_tiles_reference(c: &mut Criterion) {
    let mut store = build_store(reference_profile()).unwrap();
    let grid = terrain_grid(100, 100);

    c.bench_function("set_tiles_reference_10k", |b| {
        b.iter(|| store.set_tiles(black_box(&grid)).unwrap());
    });
}

/// Benchmark: dump the stress terrain back to names.
fn bench_dump_tiles_stress(c: &mut Criterion) {
    let mut store = build_store(stress_profile()).unwrap();
    store.set_tiles(&terrain_grid(316, 316)).unwrap();

    c.bench_function("dump_tiles_stress_100k", |b| {
        b.iter(|| black_box(store.dump_tiles().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_allocate_reference,
    bench_get_tile_all_cells,
    bench_iterate_layers,
    bench_set_tiles_reference,
    bench_dump_tiles_stress,
);
criterion_main!(benches);
