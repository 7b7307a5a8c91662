//! Scan throughput over a jittered grid of cubes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{DAffine3, DVec3};
use overlap_core::{run_scan, OverlapSettings, ResultStore, SceneSource};
use overlap_scene::{shapes, MemoryHost};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `side * side` cubes on a loose grid with jitter, so some neighbors
/// overlap and most pairs are rejected at the tree roots.
fn grid_host(side: u32) -> MemoryHost {
  let mut rng = StdRng::seed_from_u64(42);
  let mut host = MemoryHost::new();
  let mesh = host.add_mesh(shapes::cube(2.0));

  for x in 0..side {
    for y in 0..side {
      let jitter = DVec3::new(rng.random_range(-0.6..0.6), rng.random_range(-0.6..0.6), 0.0);
      let pos = DVec3::new(f64::from(x) * 2.2, f64::from(y) * 2.2, 0.0) + jitter;
      host.add_object(
        0,
        &format!("cube_{x}_{y}"),
        DAffine3::from_translation(pos),
        mesh,
      );
    }
  }
  host
}

fn bench_all_pairs(c: &mut Criterion) {
  let mut group = c.benchmark_group("scan_all_pairs");
  for side in [4u32, 8] {
    let host = grid_host(side);
    group.bench_function(format!("{}x{}", side, side), |b| {
      let mut store = ResultStore::new();
      b.iter(|| {
        run_scan(black_box(&host), &OverlapSettings::default(), &mut store).unwrap();
        black_box(store.len())
      });
    });
  }
  group.finish();
}

fn bench_filtered(c: &mut Criterion) {
  let host = grid_host(8);
  let filter = host.object_ids()[0];
  let settings = OverlapSettings::new()
    .with_filter_search_one_obj(true)
    .with_filter(Some(filter));

  c.bench_function("scan_filtered_8x8", |b| {
    let mut store = ResultStore::new();
    b.iter(|| {
      run_scan(black_box(&host), &settings, &mut store).unwrap();
      black_box(store.len())
    });
  });
}

criterion_group!(benches, bench_all_pairs, bench_filtered);
criterion_main!(benches);
