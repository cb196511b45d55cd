mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use mesh_scatter::distribute::thinning::elimination_mask_for_close_points;
use mesh_scatter::spatial::KdTree3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POINT_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];
const DISTANCES: [f32; 4] = [0.005, 0.01, 0.02, 0.05];

fn random_positions(n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vec3::new(rng.random::<f32>(), rng.random::<f32>(), 0.0))
        .collect()
}

fn kd_tree_build_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial/kd_tree_build");

    for &n in &POINT_COUNTS {
        let positions = random_positions(n, 0xB01D ^ n as u64);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &positions, |b, positions| {
            b.iter(|| {
                let tree = KdTree3::from_positions(black_box(positions));
                black_box(tree.len());
            });
        });
    }

    group.finish();
}

fn thinning_benches(c: &mut Criterion) {
    let positions = random_positions(50_000, 0x7417);
    let mut group = c.benchmark_group("distribute/thinning");
    group.throughput(common::elements_throughput(positions.len()));

    for &d in &DISTANCES {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| {
                let mask = elimination_mask_for_close_points(black_box(&positions), d);
                black_box(mask.iter().filter(|&&e| !e).count());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = kd_tree_build_benches, thinning_benches
}
criterion_main!(benches);
