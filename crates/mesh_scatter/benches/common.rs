use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::Vec3;
use mesh_scatter::mesh::TriangleMesh;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// `n` x `n` unit quads in the XY plane with a gentle height wave.
#[allow(dead_code)]
pub fn wavy_grid(n: u32) -> TriangleMesh {
    let row = n + 1;
    let positions = (0..row * row)
        .map(|i| {
            let (x, y) = ((i % row) as f32, (i / row) as f32);
            Vec3::new(x, y, 0.25 * (x * 0.3).sin() * (y * 0.2).cos())
        })
        .collect();
    let faces: Vec<[u32; 4]> = (0..n * n)
        .map(|q| {
            let i = (q / n) * row + q % n;
            [i, i + 1, i + row + 1, i + row]
        })
        .collect();
    TriangleMesh::from_polygons(positions, &faces).expect("grid faces are valid")
}
