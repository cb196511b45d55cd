//! Uniform distribution pass over all triangles of a mesh.
use tracing::debug;

use crate::mesh::{triangles, SurfaceMesh};
use crate::sampling::{Candidates, TriangleSampler};

/// Samples every triangle of `mesh` at `density` points per unit area.
///
/// No density factor and no elimination is applied. Output order is triangle order,
/// then generation order within each triangle.
pub fn uniform_distribution<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    density: f32,
    seed: i32,
) -> Candidates {
    let sampler = TriangleSampler::new(seed);
    let mut candidates = Candidates::new();
    for tri in triangles(mesh) {
        sampler.sample(&tri, density, &mut candidates);
    }

    debug!(
        "Uniform pass: {} candidates from {} triangles.",
        candidates.len(),
        mesh.triangle_count()
    );
    candidates
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::mesh::TriangleMesh;

    fn strip(n: u32) -> TriangleMesh {
        let mut positions = Vec::new();
        for i in 0..=n {
            positions.push(Vec3::new(i as f32, 0.0, 0.0));
            positions.push(Vec3::new(i as f32, 1.0, 0.0));
        }
        let faces: Vec<[u32; 4]> = (0..n)
            .map(|i| [2 * i, 2 * i + 2, 2 * i + 3, 2 * i + 1])
            .collect();
        TriangleMesh::from_polygons(positions, &faces).unwrap()
    }

    #[test]
    fn output_is_grouped_by_triangle_in_order() {
        let mesh = strip(4);
        let c = uniform_distribution(&mesh, 20.0, 3);
        assert!(!c.is_empty());
        assert!(c.tri_indices().windows(2).all(|w| w[0] <= w[1]));
        for ((p, b), &t) in c.positions().iter().zip(c.bary_coords()).zip(c.tri_indices()) {
            let tri = crate::mesh::triangle(&mesh, t);
            assert!((tri.interpolate(*b) - *p).length() < 1e-5);
        }
    }

    #[test]
    fn count_tracks_area_times_density() {
        // 8 triangles of area 0.5 at density 10: exactly 5 per triangle.
        let mesh = strip(4);
        let c = uniform_distribution(&mesh, 10.0, 0);
        assert_eq!(c.len(), 40);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let mesh = strip(3);
        assert_eq!(
            uniform_distribution(&mesh, 13.7, 42),
            uniform_distribution(&mesh, 13.7, 42)
        );
    }

    #[test]
    fn empty_mesh_yields_no_candidates() {
        let mesh = TriangleMesh::default();
        assert!(uniform_distribution(&mesh, 100.0, 0).is_empty());
    }
}
