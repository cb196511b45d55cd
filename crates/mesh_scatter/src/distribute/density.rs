//! Per-vertex density factors and the density mask pass.
use glam::Vec3;
use tracing::{debug, warn};

use crate::mesh::{triangle, SurfaceMesh, Triangle};
use crate::sampling::hash::{stable_id, unit_from_id};

/// Density factors resolved from an optional per-vertex attribute.
///
/// Negative attribute values are treated as zero. A missing attribute yields a uniform
/// factor of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityFactors<'a> {
    Uniform,
    PerVertex(&'a [f32]),
}

impl<'a> DensityFactors<'a> {
    /// Looks up `name` on `mesh`, falling back to [`DensityFactors::Uniform`].
    pub fn from_mesh<M: SurfaceMesh + ?Sized>(mesh: &'a M, name: Option<&str>) -> Self {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Self::Uniform;
        };
        match mesh.vertex_attribute(name) {
            Some(values) if values.len() == mesh.vertex_count() => Self::PerVertex(values),
            Some(values) => {
                warn!(
                    "Density attribute '{}' has {} values for {} vertices; using 1.0.",
                    name,
                    values.len(),
                    mesh.vertex_count()
                );
                Self::Uniform
            }
            None => {
                debug!("Density attribute '{}' not found; using 1.0.", name);
                Self::Uniform
            }
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform)
    }

    /// Factor of a single vertex, clamped to be non-negative.
    #[inline]
    pub fn vertex(&self, v: u32) -> f32 {
        match self {
            Self::Uniform => 1.0,
            Self::PerVertex(values) => values[v as usize].max(0.0),
        }
    }

    /// Mean factor of the three corners of `tri`.
    #[inline]
    pub fn triangle_mean(&self, tri: &Triangle) -> f32 {
        let [a, b, c] = tri.vertices;
        (self.vertex(a) + self.vertex(b) + self.vertex(c)) / 3.0
    }

    /// Factor interpolated at a barycentric coordinate of `tri`.
    #[inline]
    pub fn interpolate(&self, tri: &Triangle, bary: Vec3) -> f32 {
        let [a, b, c] = tri.vertices;
        self.vertex(a) * bary.x + self.vertex(b) * bary.y + self.vertex(c) * bary.z
    }
}

/// Marks points whose density factor rejects them.
///
/// A point survives when a value in `[0, 1)` derived from its stable id is below the
/// factor interpolated at its surface location, so the decision depends only on where
/// the point lies and not on which other points exist. Uniform factors reject nothing.
pub fn density_elimination_mask<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    factors: &DensityFactors<'_>,
    bary_coords: &[Vec3],
    tri_indices: &[u32],
) -> Vec<bool> {
    assert_eq!(
        bary_coords.len(),
        tri_indices.len(),
        "barycentric coordinates and triangle indices must have equal length"
    );
    if factors.is_uniform() {
        return vec![false; bary_coords.len()];
    }

    bary_coords
        .iter()
        .zip(tri_indices)
        .map(|(&bary, &tri_index)| {
            let tri = triangle(mesh, tri_index);
            let factor = factors.interpolate(&tri, bary);
            unit_from_id(stable_id(bary, tri_index)) >= factor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TriangleMesh;

    fn mesh_with_density(values: Vec<f32>) -> TriangleMesh {
        TriangleMesh::try_new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]])
            .unwrap()
            .with_vertex_attribute("density", values)
            .unwrap()
    }

    #[test]
    fn missing_attribute_is_uniform_one() {
        let mesh = mesh_with_density(vec![0.2, 0.4, 0.6]);
        let factors = DensityFactors::from_mesh(&mesh, Some("nope"));
        assert!(factors.is_uniform());
        assert_eq!(factors.vertex(2), 1.0);
        assert!(DensityFactors::from_mesh(&mesh, None).is_uniform());
        assert!(DensityFactors::from_mesh(&mesh, Some("")).is_uniform());
    }

    #[test]
    fn negative_values_clamp_to_zero_and_average() {
        let mesh = mesh_with_density(vec![-1.0, 0.3, 0.6]);
        let factors = DensityFactors::from_mesh(&mesh, Some("density"));
        let tri = triangle(&mesh, 0);
        assert_eq!(factors.vertex(0), 0.0);
        assert!((factors.triangle_mean(&tri) - 0.3).abs() < 1e-6);
        assert!((factors.interpolate(&tri, Vec3::new(0.0, 0.5, 0.5)) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn zero_density_rejects_all_and_full_density_keeps_all() {
        let bary: Vec<Vec3> = (1..50)
            .map(|i| {
                let u = i as f32 / 100.0;
                Vec3::new(u, 0.5 - u / 2.0, 0.5 - u / 2.0)
            })
            .collect();
        let tris = vec![0u32; bary.len()];

        let zero = mesh_with_density(vec![0.0; 3]);
        let factors = DensityFactors::from_mesh(&zero, Some("density"));
        assert!(density_elimination_mask(&zero, &factors, &bary, &tris)
            .iter()
            .all(|&e| e));

        let full = mesh_with_density(vec![1.0; 3]);
        let factors = DensityFactors::from_mesh(&full, Some("density"));
        assert!(density_elimination_mask(&full, &factors, &bary, &tris)
            .iter()
            .all(|&e| !e));
    }

    #[test]
    fn uniform_factors_reject_nothing() {
        let mesh = mesh_with_density(vec![0.0; 3]);
        let mask = density_elimination_mask(
            &mesh,
            &DensityFactors::Uniform,
            &[Vec3::X, Vec3::Y],
            &[0, 0],
        );
        assert_eq!(mask, vec![false, false]);
    }
}
