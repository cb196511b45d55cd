//! Triangle enumeration over a [`SurfaceMesh`].
use glam::Vec3;

use crate::mesh::SurfaceMesh;

/// A mesh triangle with its vertex positions resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Index into the mesh triangle list.
    pub index: u32,
    /// Vertex indices of the three corners.
    pub vertices: [u32; 3],
    /// Positions of the three corners.
    pub positions: [Vec3; 3],
}

impl Triangle {
    /// Surface area.
    #[inline]
    pub fn area(&self) -> f32 {
        0.5 * self.normal().length()
    }

    /// Face normal, un-normalized: `(b - a) x (c - a)`. Length is twice the area.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.positions;
        (b - a).cross(c - a)
    }

    /// Position at the given barycentric coordinate.
    #[inline]
    pub fn interpolate(&self, bary: Vec3) -> Vec3 {
        let [a, b, c] = self.positions;
        a * bary.x + b * bary.y + c * bary.z
    }
}

/// Resolves triangle `index` of `mesh`.
///
/// Panics if `index` or any of its vertex indices is out of range.
#[inline]
pub fn triangle<M: SurfaceMesh + ?Sized>(mesh: &M, index: u32) -> Triangle {
    let vertices = mesh.triangles()[index as usize];
    let positions = mesh.positions();
    Triangle {
        index,
        vertices,
        positions: vertices.map(|v| positions[v as usize]),
    }
}

/// Enumerates all triangles of `mesh` in triangle-list order.
pub fn triangles<M: SurfaceMesh + ?Sized>(
    mesh: &M,
) -> impl ExactSizeIterator<Item = Triangle> + '_ {
    (0..mesh.triangle_count()).map(move |i| triangle(mesh, i as u32))
}
