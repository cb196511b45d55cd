//! Read-only mesh access for point distribution.
//!
//! Distribution only needs vertex positions, a triangle list and optional per-vertex
//! float attributes. [`SurfaceMesh`] exposes exactly that, and [`TriangleMesh`] is the
//! owned implementation used by the demos and tests.
use std::collections::HashMap;

use glam::Vec3;

use crate::error::{Error, Result};

pub mod triangle;

pub use triangle::{triangle, triangles, Triangle};

/// Read-only view of a triangulated surface.
///
/// Triangle vertex indices must be valid indices into [`SurfaceMesh::positions`].
pub trait SurfaceMesh {
    /// Vertex positions.
    fn positions(&self) -> &[Vec3];

    /// Triangle list, three vertex indices per triangle.
    fn triangles(&self) -> &[[u32; 3]];

    /// Per-vertex float attribute with the given name, if present.
    fn vertex_attribute(&self, _name: &str) -> Option<&[f32]> {
        None
    }

    fn vertex_count(&self) -> usize {
        self.positions().len()
    }

    fn triangle_count(&self) -> usize {
        self.triangles().len()
    }
}

/// Owned triangle mesh with named per-vertex float attributes.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    attributes: HashMap<String, Vec<f32>>,
}

impl TriangleMesh {
    /// Creates a mesh, checking that every triangle references existing vertices.
    pub fn try_new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        let vertex_count = positions.len();
        for (tri_index, tri) in triangles.iter().enumerate() {
            if let Some(&v) = tri.iter().find(|&&v| v as usize >= vertex_count) {
                return Err(Error::InvalidMesh(format!(
                    "triangle {tri_index} references vertex {v}, mesh has {vertex_count} vertices"
                )));
            }
        }

        Ok(Self {
            positions,
            triangles,
            attributes: HashMap::new(),
        })
    }

    /// Creates a mesh from polygon faces, fan-triangulating each face around its first corner.
    ///
    /// Faces are expected to be convex. Faces with fewer than three corners are rejected.
    pub fn from_polygons<F>(positions: Vec<Vec3>, faces: &[F]) -> Result<Self>
    where
        F: AsRef<[u32]>,
    {
        let mut triangles = Vec::with_capacity(
            faces
                .iter()
                .map(|f| f.as_ref().len().saturating_sub(2))
                .sum(),
        );
        for (face_index, face) in faces.iter().enumerate() {
            let corners = face.as_ref();
            if corners.len() < 3 {
                return Err(Error::InvalidMesh(format!(
                    "face {face_index} has {} corners, at least 3 required",
                    corners.len()
                )));
            }
            for k in 1..corners.len() - 1 {
                triangles.push([corners[0], corners[k], corners[k + 1]]);
            }
        }
        Self::try_new(positions, triangles)
    }

    /// Attaches a per-vertex float attribute, replacing any attribute with the same name.
    pub fn with_vertex_attribute(
        mut self,
        name: impl Into<String>,
        values: Vec<f32>,
    ) -> Result<Self> {
        self.set_vertex_attribute(name, values)?;
        Ok(self)
    }

    pub fn set_vertex_attribute(
        &mut self,
        name: impl Into<String>,
        values: Vec<f32>,
    ) -> Result<()> {
        let name = name.into();
        if values.len() != self.positions.len() {
            return Err(Error::InvalidMesh(format!(
                "attribute '{name}' has {} values, mesh has {} vertices",
                values.len(),
                self.positions.len()
            )));
        }
        self.attributes.insert(name, values);
        Ok(())
    }

    /// Mutable vertex positions. Topology stays fixed, so triangle indices and stable ids
    /// computed from them remain valid after deforming.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl SurfaceMesh for TriangleMesh {
    fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    fn vertex_attribute(&self, name: &str) -> Option<&[f32]> {
        self.attributes.get(name).map(Vec::as_slice)
    }
}
