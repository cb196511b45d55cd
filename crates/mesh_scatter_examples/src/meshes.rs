use std::collections::HashMap;

use glam::Vec3;
use mesh_scatter::error::Result;
use mesh_scatter::mesh::TriangleMesh;

/// Parameters for a rectangular grid of quads centered on the origin in the XY plane.
#[derive(Clone, Copy, Debug)]
pub struct GridPlane {
    pub size: f32,
    pub subdivisions: u32,
}

impl GridPlane {
    pub fn new(size: f32, subdivisions: u32) -> Self {
        Self { size, subdivisions }
    }

    /// Builds the mesh, displacing every vertex along `Z` by `height(x, y)`.
    pub fn build_with_height(&self, height: impl Fn(f32, f32) -> f32) -> Result<TriangleMesh> {
        let n = self.subdivisions.max(1);
        let row = n + 1;
        let step = self.size / n as f32;
        let half = self.size * 0.5;

        let mut positions = Vec::with_capacity((row * row) as usize);
        for j in 0..row {
            for i in 0..row {
                let x = i as f32 * step - half;
                let y = j as f32 * step - half;
                positions.push(Vec3::new(x, y, height(x, y)));
            }
        }

        let mut faces = Vec::with_capacity((n * n) as usize);
        for j in 0..n {
            for i in 0..n {
                let v = j * row + i;
                faces.push([v, v + 1, v + row + 1, v + row]);
            }
        }

        TriangleMesh::from_polygons(positions, &faces)
    }
}

/// Flat grid plane of `size` x `size` units.
pub fn grid_plane(size: f32, subdivisions: u32) -> Result<TriangleMesh> {
    GridPlane::new(size, subdivisions).build_with_height(|_, _| 0.0)
}

/// Icosphere of the given radius, subdivided `levels` times.
pub fn subdivided_sphere(radius: f32, levels: u32) -> Result<TriangleMesh> {
    let t = (1.0 + 5f32.sqrt()) * 0.5;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    #[rustfmt::skip]
    let mut triangles: Vec<[u32; 3]> = vec![
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    for _ in 0..levels {
        let mut midpoints = HashMap::new();
        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
            *midpoints.entry((a.min(b), a.max(b))).or_insert_with(|| {
                let p = (positions[a as usize] + positions[b as usize]).normalize();
                positions.push(p);
                (positions.len() - 1) as u32
            })
        };

        let mut next = Vec::with_capacity(triangles.len() * 4);
        for [a, b, c] in triangles {
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }
        triangles = next;
    }

    for p in &mut positions {
        *p *= radius;
    }
    TriangleMesh::try_new(positions, triangles)
}
