//! Normals, stable ids and rotations for distributed points.
//!
//! Everything here is a pure function of `(triangle index, barycentric coordinate)` and
//! the current vertex positions. Deforming a mesh without changing its topology keeps
//! every id and moves every normal with the surface.
use glam::{EulerRot, Mat3, Quat, Vec3};

use crate::mesh::{triangle, SurfaceMesh};
use crate::sampling::hash::stable_id;

/// Derived attributes of the points that survived elimination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointData {
    pub normals: Vec<Vec3>,
    pub ids: Vec<i32>,
}

/// Recomputes normal and stable id for every `(bary, triangle)` pair.
///
/// Panics if the two sequences differ in length.
pub fn compute_point_data<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    bary_coords: &[Vec3],
    tri_indices: &[u32],
) -> PointData {
    assert_eq!(
        bary_coords.len(),
        tri_indices.len(),
        "barycentric coordinates and triangle indices must have equal length"
    );

    let mut data = PointData {
        normals: Vec::with_capacity(bary_coords.len()),
        ids: Vec::with_capacity(bary_coords.len()),
    };
    for (&bary, &tri_index) in bary_coords.iter().zip(tri_indices) {
        data.ids.push(stable_id(bary, tri_index));
        data.normals.push(triangle(mesh, tri_index).normal());
    }
    data
}

/// Rotation, as XYZ Euler angles, that turns the local `-Z` axis onto `normal`.
///
/// The local `+Y` axis is kept as close to world `+Z` as possible; normals parallel to
/// `Z` use world `+Y` instead. A zero normal gives a zero rotation.
pub fn normal_to_euler_rotation(normal: Vec3) -> Vec3 {
    let Some(forward) = normal.try_normalize() else {
        return Vec3::ZERO;
    };

    let z_axis = -forward;
    let reference = if z_axis.z.abs() > 0.999 {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let y_axis = (reference - z_axis * reference.dot(z_axis)).normalize();
    let x_axis = y_axis.cross(z_axis);

    let quat = Quat::from_mat3(&Mat3::from_cols(x_axis, y_axis, z_axis));
    let (z, y, x) = quat.to_euler(EulerRot::ZYX);
    Vec3::new(x, y, z)
}

/// Converts XYZ Euler angles produced by [`normal_to_euler_rotation`] back to a quaternion.
pub fn euler_rotation_to_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::ZYX, rotation.z, rotation.y, rotation.x)
}
