//! Output point cloud with per-point attribute channels.
use glam::Vec3;

use crate::distribute::finalize::normal_to_euler_rotation;

/// Radius assigned to every distributed point.
pub const DEFAULT_POINT_RADIUS: f32 = 0.05;

pub const ATTR_POSITION: &str = "position";
pub const ATTR_RADIUS: &str = "radius";
pub const ATTR_ID: &str = "id";
pub const ATTR_NORMAL: &str = "normal";
pub const ATTR_ROTATION: &str = "rotation";

/// Borrowed view of one attribute channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeSlice<'a> {
    Float(&'a [f32]),
    Int(&'a [i32]),
    Float3(&'a [Vec3]),
}

impl AttributeSlice<'_> {
    pub fn len(&self) -> usize {
        match self {
            AttributeSlice::Float(v) => v.len(),
            AttributeSlice::Int(v) => v.len(),
            AttributeSlice::Float3(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single point with all of its attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub radius: f32,
    pub id: i32,
    pub normal: Vec3,
    pub rotation: Vec3,
}

/// Distributed points stored as index-aligned attribute channels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    radii: Vec<f32>,
    ids: Vec<i32>,
    normals: Vec<Vec3>,
    rotations: Vec<Vec3>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a point cloud from final point data. Radius is constant and rotations are
    /// derived from the normals.
    ///
    /// Panics if the sequences differ in length.
    pub fn from_parts(
        positions: Vec<Vec3>,
        ids: Vec<i32>,
        normals: Vec<Vec3>,
        radius: f32,
    ) -> Self {
        assert_eq!(positions.len(), ids.len(), "ids must match point count");
        assert_eq!(positions.len(), normals.len(), "normals must match point count");

        let rotations = normals.iter().copied().map(normal_to_euler_rotation).collect();
        Self {
            radii: vec![radius; positions.len()],
            positions,
            ids,
            normals,
            rotations,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn rotations(&self) -> &[Vec3] {
        &self.rotations
    }

    /// Names of all attribute channels.
    pub fn attribute_names(&self) -> [&'static str; 5] {
        [ATTR_POSITION, ATTR_RADIUS, ATTR_ID, ATTR_NORMAL, ATTR_ROTATION]
    }

    /// Looks up an attribute channel by name.
    pub fn attribute(&self, name: &str) -> Option<AttributeSlice<'_>> {
        match name {
            ATTR_POSITION => Some(AttributeSlice::Float3(&self.positions)),
            ATTR_RADIUS => Some(AttributeSlice::Float(&self.radii)),
            ATTR_ID => Some(AttributeSlice::Int(&self.ids)),
            ATTR_NORMAL => Some(AttributeSlice::Float3(&self.normals)),
            ATTR_ROTATION => Some(AttributeSlice::Float3(&self.rotations)),
            _ => None,
        }
    }

    pub fn get(&self, i: usize) -> Option<Point> {
        (i < self.len()).then(|| self.point(i))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    fn point(&self, i: usize) -> Point {
        Point {
            position: self.positions[i],
            radius: self.radii[i],
            id: self.ids[i],
            normal: self.normals[i],
            rotation: self.rotations[i],
        }
    }

    /// Positions as `mint` vectors for interop with other math libraries.
    pub fn positions_mint(&self) -> Vec<mint::Vector3<f32>> {
        self.positions.iter().copied().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> PointCloud {
        PointCloud::from_parts(
            vec![Vec3::ZERO, Vec3::X],
            vec![7, -3],
            vec![Vec3::Z, Vec3::Y],
            DEFAULT_POINT_RADIUS,
        )
    }

    #[test]
    fn from_parts_fills_every_channel() {
        let pc = cloud();
        assert_eq!(pc.len(), 2);
        assert_eq!(pc.radii(), &[0.05, 0.05]);
        assert_eq!(pc.rotations().len(), 2);
        for name in pc.attribute_names() {
            assert_eq!(pc.attribute(name).map(|a| a.len()), Some(2), "{name}");
        }
        assert!(pc.attribute("color").is_none());
    }

    #[test]
    fn attribute_lookup_returns_typed_channels() {
        let pc = cloud();
        assert_eq!(pc.attribute(ATTR_ID), Some(AttributeSlice::Int(&[7, -3])));
        assert!(matches!(
            pc.attribute(ATTR_RADIUS),
            Some(AttributeSlice::Float(_))
        ));
    }

    #[test]
    fn iter_yields_points_in_order() {
        let pc = cloud();
        let points: Vec<Point> = pc.iter().collect();
        assert_eq!(points[1].position, Vec3::X);
        assert_eq!(points[1].id, -3);
        assert!(pc.get(2).is_none());
        assert_eq!(pc.positions_mint()[1].x, 1.0);
    }

    #[test]
    #[should_panic(expected = "normals")]
    fn from_parts_rejects_mismatched_lengths() {
        PointCloud::from_parts(vec![Vec3::ZERO], vec![1], vec![], DEFAULT_POINT_RADIUS);
    }
}
