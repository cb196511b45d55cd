//! 3D k-d tree with radius queries, backed by [`kiddo`]'s immutable tree.
//!
//! The tree is built once over a slice of positions and then only queried, which is
//! exactly how the thinning pass uses it. Each point's payload is its slice index.
use glam::Vec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

/// Points per leaf bucket.
const BUCKET_SIZE: usize = 32;

type Tree = ImmutableKdTree<f32, u64, 3, BUCKET_SIZE>;

/// Static k-d tree over 3D points.
pub struct KdTree3 {
    tree: Option<Tree>,
    len: usize,
}

impl KdTree3 {
    /// Builds a tree over `positions`, using each slice index as payload.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        if positions.is_empty() {
            return Self { tree: None, len: 0 };
        }
        let entries: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
        Self {
            tree: Some(ImmutableKdTree::new_from_slice(&entries)),
            len: positions.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Payload indices of all points with `distance(center, point) <= radius`, in
    /// ascending order. A negative or NaN radius finds nothing.
    pub fn within(&self, center: Vec3, radius: f32) -> Vec<usize> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        if !(radius >= 0.0) {
            return Vec::new();
        }

        let radius_sq = radius * radius;
        // Widen the query slightly and filter here so the boundary stays inclusive.
        let query_sq = (radius_sq * (1.0 + 4.0 * f32::EPSILON)).next_up();
        let mut found: Vec<usize> = tree
            .within_unsorted::<SquaredEuclidean>(&center.to_array(), query_sq)
            .into_iter()
            .filter(|nn| nn.distance <= radius_sq)
            .map(|nn| nn.item as usize)
            .collect();
        found.sort_unstable();
        found
    }
}

impl std::fmt::Debug for KdTree3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KdTree3").field("len", &self.len).finish()
    }
}
