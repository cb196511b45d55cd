//! Candidate points as three index-aligned sequences.
use glam::Vec3;

/// Candidate points produced by surface sampling.
///
/// Positions, barycentric coordinates and originating triangle indices are stored as
/// parallel sequences that always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    positions: Vec<Vec3>,
    bary_coords: Vec<Vec3>,
    tri_indices: Vec<u32>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            positions: Vec::with_capacity(cap),
            bary_coords: Vec::with_capacity(cap),
            tri_indices: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push(&mut self, position: Vec3, bary: Vec3, tri_index: u32) {
        self.positions.push(position);
        self.bary_coords.push(bary);
        self.tri_indices.push(tri_index);
    }

    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.positions.len(), self.bary_coords.len());
        debug_assert_eq!(self.positions.len(), self.tri_indices.len());
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn bary_coords(&self) -> &[Vec3] {
        &self.bary_coords
    }

    pub fn tri_indices(&self) -> &[u32] {
        &self.tri_indices
    }

    /// Keeps only entries whose mask value is `false`, preserving their relative order.
    ///
    /// Returns the number of removed entries. Panics if the mask length differs.
    pub fn retain_unmasked(&mut self, mask: &[bool]) -> usize {
        assert_eq!(
            mask.len(),
            self.len(),
            "mask length must match candidate count"
        );
        let before = self.len();
        retain_by_mask(&mut self.positions, mask);
        retain_by_mask(&mut self.bary_coords, mask);
        retain_by_mask(&mut self.tri_indices, mask);
        before - self.len()
    }

    /// Splits into `(positions, bary_coords, tri_indices)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<u32>) {
        (self.positions, self.bary_coords, self.tri_indices)
    }
}

fn retain_by_mask<T>(values: &mut Vec<T>, mask: &[bool]) {
    let mut i = 0;
    values.retain(|_| {
        let keep = !mask[i];
        i += 1;
        keep
    });
}
