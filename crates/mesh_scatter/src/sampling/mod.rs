//! Candidate generation on triangle surfaces.
//!
//! This module holds the per-triangle sampler, the uniform distribution pass that drives
//! it over a whole mesh, and the hashing primitives used for seeds and stable ids.
use glam::Vec3;
use rand::RngCore;

pub mod candidates;
pub mod hash;
pub mod triangle;
pub mod uniform;

pub use candidates::Candidates;
pub use triangle::{sample_triangle, TriangleSampler};
pub use uniform::uniform_distribution;

/// Generate a random float in the range [0, 1).
///
/// Only the top 24 bits are used so every result is exactly representable.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

/// Draws a barycentric coordinate uniformly distributed over a triangle.
///
/// Two uniform values are folded back into the lower half of the unit square when
/// their sum exceeds one, so the result always sums to one with non-negative weights.
#[inline]
pub fn random_barycentric(rng: &mut dyn RngCore) -> Vec3 {
    let mut u = rand01(rng);
    let mut v = rand01(rng);
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }
    Vec3::new(u, v, 1.0 - u - v)
}
