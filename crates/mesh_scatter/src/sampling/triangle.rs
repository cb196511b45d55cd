//! Stochastic point generation on a single triangle.
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::mesh::Triangle;
use crate::sampling::hash::triangle_seed;
use crate::sampling::{rand01, random_barycentric, Candidates};

/// Per-triangle sampler bound to a user seed.
///
/// Every triangle gets its own generator seeded from `hash(triangle_index + seed)`, so the
/// output of one triangle never depends on which triangles were sampled before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangleSampler {
    pub seed: i32,
}

impl TriangleSampler {
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// Samples `tri` at `density` points per unit area. See [`sample_triangle`].
    #[inline]
    pub fn sample(&self, tri: &Triangle, density: f32, out: &mut Candidates) -> usize {
        sample_triangle(tri, density, self.seed, out)
    }
}

/// Appends points sampled on `tri` to `out` and returns how many were added.
///
/// `density` is the already scaled number of points per unit area. The integer part of
/// `area * density` is always emitted; one more point is added with probability equal to
/// the fractional part. Non-finite or non-positive expectations emit nothing.
pub fn sample_triangle(tri: &Triangle, density: f32, seed: i32, out: &mut Candidates) -> usize {
    let expected = tri.area() * density;
    if !expected.is_finite() || expected <= 0.0 {
        return 0;
    }

    let mut rng = StdRng::seed_from_u64(triangle_seed(tri.index, seed));

    let whole = expected.trunc();
    let add_point_probability = expected - whole;
    let add_point = add_point_probability > rand01(&mut rng);
    let count = whole as usize + usize::from(add_point);

    for _ in 0..count {
        let bary = random_barycentric(&mut rng);
        out.push(tri.interpolate(bary), bary, tri.index);
    }

    count
}
