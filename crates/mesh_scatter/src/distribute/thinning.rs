//! Minimum-distance thinning of candidate points.
//!
//! A single greedy pass in ascending index order: every point that is still alive
//! eliminates all other points within the minimum distance. The lowest index of any
//! cluster of mutually close points therefore always survives.
use glam::Vec3;
use tracing::debug;

use crate::sampling::Candidates;
use crate::spatial::KdTree3;

/// Computes which points to eliminate so that no two survivors are within
/// `minimum_distance` of each other.
///
/// Eliminated points are skipped as query centers but still found as neighbours.
/// A distance of zero eliminates nothing.
///
/// Panics if `minimum_distance` is negative or NaN.
pub fn elimination_mask_for_close_points(positions: &[Vec3], minimum_distance: f32) -> Vec<bool> {
    assert!(
        minimum_distance >= 0.0,
        "minimum_distance must be >= 0, got {minimum_distance}"
    );

    let mut elimination_mask = vec![false; positions.len()];
    if positions.is_empty() || minimum_distance == 0.0 {
        return elimination_mask;
    }

    let kdtree = KdTree3::from_positions(positions);
    for (i, &center) in positions.iter().enumerate() {
        if elimination_mask[i] {
            continue;
        }
        for j in kdtree.within(center, minimum_distance) {
            if j != i {
                elimination_mask[j] = true;
            }
        }
    }

    elimination_mask
}

/// Removes masked entries from all candidate sequences, keeping survivors in their
/// original relative order. Returns the number of removed points.
///
/// Panics if the mask length differs from the candidate count.
pub fn eliminate_points_based_on_mask(
    candidates: &mut Candidates,
    elimination_mask: &[bool],
) -> usize {
    candidates.retain_unmasked(elimination_mask)
}

/// Thins `candidates` in place to the minimum distance. Returns the number of removed points.
pub fn eliminate_close_points(candidates: &mut Candidates, minimum_distance: f32) -> usize {
    let mask = elimination_mask_for_close_points(candidates.positions(), minimum_distance);
    let removed = eliminate_points_based_on_mask(candidates, &mask);
    debug!(
        "Thinning at distance {}: removed {}, kept {}.",
        minimum_distance,
        removed,
        candidates.len()
    );
    removed
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    fn random_positions(n: usize, seed: u64) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut next = || rng.next_u32() as f32 / u32::MAX as f32;
        (0..n).map(|_| Vec3::new(next(), next(), next())).collect()
    }

    fn survivors(positions: &[Vec3], mask: &[bool]) -> Vec<Vec3> {
        positions
            .iter()
            .zip(mask)
            .filter(|(_, &eliminated)| !eliminated)
            .map(|(p, _)| *p)
            .collect()
    }

    #[test]
    fn close_pair_keeps_lower_index() {
        let positions = [Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0)];
        let mask = elimination_mask_for_close_points(&positions, 1.0);
        assert_eq!(mask, vec![false, true]);

        let reversed = [Vec3::new(0.01, 0.0, 0.0), Vec3::ZERO];
        let mask = elimination_mask_for_close_points(&reversed, 1.0);
        assert_eq!(mask, vec![false, true]);
    }

    #[test]
    fn eliminated_points_do_not_eliminate_others() {
        // 0 eliminates 1; 1 would eliminate 2, but 1 is no longer a query center.
        let positions = [
            Vec3::ZERO,
            Vec3::new(0.8, 0.0, 0.0),
            Vec3::new(1.6, 0.0, 0.0),
        ];
        let mask = elimination_mask_for_close_points(&positions, 1.0);
        assert_eq!(mask, vec![false, true, false]);
    }

    #[test]
    fn survivors_respect_minimum_distance() {
        let positions = random_positions(800, 5);
        let d = 0.1;
        let mask = elimination_mask_for_close_points(&positions, d);
        let kept = survivors(&positions, &mask);
        assert!(kept.len() > 1);
        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                assert!(kept[i].distance(kept[j]) >= d - 1e-6, "{i} and {j} too close");
            }
        }
    }

    #[test]
    fn larger_distance_never_keeps_more_points() {
        let positions = random_positions(600, 11);
        let mut previous = usize::MAX;
        for d in [0.0, 0.02, 0.05, 0.1, 0.2, 0.5] {
            let kept = elimination_mask_for_close_points(&positions, d)
                .iter()
                .filter(|&&e| !e)
                .count();
            assert!(kept <= previous, "distance {d} kept {kept} > {previous}");
            previous = kept;
        }
    }

    #[test]
    fn flat_input_with_duplicates_is_thinned() {
        let mut positions: Vec<Vec3> = random_positions(20_000, 21)
            .into_iter()
            .map(|p| Vec3::new(p.x, p.y, 0.0))
            .collect();
        positions.extend(std::iter::repeat(Vec3::new(0.5, 0.5, 0.0)).take(500));

        let d = 0.03;
        let mask = elimination_mask_for_close_points(&positions, d);
        let kept = survivors(&positions, &mask);
        assert!(kept.len() > 100);
        assert_eq!(
            kept.iter().filter(|p| **p == Vec3::new(0.5, 0.5, 0.0)).count(),
            kept.contains(&Vec3::new(0.5, 0.5, 0.0)) as usize
        );
        for i in 0..kept.len() {
            for j in (i + 1)..kept.len() {
                assert!(kept[i].distance(kept[j]) >= d - 1e-6);
            }
        }
    }

    #[test]
    fn zero_distance_and_empty_input_eliminate_nothing() {
        let positions = [Vec3::ZERO, Vec3::ZERO];
        assert_eq!(
            elimination_mask_for_close_points(&positions, 0.0),
            vec![false, false]
        );
        assert!(elimination_mask_for_close_points(&[], 1.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "minimum_distance")]
    fn negative_distance_panics() {
        elimination_mask_for_close_points(&[Vec3::ZERO], -0.5);
    }

    #[test]
    fn eliminate_close_points_compacts_in_order() {
        let mut candidates = Candidates::new();
        let xs = [0.0, 0.05, 2.0, 2.01, 4.0];
        for (i, x) in xs.into_iter().enumerate() {
            candidates.push(Vec3::new(x, 0.0, 0.0), Vec3::X, i as u32);
        }
        let removed = eliminate_close_points(&mut candidates, 0.5);
        assert_eq!(removed, 2);
        assert_eq!(candidates.tri_indices(), &[0, 2, 4]);
    }
}
