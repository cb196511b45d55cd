//! Integer hashing used for per-triangle seeds and stable point ids.
use glam::Vec3;

/// Hashes a 32-bit integer with Bob Jenkins' final mix (`lookup3` style).
#[inline]
pub fn hash_int(k: u32) -> u32 {
    hash_int_2d(k, 0)
}

/// Hashes two 32-bit integers into one.
#[inline]
pub fn hash_int_2d(kx: u32, ky: u32) -> u32 {
    let mut a: u32 = 0xdead_beef_u32.wrapping_add((2 << 2) + 13);
    let mut b = a;
    let mut c = a;

    a = a.wrapping_add(kx);
    b = b.wrapping_add(ky);

    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));
    c
}

/// Seed of the random generator owned by triangle `tri_index`.
///
/// Depends only on the triangle index and the user seed, never on traversal order.
#[inline]
pub fn triangle_seed(tri_index: u32, seed: i32) -> u64 {
    u64::from(hash_int((tri_index as i32).wrapping_add(seed) as u32))
}

/// Hashes the bit patterns of a barycentric coordinate.
#[inline]
pub fn hash_bary(bary: Vec3) -> u32 {
    let x = u64::from(bary.x.to_bits());
    let y = u64::from(bary.y.to_bits());
    let z = u64::from(bary.z.to_bits());
    let mixed = x.wrapping_mul(435_109) ^ y.wrapping_mul(380_867) ^ z.wrapping_mul(1_059_217);
    mix_u64(mixed) as u32
}

/// Stable id of a surface location: barycentric hash offset by the triangle index.
#[inline]
pub fn stable_id(bary: Vec3, tri_index: u32) -> i32 {
    (hash_bary(bary) as i32).wrapping_add(tri_index as i32)
}

/// Maps an id to a deterministic value in `[0, 1)`.
#[inline]
pub fn unit_from_id(id: i32) -> f32 {
    let h = mix_u64(u64::from(id as u32) ^ 0x9E37_79B9_7F4A_7C15);
    // Top 24 bits fit the f32 mantissa exactly.
    (h >> 40) as f32 / (1u64 << 24) as f32
}

/// SplitMix64 finalizer.
#[inline]
pub(crate) fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_int_is_deterministic_and_spreads() {
        assert_eq!(hash_int(17), hash_int(17));
        assert_ne!(hash_int(0), hash_int(1));
        assert_ne!(hash_int_2d(1, 0), hash_int_2d(0, 1));
    }

    #[test]
    fn triangle_seed_combines_index_and_seed() {
        // Only the sum matters, matching `hash(triangle_index + seed)`.
        assert_eq!(triangle_seed(3, 4), triangle_seed(4, 3));
        assert_ne!(triangle_seed(3, 0), triangle_seed(3, 1));
        assert_eq!(triangle_seed(0, -1), u64::from(hash_int(u32::MAX)));
    }

    #[test]
    fn stable_id_offsets_by_triangle_index() {
        let bary = Vec3::new(0.2, 0.3, 0.5);
        let base = stable_id(bary, 0);
        assert_eq!(stable_id(bary, 5), base.wrapping_add(5));
        assert_ne!(stable_id(Vec3::new(0.3, 0.2, 0.5), 0), base);
    }

    #[test]
    fn unit_from_id_stays_in_unit_interval() {
        for id in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
            let u = unit_from_id(id);
            assert!((0.0..1.0).contains(&u), "unit_from_id({id}) = {u}");
        }
    }

    #[test]
    fn mix_u64_changes_low_entropy_inputs() {
        assert_ne!(mix_u64(1), 1);
        assert_ne!(mix_u64(1), mix_u64(2));
    }
}
