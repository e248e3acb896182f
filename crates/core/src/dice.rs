//! Draw helpers over the engine's single random stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

/// Uniform draw in `[0, 1)` built from the top 53 bits of one `u64`.
pub fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Uniform value in `min..max` (exclusive upper bound).
pub fn range(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    debug_assert!(min < max);
    min + index(rng, max - min)
}
