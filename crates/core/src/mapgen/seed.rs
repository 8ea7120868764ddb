//! Level seed mixing and unbiased draws from the level's random stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::config::CountRange;

pub fn derive_level_seed(run_seed: u64, level_number: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level_number).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

/// Uniform index in `0..len`; rejects the low tail of the u64 range so every index is equally likely.
pub(crate) fn random_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    let bound = len as u64;
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let value = rng.next_u64();
        if value >= threshold {
            return (value % bound) as usize;
        }
    }
}

pub(crate) fn random_count(rng: &mut ChaCha8Rng, range: CountRange) -> u32 {
    debug_assert!(range.min <= range.max);
    let span = (range.max - range.min) as usize + 1;
    range.min + random_index(rng, span) as u32
}

pub(crate) fn random_variant(rng: &mut ChaCha8Rng, variants: u8) -> u8 {
    random_index(rng, usize::from(variants.max(1))) as u8
}
