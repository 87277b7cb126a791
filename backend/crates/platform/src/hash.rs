//! Stable String Hashing
//!
//! djb2-XOR rolling hash over UTF-16 code units. The output must match the
//! browser implementation bit-for-bit so that a visitor lands in the same
//! bucket whichever side computes it. Not suitable for secrets.

/// djb2 seed
const SEED: u32 = 5381;

/// Compute the stable 32-bit hash of a string
///
/// `h = ((h << 5) + h) ^ code_unit` with 32-bit wraparound, starting at 5381.
pub fn stable_hash(s: &str) -> u32 {
    s.encode_utf16().fold(SEED, |h, unit| {
        (h << 5).wrapping_add(h) ^ u32::from(unit)
    })
}
