//! SplitMix64 generator.

use super::{RandomEngine, SeedableEngine};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 (Steele, Lea & Flood 2014).
///
/// A 64-bit counter advanced by the golden-ratio increment and passed
/// through a strong mixing function. Used to expand single seeds into the
/// larger states of the xoshiro family, and usable as an engine in its own
/// right. Any seed, including zero, is valid.
///
/// # Examples
///
/// ```rust
/// use numrand_core::{RandomEngine, SplitMix64};
///
/// let mut engine = SplitMix64::new(1234567);
/// assert_eq!(engine.next_u64(), 6457827717110365317);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomEngine for SplitMix64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = seed;
    }
}

impl SeedableEngine for SplitMix64 {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}
