//! WyRand generator.

use super::{RandomEngine, SeedableEngine};

const WY_INCREMENT: u64 = 0xA076_1D64_78BD_642F;
const WY_XOR: u64 = 0xE703_7ED1_A0B4_28DB;

/// WyRand (Wang Yi): a Weyl counter folded through a 64x64->128 multiply.
///
/// Single-word state, very fast, passes BigCrush and PractRand. Any seed,
/// including zero, is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WyRand {
    state: u64,
}

impl WyRand {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomEngine for WyRand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(WY_INCREMENT);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_XOR);
        ((t >> 64) as u64) ^ (t as u64)
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = seed;
    }
}

impl SeedableEngine for WyRand {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}
