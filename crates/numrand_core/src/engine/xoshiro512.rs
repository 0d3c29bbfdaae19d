//! xoshiro512** generator.

use super::{expand_seed, RandomEngine, SeedableEngine};

/// xoshiro512** (Blackman & Vigna 2018).
///
/// 512 bits of state and period 2^512 - 1, for applications running very
/// many independent streams. Same `**` scrambler as
/// [`Xoshiro256StarStar`](super::Xoshiro256StarStar).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro512StarStar {
    s: [u64; 8],
}

impl Xoshiro512StarStar {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            s: expand_seed::<8>(seed),
        }
    }

    /// Creates an engine from raw state words (`None` for all zero).
    pub fn from_state(s: [u64; 8]) -> Option<Self> {
        (s != [0; 8]).then_some(Self { s })
    }
}

impl RandomEngine for Xoshiro512StarStar {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 11;

        s[2] ^= s[0];
        s[5] ^= s[1];
        s[1] ^= s[2];
        s[7] ^= s[3];
        s[3] ^= s[4];
        s[4] ^= s[5];
        s[0] ^= s[6];
        s[6] ^= s[7];

        s[6] ^= t;
        s[7] = s[7].rotate_left(21);

        result
    }

    fn reinitialise(&mut self, seed: u64) {
        self.s = expand_seed::<8>(seed);
    }
}

impl SeedableEngine for Xoshiro512StarStar {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}
