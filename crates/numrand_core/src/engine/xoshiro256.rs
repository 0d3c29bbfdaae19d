//! The xoshiro256 family (Blackman & Vigna 2018).
//!
//! All three variants share the same 256-bit linear state transition and
//! differ only in the output scrambler:
//! - `**`: `rotl(s1 * 5, 7) * 9`
//! - `++`: `rotl(s0 + s3, 23) + s0`
//! - `+`:  `s0 + s3` (lowest bits have low linear complexity)

use super::{expand_seed, JumpableEngine, RandomEngine, SeedableEngine};

const JUMP: [u64; 4] = [
    0x180E_C6D3_3CFD_0ABA,
    0xD5A6_1266_F0C9_392C,
    0xA958_2618_E03F_C9AA,
    0x39AB_DC45_29B1_661C,
];

const LONG_JUMP: [u64; 4] = [
    0x76E1_5D3E_FEFD_CBBF,
    0xC500_4E44_1C52_2FB3,
    0x7771_0069_854E_E241,
    0x3910_9BB0_2ACB_E635,
];

/// Shared 256-bit state and transition.
#[derive(Clone, Debug, PartialEq, Eq)]
struct State256 {
    s: [u64; 4],
}

impl State256 {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self {
            s: expand_seed::<4>(seed),
        }
    }

    #[inline]
    fn advance(&mut self) {
        let s = &mut self.s;
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
    }

    fn jump_with(&mut self, table: &[u64; 4]) {
        let mut acc = [0u64; 4];
        for &word in table {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.advance();
            }
        }
        self.s = acc;
    }
}

/// xoshiro256** : the default engine of this crate.
///
/// 256 bits of state, period 2^256 - 1, all output bits pass BigCrush.
/// Seeded by expanding the `u64` seed with SplitMix64.
///
/// # Examples
///
/// ```rust
/// use numrand_core::{RandomEngine, Xoshiro256StarStar};
///
/// let mut a = Xoshiro256StarStar::new(42);
/// let mut b = Xoshiro256StarStar::new(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    state: State256,
}

/// xoshiro256++ : all-purpose variant with a different scrambler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    state: State256,
}

/// xoshiro256+ : fastest variant, intended for floating-point generation.
///
/// The lowest three bits have low linear complexity. Every derivation in
/// [`RandomSource`](crate::RandomSource) consumes high bits, so doubles and
/// floats are unaffected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256Plus {
    state: State256,
}

impl Xoshiro256StarStar {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: State256::from_seed(seed),
        }
    }

    /// Creates an engine from raw state words.
    ///
    /// Returns `None` for the all-zero state, which is a fixed point.
    pub fn from_state(s: [u64; 4]) -> Option<Self> {
        (s != [0; 4]).then_some(Self {
            state: State256 { s },
        })
    }

    /// Returns the raw state words.
    #[inline]
    pub fn state(&self) -> [u64; 4] {
        self.state.s
    }

    /// Advances the state by 2^192 steps.
    pub fn long_jump(&mut self) {
        self.state.jump_with(&LONG_JUMP);
    }
}

impl Xoshiro256PlusPlus {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: State256::from_seed(seed),
        }
    }

    /// Creates an engine from raw state words (`None` for all zero).
    pub fn from_state(s: [u64; 4]) -> Option<Self> {
        (s != [0; 4]).then_some(Self {
            state: State256 { s },
        })
    }

    /// Advances the state by 2^192 steps.
    pub fn long_jump(&mut self) {
        self.state.jump_with(&LONG_JUMP);
    }
}

impl Xoshiro256Plus {
    /// Creates a new engine from `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: State256::from_seed(seed),
        }
    }

    /// Creates an engine from raw state words (`None` for all zero).
    pub fn from_state(s: [u64; 4]) -> Option<Self> {
        (s != [0; 4]).then_some(Self {
            state: State256 { s },
        })
    }

    /// Advances the state by 2^192 steps.
    pub fn long_jump(&mut self) {
        self.state.jump_with(&LONG_JUMP);
    }
}

impl RandomEngine for Xoshiro256StarStar {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result = self.state.s[1]
            .wrapping_mul(5)
            .rotate_left(7)
            .wrapping_mul(9);
        self.state.advance();
        result
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = State256::from_seed(seed);
    }
}

impl RandomEngine for Xoshiro256PlusPlus {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s = &self.state.s;
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);
        self.state.advance();
        result
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = State256::from_seed(seed);
    }
}

impl RandomEngine for Xoshiro256Plus {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result = self.state.s[0].wrapping_add(self.state.s[3]);
        self.state.advance();
        result
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = State256::from_seed(seed);
    }
}

impl SeedableEngine for Xoshiro256StarStar {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl SeedableEngine for Xoshiro256PlusPlus {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl SeedableEngine for Xoshiro256Plus {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl JumpableEngine for Xoshiro256StarStar {
    fn jump(&mut self) {
        self.state.jump_with(&JUMP);
    }
}

impl JumpableEngine for Xoshiro256PlusPlus {
    fn jump(&mut self) {
        self.state.jump_with(&JUMP);
    }
}

impl JumpableEngine for Xoshiro256Plus {
    fn jump(&mut self) {
        self.state.jump_with(&JUMP);
    }
}
