//! Legacy 64-bit xorshift generator.

use super::{RandomEngine, SeedableEngine};

/// State substituted for a zero seed; the all-zero state is a fixed point.
pub const XORSHIFT_ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Marsaglia's 64-bit xorshift generator (shift triple 13/7/17).
///
/// Retained for reproducing sequences produced by older code. It fails
/// several tests of modern statistical batteries (notably on its low bits);
/// new code should use [`Xoshiro256StarStar`](super::Xoshiro256StarStar).
///
/// The seed is used directly as the state. A zero seed is remapped to
/// [`XORSHIFT_ZERO_SEED_STATE`].
///
/// # Examples
///
/// ```rust
/// use numrand_core::{RandomEngine, XorShift};
///
/// let mut engine = XorShift::new(1);
/// assert_eq!(engine.next_u64(), 1082269761);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    /// Creates a new engine from `seed` (zero is remapped).
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::initial_state(seed),
        }
    }

    #[inline]
    fn initial_state(seed: u64) -> u64 {
        if seed == 0 {
            XORSHIFT_ZERO_SEED_STATE
        } else {
            seed
        }
    }
}

impl RandomEngine for XorShift {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn reinitialise(&mut self, seed: u64) {
        self.state = Self::initial_state(seed);
    }
}

impl SeedableEngine for XorShift {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}
