//! The [`RandomSource`] facade.
//!
//! Wraps one engine and derives every value type the distribution layer
//! needs from its raw bits. All derivations consume the high bits of a
//! 64-bit draw, which are the strongest bits of every engine in this crate.

use crate::engine::{RandomEngine, SeedableEngine, Xoshiro256StarStar};
use crate::error::{RandomError, Result};
use crate::seed::entropy_seed;

/// 2^-53, the spacing of the doubles produced by [`RandomSource::next_double`].
pub const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, the spacing of the floats produced by [`RandomSource::next_float`].
pub const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Random source with the default engine.
pub type DefaultRandomSource = RandomSource<Xoshiro256StarStar>;

/// Facade deriving doubles, floats, booleans and bounded integers from a
/// raw engine.
///
/// The source owns its engine exclusively. It also caches 32 bits for
/// [`next_bool`](Self::next_bool) so a single engine draw serves 32 calls.
///
/// # Examples
///
/// ```rust
/// use numrand_core::{RandomSource, XorShift};
///
/// // Default engine
/// let mut rng = RandomSource::from_seed(42);
/// assert!(rng.next_double() < 1.0);
///
/// // Explicit engine
/// let mut legacy = RandomSource::new(XorShift::new(42));
/// assert!(legacy.next_below(10).unwrap() < 10);
/// ```
#[derive(Clone, Debug)]
pub struct RandomSource<E = Xoshiro256StarStar> {
    /// The underlying engine.
    engine: E,
    /// Cached bits for `next_bool`.
    bit_buffer: u32,
    /// Number of unconsumed bits in `bit_buffer`.
    bits_left: u32,
}

impl RandomSource<Xoshiro256StarStar> {
    /// Creates a source over the default engine initialised with `seed`.
    ///
    /// ```rust
    /// use numrand_core::RandomSource;
    ///
    /// let mut a = RandomSource::from_seed(12345);
    /// let mut b = RandomSource::from_seed(12345);
    /// assert_eq!(a.next_double(), b.next_double());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Xoshiro256StarStar::new(seed))
    }

    /// Creates a source over the default engine seeded from process entropy.
    pub fn from_entropy() -> Self {
        Self::from_seed(entropy_seed())
    }
}

impl<E: SeedableEngine> RandomSource<E> {
    /// Creates a source over an engine of type `E` initialised with `seed`.
    ///
    /// ```rust
    /// use numrand_core::{RandomSource, WyRand};
    ///
    /// let mut rng = RandomSource::<WyRand>::seeded(7);
    /// let _ = rng.next_u64();
    /// ```
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self::new(E::from_seed(seed))
    }
}

impl<E: RandomEngine> RandomSource<E> {
    /// Wraps an existing engine.
    #[inline]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            bit_buffer: 0,
            bits_left: 0,
        }
    }

    /// Returns a shared reference to the engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns a mutable reference to the engine.
    ///
    /// Drawing from the engine directly bypasses the boolean bit cache,
    /// which stays valid.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the source and returns the engine.
    #[inline]
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Re-seeds the engine and discards cached bits.
    ///
    /// Afterwards the source behaves exactly like one freshly constructed
    /// from `seed`.
    pub fn reinitialise(&mut self, seed: u64) {
        self.engine.reinitialise(seed);
        self.bit_buffer = 0;
        self.bits_left = 0;
    }

    /// Returns 32 raw random bits.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// Returns 64 raw random bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Returns a random integer in [0, `i32::MAX`].
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        (self.engine.next_u64() >> 33) as i32
    }

    /// Returns a random integer in [0, `max`).
    ///
    /// Unbiased: candidates of `ceil(log2(max))` high bits are drawn until
    /// one falls below `max`, so fewer than two draws are needed on average.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max <= 0` (empty range).
    pub fn next_below(&mut self, max: i32) -> Result<i32> {
        if max <= 0 {
            return Err(RandomError::invalid_argument(
                "max",
                format!("must be positive, got {}", max),
            ));
        }
        Ok(self.bounded(max as u64) as i32)
    }

    /// Returns a random integer in [`lo`, `hi`).
    ///
    /// The full `i32` span is supported; `hi - lo` is computed in 64 bits.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `hi <= lo` (empty or inverted range).
    pub fn next_range(&mut self, lo: i32, hi: i32) -> Result<i32> {
        if hi <= lo {
            return Err(RandomError::invalid_argument(
                "hi",
                format!("must be greater than lo ({} <= {})", hi, lo),
            ));
        }
        let span = (i64::from(hi) - i64::from(lo)) as u64;
        Ok((i64::from(lo) + self.bounded(span) as i64) as i32)
    }

    /// Returns a random integer in [0, `max`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max == 0`.
    pub fn next_u64_below(&mut self, max: u64) -> Result<u64> {
        if max == 0 {
            return Err(RandomError::invalid_argument("max", "must be positive, got 0"));
        }
        Ok(self.bounded(max))
    }

    /// Bitmask rejection over the high bits. Requires `n >= 1`.
    #[inline]
    fn bounded(&mut self, n: u64) -> u64 {
        if n == 1 {
            return 0;
        }
        let bits = 64 - (n - 1).leading_zeros();
        loop {
            let candidate = self.engine.next_u64() >> (64 - bits);
            if candidate < n {
                return candidate;
            }
        }
    }

    /// Returns a random double in [0, 1).
    ///
    /// The top 53 bits of a 64-bit draw scaled by 2^-53; the result is
    /// never exactly 1.0.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        (self.engine.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Returns a random double in the open interval (0, 1).
    ///
    /// Redraws on exactly 0.0 (probability 2^-53 per draw). Needed wherever
    /// the value is passed to `ln`.
    #[inline]
    pub fn next_double_nonzero(&mut self) -> f64 {
        loop {
            let x = self.next_double();
            if x != 0.0 {
                return x;
            }
        }
    }

    /// Returns a random float in [0, 1) built from 24 high bits.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        (self.engine.next_u64() >> 40) as f32 * FLOAT_UNIT
    }

    /// Returns a random float in the open interval (0, 1).
    #[inline]
    pub fn next_float_nonzero(&mut self) -> f32 {
        loop {
            let x = self.next_float();
            if x != 0.0 {
                return x;
            }
        }
    }

    /// Returns a random boolean.
    ///
    /// Consumes one bit of a cached 32-bit draw, refilling when exhausted.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        if self.bits_left == 0 {
            self.bit_buffer = self.engine.next_u32();
            self.bits_left = 32;
        }
        let bit = self.bit_buffer & 1;
        self.bit_buffer >>= 1;
        self.bits_left -= 1;
        bit == 1
    }

    /// Returns a random byte.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        (self.engine.next_u64() >> 56) as u8
    }

    /// Fills `dest` with random bytes, eight per engine draw (little endian).
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.engine.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Lets `rand` and `rand_distr` distributions draw from these engines.
impl<E: RandomEngine> rand::RngCore for RandomSource<E> {
    fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RandomSource::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        RandomSource::fill_bytes(self, dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{WyRand, XorShift};
    use proptest::prelude::*;

    #[test]
    fn test_next_double_uses_top_53_bits() {
        let mut rng = RandomSource::from_seed(42);
        let mut engine = Xoshiro256StarStar::new(42);
        for _ in 0..100 {
            let expected = (engine.next_u64() >> 11) as f64 / 9007199254740992.0;
            assert_eq!(rng.next_double(), expected);
        }
    }

    #[test]
    fn test_next_double_never_one() {
        // An all-ones word is the worst case for the 53-bit derivation.
        struct AllOnes;
        impl RandomEngine for AllOnes {
            fn next_u64(&mut self) -> u64 {
                u64::MAX
            }
            fn reinitialise(&mut self, _seed: u64) {}
        }
        let mut rng = RandomSource::new(AllOnes);
        let x = rng.next_double();
        assert!(x < 1.0);
        assert_eq!(x, 1.0 - DOUBLE_UNIT);
        let f = rng.next_float();
        assert!(f < 1.0);
        assert_eq!(f, 1.0 - FLOAT_UNIT);
    }

    #[test]
    fn test_next_double_nonzero_skips_zero() {
        // Emits zero twice, then a small non-zero word.
        struct ZerosFirst(u32);
        impl RandomEngine for ZerosFirst {
            fn next_u64(&mut self) -> u64 {
                self.0 += 1;
                if self.0 <= 2 {
                    0
                } else {
                    1 << 40
                }
            }
            fn reinitialise(&mut self, _seed: u64) {
                self.0 = 0;
            }
        }
        let mut rng = RandomSource::new(ZerosFirst(0));
        assert_eq!(rng.next_double_nonzero(), f64::from(FLOAT_UNIT));

        rng.reinitialise(0);
        assert_eq!(rng.next_float_nonzero(), FLOAT_UNIT);
    }

    #[test]
    fn test_next_int_range() {
        let mut rng = RandomSource::from_seed(1);
        for _ in 0..10_000 {
            assert!(rng.next_int() >= 0);
        }
    }

    #[test]
    fn test_next_below_rejects_empty_range() {
        let mut rng = RandomSource::from_seed(1);
        assert!(matches!(
            rng.next_below(0),
            Err(RandomError::InvalidArgument { name: "max", .. })
        ));
        assert!(rng.next_below(-5).is_err());
        assert!(rng.next_u64_below(0).is_err());
        assert_eq!(rng.next_below(1).unwrap(), 0);
    }

    #[test]
    fn test_next_range_rejects_inverted_range() {
        let mut rng = RandomSource::from_seed(1);
        assert!(rng.next_range(5, 5).is_err());
        assert!(rng.next_range(5, 3).is_err());
    }

    #[test]
    fn test_next_range_full_i32_span() {
        let mut rng = RandomSource::from_seed(8);
        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..1000 {
            let v = rng.next_range(i32::MIN, i32::MAX).unwrap();
            assert!(v < i32::MAX);
            saw_negative |= v < 0;
            saw_positive |= v > 0;
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn test_next_below_uniform_counts() {
        let mut rng = RandomSource::from_seed(99);
        let mut counts = [0usize; 7];
        let n = 700_000;
        for _ in 0..n {
            counts[rng.next_below(7).unwrap() as usize] += 1;
        }
        for &c in &counts {
            let freq = c as f64 / n as f64;
            assert!((freq - 1.0 / 7.0).abs() < 0.005, "frequency {}", freq);
        }
    }

    #[test]
    fn test_next_bool_consumes_cached_bits_low_first() {
        let mut rng = RandomSource::from_seed(3);
        let mut engine = Xoshiro256StarStar::new(3);
        let word = engine.next_u32();
        for bit in 0..32 {
            assert_eq!(rng.next_bool(), (word >> bit) & 1 == 1);
        }
        // The 33rd call refills from the next engine draw.
        let word = engine.next_u32();
        assert_eq!(rng.next_bool(), word & 1 == 1);
    }

    #[test]
    fn test_next_bool_balance() {
        let mut rng = RandomSource::new(XorShift::new(11));
        let n = 1_000_000;
        let trues = (0..n).filter(|_| rng.next_bool()).count();
        let freq = trues as f64 / n as f64;
        assert!((freq - 0.5).abs() < 0.005, "frequency {}", freq);
    }

    #[test]
    fn test_reinitialise_replays_sequence() {
        let mut rng = RandomSource::from_seed(2024);
        let record = |rng: &mut DefaultRandomSource| -> Vec<u64> {
            (0..100)
                .map(|i| {
                    if i % 2 == 0 {
                        rng.next_double().to_bits()
                    } else {
                        u64::from(rng.next_bool())
                    }
                })
                .collect()
        };
        let first = record(&mut rng);
        rng.reinitialise(2024);
        let second = record(&mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = RandomSource::<WyRand>::seeded(5);
        let mut engine = WyRand::new(5);
        let mut bytes = [0u8; 11];
        rng.fill_bytes(&mut bytes);
        let first = engine.next_u64().to_le_bytes();
        let second = engine.next_u64().to_le_bytes();
        assert_eq!(&bytes[..8], &first);
        assert_eq!(&bytes[8..], &second[..3]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_next_range_within_bounds(seed in any::<u64>(), lo in -1000i32..1000, width in 1i32..5000) {
            let mut rng = RandomSource::from_seed(seed);
            let hi = lo + width;
            for _ in 0..200 {
                let v = rng.next_range(lo, hi).unwrap();
                prop_assert!(v >= lo && v < hi, "{} not in [{}, {})", v, lo, hi);
            }
        }

        #[test]
        fn prop_unit_interval(seed in any::<u64>()) {
            let mut rng = RandomSource::from_seed(seed);
            for _ in 0..1000 {
                let d = rng.next_double();
                prop_assert!((0.0..1.0).contains(&d));
                let nz = rng.next_double_nonzero();
                prop_assert!(nz > 0.0 && nz < 1.0);
                let f = rng.next_float();
                prop_assert!((0.0..1.0).contains(&f));
            }
        }
    }
}
