//! # Pseudo-Random Engines
//!
//! Raw bit generators producing 32/64-bit integers from a 64-bit seed.
//!
//! ## Engine Contract
//!
//! Every engine implements [`RandomEngine`]:
//! - `next_u64()` advances the state and returns 64 raw bits
//! - `next_u32()` returns 32 raw bits (the high half of a `next_u64()` draw
//!   unless the engine overrides it)
//! - `reinitialise(seed)` resets the state exactly as construction would
//!
//! State transitions are pure functions of the prior state, so a given seed
//! always reproduces the same sequence.
//!
//! ## Variants
//!
//! | Engine | State | Notes |
//! |--------|-------|-------|
//! | [`XorShift`] | 64 bit | Legacy 13/7/17 recurrence; kept for compatibility |
//! | [`SplitMix64`] | 64 bit | Seed expander; also a usable engine |
//! | [`Xoshiro256StarStar`] | 256 bit | Default engine |
//! | [`Xoshiro256PlusPlus`] | 256 bit | All-purpose alternative |
//! | [`Xoshiro256Plus`] | 256 bit | Fastest; low bits weak, high bits fine for doubles |
//! | [`Xoshiro512StarStar`] | 512 bit | Larger state for many parallel streams |
//! | [`WyRand`] | 64 bit | 128-bit multiply mixer |
//!
//! None of these engines is cryptographically secure.

mod splitmix;
mod wyrand;
mod xorshift;
mod xoshiro256;
mod xoshiro512;

pub use splitmix::SplitMix64;
pub use wyrand::WyRand;
pub use xorshift::{XorShift, XORSHIFT_ZERO_SEED_STATE};
pub use xoshiro256::{Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar};
pub use xoshiro512::Xoshiro512StarStar;

/// A deterministic bit generator.
///
/// The trait is object-safe, so engines may be selected at run time as
/// `Box<dyn RandomEngine>` (see [`crate::EngineKind::create`]).
pub trait RandomEngine {
    /// Advances the state and returns 64 random bits.
    fn next_u64(&mut self) -> u64;

    /// Returns 32 random bits.
    ///
    /// The default takes the high half of a 64-bit draw; the high bits of
    /// every engine here are at least as good as the low bits.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Resets the engine to the state it would have if constructed from `seed`.
    fn reinitialise(&mut self, seed: u64);
}

/// Engines constructible from a single 64-bit seed.
pub trait SeedableEngine: RandomEngine + Sized {
    /// Creates a new engine initialised from `seed`.
    fn from_seed(seed: u64) -> Self;
}

/// Engines able to skip ahead by a fixed, very large number of steps.
///
/// Jumping partitions one sequence into non-overlapping sub-sequences,
/// which is how the parallel fill routines give each chunk its own stream.
pub trait JumpableEngine: SeedableEngine + Clone + Send {
    /// Advances the state as if `next_u64()` had been called 2^128 times.
    fn jump(&mut self);
}

impl<E: RandomEngine + ?Sized> RandomEngine for Box<E> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn reinitialise(&mut self, seed: u64) {
        (**self).reinitialise(seed)
    }
}

/// Expands a 64-bit seed into `N` state words with SplitMix64.
///
/// SplitMix64 is a bijection over a counter, so consecutive outputs are
/// never all zero and the expanded state is always valid for xoshiro.
pub(crate) fn expand_seed<const N: usize>(seed: u64) -> [u64; N] {
    let mut mixer = SplitMix64::new(seed);
    let mut state = [0u64; N];
    for word in state.iter_mut() {
        *word = mixer.next_u64();
    }
    state
}

#[cfg(test)]
mod tests;
