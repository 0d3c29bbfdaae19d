//! Process-wide entropy seeding.
//!
//! The first request reads 64 bits from the operating system (`OsRng`) and
//! seeds a shared [`Xoshiro256StarStar`]; every request after that draws
//! the next word from it under a lock. Seeds handed to concurrently created
//! sources are therefore distinct without hitting the OS each time.

use std::sync::{Mutex, OnceLock};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::engine::{RandomEngine, Xoshiro256StarStar};

static SEED_GENERATOR: OnceLock<Mutex<Xoshiro256StarStar>> = OnceLock::new();

fn seed_generator() -> &'static Mutex<Xoshiro256StarStar> {
    SEED_GENERATOR.get_or_init(|| {
        let root = OsRng.next_u64();
        tracing::debug!(root_seed = root, "initialised entropy seed generator");
        Mutex::new(Xoshiro256StarStar::new(root))
    })
}

/// Returns a fresh seed derived from process entropy.
///
/// The seed is logged at `debug` level so a run can be reproduced by
/// passing it back explicitly.
///
/// ```rust
/// use numrand_core::entropy_seed;
///
/// let a = entropy_seed();
/// let b = entropy_seed();
/// assert_ne!(a, b);
/// ```
pub fn entropy_seed() -> u64 {
    // A panic while holding the lock cannot leave the engine state invalid.
    let mut generator = seed_generator()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let seed = generator.next_u64();
    tracing::debug!(seed, "derived seed from process entropy");
    seed
}
