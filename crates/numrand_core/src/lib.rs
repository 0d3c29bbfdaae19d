//! # numrand_core: Random Engines and the RandomSource Facade
//!
//! ## Layer 1 (Foundation) Role
//!
//! numrand_core is the bottom layer of the workspace, providing:
//! - Raw bit generators behind the [`RandomEngine`] trait (`engine`)
//! - The [`RandomSource`] facade deriving doubles, floats, booleans and
//!   bounded integers from raw engine output (`source`)
//! - Process-wide entropy seeding (`seed`)
//! - Run-time engine selection via [`SourceConfig`] (`config`)
//! - Span reductions used by the distribution layer (`math::span`)
//! - Error types: [`RandomError`] (`error`)
//!
//! ## Determinism
//!
//! Every engine is a pure function of its seed: two engines of the same
//! variant constructed from the same seed produce identical sequences, and
//! [`RandomSource::reinitialise`] restores that guarantee for an existing
//! facade (bit caches included).
//!
//! ## Usage Examples
//!
//! ```rust
//! use numrand_core::RandomSource;
//!
//! let mut rng = RandomSource::from_seed(12345);
//!
//! let u = rng.next_double();
//! assert!((0.0..1.0).contains(&u));
//!
//! let die = rng.next_range(1, 7).unwrap();
//! assert!((1..7).contains(&die));
//! ```
//!
//! Selecting an engine at run time:
//!
//! ```rust
//! use numrand_core::{EngineKind, SourceConfig};
//!
//! let config = SourceConfig::builder()
//!     .engine(EngineKind::WyRand)
//!     .seed(7)
//!     .build();
//! let mut rng = config.create_source();
//! let _ = rng.next_u64();
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`SourceConfig`] and [`EngineKind`]
//!
//! ## Thread Safety
//!
//! Engines and sources are plain mutable state. They are `Send` but every
//! call mutates them, so share one across threads only behind external
//! synchronisation; prefer one source per thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod seed;
pub mod source;

pub use config::{EngineKind, SourceConfig, SourceConfigBuilder};
pub use engine::{
    JumpableEngine, RandomEngine, SeedableEngine, SplitMix64, WyRand, XorShift, Xoshiro256Plus,
    Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512StarStar,
};
pub use error::{RandomError, Result};
pub use seed::entropy_seed;
pub use source::{DefaultRandomSource, RandomSource};
