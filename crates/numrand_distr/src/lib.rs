//! # numrand_distr: Probability Distributions over RandomSource
//!
//! ## Layer 2 (Distributions) Role
//!
//! numrand_distr builds on numrand_core, providing:
//! - Continuous uniform sampling in double and single precision (`uniform`)
//! - Gaussian sampling via Ziggurat and Box-Muller (`gaussian`)
//! - Categorical sampling, sampling without replacement and Bernoulli
//!   trials (`discrete`)
//! - Stateful samplers owning their source (`sampler`)
//! - Deterministic parallel bulk fills over jumped streams (`parallel`)
//! - Error types: [`DistributionError`] (`error`)
//!
//! Free functions borrow a [`RandomSource`](numrand_core::RandomSource) and
//! never own it; samplers own one.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numrand_core::RandomSource;
//! use numrand_distr::gaussian::ziggurat;
//! use numrand_distr::{uniform, BoxMullerGaussianSampler, Sampler};
//!
//! let mut rng = RandomSource::from_seed(2024);
//!
//! let u = uniform::sample_range(&mut rng, -1.0, 1.0).unwrap();
//! let z = ziggurat::sample_with(&mut rng, 100.0, 15.0).unwrap();
//! # let _ = (u, z);
//!
//! let mut sampler = BoxMullerGaussianSampler::with_seed(0.0, 1.0, 7).unwrap();
//! let mut noise = vec![0.0; 64];
//! sampler.sample_fill(&mut noise);
//! ```
//!
//! ## Thread Safety
//!
//! The Ziggurat tables are built once behind a `OnceLock` and read freely
//! from any thread. Sources and samplers are single-owner mutable state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod discrete;
pub mod error;
pub mod gaussian;
pub mod parallel;
pub mod sampler;
pub mod uniform;

pub use discrete::DiscreteDistribution;
pub use error::{DistributionError, Result};
pub use sampler::{
    BoxMullerGaussianSampler, DiscreteDistributionSampler, Sampler, UniformDistributionSampler,
    ZigguratGaussianSampler,
};
