//! # Gaussian Distribution
//!
//! Two standard normal generators over a borrowed [`RandomSource`]:
//!
//! - [`ziggurat`]: table-driven rejection sampling, one 64-bit draw per
//!   sample in about 98% of calls
//! - [`box_muller`]: polar Box-Muller, two samples per accepted point in
//!   the unit disc
//!
//! Both expose `sample`, `sample_with(mean, stddev)`, `fill` and
//! `fill_with`. Stateful wrappers live in [`crate::sampler`].
//!
//! [`RandomSource`]: numrand_core::RandomSource

pub mod box_muller;
pub mod ziggurat;
