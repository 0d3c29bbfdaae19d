//! # Continuous Uniform Distribution
//!
//! Stateless functions sampling uniform reals from a borrowed
//! [`RandomSource`]. This module works in double precision; [`single`]
//! mirrors it for `f32`.
//!
//! | Function | Interval |
//! |----------|----------|
//! | [`sample`] | [0, 1) |
//! | [`sample_signed`] | (-1, 1) |
//! | [`sample_max`] | [0, max) |
//! | [`sample_signed_max`] | (-max, max) |
//! | [`sample_range`] | [min, max) |
//!
//! Each scalar function has a `fill_*` counterpart writing into a caller
//! supplied buffer; parameters are validated once per call.
//!
//! ## Usage Example
//!
//! ```rust
//! use numrand_core::RandomSource;
//! use numrand_distr::uniform;
//!
//! let mut rng = RandomSource::from_seed(42);
//! let x = uniform::sample_range(&mut rng, -5.0, 15.0).unwrap();
//! assert!((-5.0..15.0).contains(&x));
//!
//! let mut buffer = vec![0.0; 100];
//! uniform::fill_signed_max(&mut rng, 2.5, &mut buffer).unwrap();
//! assert!(buffer.iter().all(|v| v.abs() < 2.5));
//! ```

pub mod single;

use numrand_core::{RandomEngine, RandomSource};

use crate::error::{check_non_negative, check_range, Result};

/// Maps `u` in [0, 1) onto [`min`, `max`) for a validated range of the
/// given `width`.
///
/// Rounding in `min + u * width` can land on `max`; such values are
/// pulled back to the largest double below it.
#[inline]
pub(crate) fn scale_into_range(u: f64, min: f64, max: f64, width: f64) -> f64 {
    let value = min + u * width;
    if value < max || width == 0.0 {
        value
    } else {
        next_below(max)
    }
}

/// Largest double strictly below the finite value `x`.
#[inline]
fn next_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Returns a sample from [0, 1).
#[inline]
pub fn sample<E: RandomEngine>(rng: &mut RandomSource<E>) -> f64 {
    rng.next_double()
}

/// Returns a sample from (-1, 1).
///
/// The magnitude comes from `next_double()`; the sign is flipped with
/// probability one half via `next_bool()`.
#[inline]
pub fn sample_signed<E: RandomEngine>(rng: &mut RandomSource<E>) -> f64 {
    let magnitude = rng.next_double();
    if rng.next_bool() {
        -magnitude
    } else {
        magnitude
    }
}

/// Returns a sample from [0, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
#[inline]
pub fn sample_max<E: RandomEngine>(rng: &mut RandomSource<E>, max: f64) -> Result<f64> {
    check_non_negative("max", max)?;
    Ok(rng.next_double() * max)
}

/// Returns a sample from (-`max`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
#[inline]
pub fn sample_signed_max<E: RandomEngine>(rng: &mut RandomSource<E>, max: f64) -> Result<f64> {
    check_non_negative("max", max)?;
    Ok(sample_signed(rng) * max)
}

/// Returns a sample from [`min`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if either bound is not finite, `max < min`, or
/// `max - min` overflows.
#[inline]
pub fn sample_range<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    min: f64,
    max: f64,
) -> Result<f64> {
    check_range(min, max)?;
    Ok(scale_into_range(rng.next_double(), min, max, max - min))
}

/// Fills `buffer` with samples from [0, 1).
pub fn fill<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = rng.next_double();
    }
}

/// Fills `buffer` with samples from (-1, 1).
pub fn fill_signed<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = sample_signed(rng);
    }
}

/// Fills `buffer` with samples from [0, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite; the buffer is left
/// untouched.
pub fn fill_max<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    max: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_non_negative("max", max)?;
    for value in buffer.iter_mut() {
        *value = rng.next_double() * max;
    }
    Ok(())
}

/// Fills `buffer` with samples from (-`max`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
pub fn fill_signed_max<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    max: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_non_negative("max", max)?;
    for value in buffer.iter_mut() {
        *value = sample_signed(rng) * max;
    }
    Ok(())
}

/// Fills `buffer` with samples from [`min`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if either bound is not finite, `max < min`, or
/// `max - min` overflows.
pub fn fill_range<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    min: f64,
    max: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_range(min, max)?;
    let width = max - min;
    for value in buffer.iter_mut() {
        *value = scale_into_range(rng.next_double(), min, max, width);
    }
    Ok(())
}
