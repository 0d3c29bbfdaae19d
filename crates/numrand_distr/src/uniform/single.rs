//! Single-precision uniform sampling.
//!
//! Same intervals and validation as the parent module. The signed variants
//! take the magnitude from bits 40..63 of one engine draw and copy bit 39
//! into the IEEE-754 sign bit, so each signed sample costs a single draw.

use numrand_core::source::FLOAT_UNIT;
use numrand_core::{RandomEngine, RandomSource};

use crate::error::{check_non_negative, check_range_f32, Result};

const SIGN_MASK: u32 = 0x8000_0000;

/// Single-precision counterpart of the parent's range mapping.
#[inline]
fn scale_into_range(u: f32, min: f32, max: f32, width: f32) -> f32 {
    let value = min + u * width;
    if value < max || width == 0.0 {
        value
    } else {
        next_below(max)
    }
}

/// Largest float strictly below the finite value `x`.
#[inline]
fn next_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Magnitude in [0, 1) with a random sign bit, from one 64-bit draw.
#[inline]
fn signed_unit(word: u64) -> f32 {
    let magnitude = (word >> 40) as f32 * FLOAT_UNIT;
    let sign = ((word >> 8) as u32) & SIGN_MASK;
    f32::from_bits(magnitude.to_bits() | sign)
}

/// Returns a sample from [0, 1).
#[inline]
pub fn sample<E: RandomEngine>(rng: &mut RandomSource<E>) -> f32 {
    rng.next_float()
}

/// Returns a sample from (-1, 1).
#[inline]
pub fn sample_signed<E: RandomEngine>(rng: &mut RandomSource<E>) -> f32 {
    signed_unit(rng.next_u64())
}

/// Returns a sample from [0, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
#[inline]
pub fn sample_max<E: RandomEngine>(rng: &mut RandomSource<E>, max: f32) -> Result<f32> {
    check_non_negative("max", f64::from(max))?;
    Ok(rng.next_float() * max)
}

/// Returns a sample from (-`max`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
#[inline]
pub fn sample_signed_max<E: RandomEngine>(rng: &mut RandomSource<E>, max: f32) -> Result<f32> {
    check_non_negative("max", f64::from(max))?;
    Ok(signed_unit(rng.next_u64()) * max)
}

/// Returns a sample from [`min`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if either bound is not finite, `max < min`, or the
/// width overflows `f32`.
#[inline]
pub fn sample_range<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    min: f32,
    max: f32,
) -> Result<f32> {
    check_range_f32(min, max)?;
    Ok(scale_into_range(rng.next_float(), min, max, max - min))
}

/// Fills `buffer` with samples from [0, 1).
pub fn fill<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f32]) {
    for value in buffer.iter_mut() {
        *value = rng.next_float();
    }
}

/// Fills `buffer` with samples from (-1, 1).
pub fn fill_signed<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f32]) {
    for value in buffer.iter_mut() {
        *value = signed_unit(rng.next_u64());
    }
}

/// Fills `buffer` with samples from [0, `max`).
///
/// # Errors
///
/// `InvalidArgument` if `max` is negative or not finite.
pub fn fill_max<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    max: f32,
    buffer: &mut [f32],
) -> Result<()> {
    check_non_negative("max", f64::from(max))?;
    for value in buffer.iter_mut() {
        *value = rng.next_float() * max;
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
    max: f32,
    buffer: &mut [f32],
) -> Result<()> {
    check_non_negative("max", f64::from(max))?;
    for value in buffer.iter_mut() {
        *value = signed_unit(rng.next_u64()) * max;
    }
    Ok(())
}

/// Fills `buffer` with samples from [`min`, `max`).
///
/// # Errors
///
/// `InvalidArgument` if either bound is not finite, `max < min`, or the
/// width overflows `f32`.
pub fn fill_range<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    min: f32,
    max: f32,
    buffer: &mut [f32],
) -> Result<()> {
    check_range_f32(min, max)?;
    let width = max - min;
    for value in buffer.iter_mut() {
        *value = scale_into_range(rng.next_float(), min, max, width);
    }
    Ok(())
}
