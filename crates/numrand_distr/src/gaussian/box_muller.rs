//! Box-Muller Gaussian sampling (Marsaglia polar form).
//!
//! Each call rejection-samples a non-zero point in the unit disc and maps it
//! to two independent standard normal values. Stateless; see
//! [`crate::BoxMullerGaussianSampler`] for the variant that keeps the second
//! value of each pair for the next call.

use numrand_core::{RandomEngine, RandomSource};

use crate::error::{check_gaussian, Result};

/// Returns two independent standard normal samples.
///
/// # Examples
///
/// ```rust
/// use numrand_core::RandomSource;
/// use numrand_distr::gaussian::box_muller;
///
/// let mut rng = RandomSource::from_seed(42);
/// let (a, b) = box_muller::sample(&mut rng);
/// assert!(a.is_finite() && b.is_finite());
/// ```
pub fn sample<E: RandomEngine>(rng: &mut RandomSource<E>) -> (f64, f64) {
    let (x, y, q) = loop {
        let x = 2.0 * rng.next_double() - 1.0;
        let y = 2.0 * rng.next_double() - 1.0;
        let q = x * x + y * y;
        if q <= 1.0 && q != 0.0 {
            break (x, y, q);
        }
    };
    let fac = (-2.0 * q.ln() / q).sqrt();
    (x * fac, y * fac)
}

/// Returns two independent normal samples with the given `mean` and `stddev`.
///
/// # Errors
///
/// `InvalidArgument` if `mean` is not finite or `stddev` is negative or not
/// finite.
pub fn sample_with<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    mean: f64,
    stddev: f64,
) -> Result<(f64, f64)> {
    check_gaussian(mean, stddev)?;
    let (a, b) = sample(rng);
    Ok((mean + stddev * a, mean + stddev * b))
}

/// Fills `buffer` with standard normal samples.
///
/// Pairs are written in order; for an odd length the second value of the
/// final pair is discarded.
pub fn fill<E: RandomEngine>(rng: &mut RandomSource<E>, buffer: &mut [f64]) {
    let mut pairs = buffer.chunks_exact_mut(2);
    for pair in &mut pairs {
        let (a, b) = sample(rng);
        pair[0] = a;
        pair[1] = b;
    }
    if let [last] = pairs.into_remainder() {
        *last = sample(rng).0;
    }
}

/// Fills `buffer` with normal samples of the given `mean` and `stddev`.
///
/// # Errors
///
/// As [`sample_with`]; the buffer is left untouched on error.
pub fn fill_with<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    mean: f64,
    stddev: f64,
    buffer: &mut [f64],
) -> Result<()> {
    check_gaussian(mean, stddev)?;
    fill(rng, buffer);
    for value in buffer.iter_mut() {
        *value = mean + stddev * *value;
    }
    Ok(())
}
