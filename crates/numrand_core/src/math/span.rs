//! Span reductions over slices of floats.
//!
//! Plain loops generic over [`num_traits::Float`]; discrete normalisation
//! and the sample statistics reported by the CLI are built on these.

use num_traits::Float;

/// Sum of all elements (0 for an empty slice).
///
/// ```rust
/// use numrand_core::math::span::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
/// ```
#[inline]
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Multiplies every element by `factor` in place.
#[inline]
pub fn multiply<T: Float>(values: &mut [T], factor: T) {
    for v in values.iter_mut() {
        *v = *v * factor;
    }
}

/// Minimum and maximum, or `None` for an empty slice.
///
/// NaN elements are ignored unless every element is NaN.
pub fn min_max<T: Float>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Mean and population variance, or `None` for an empty slice.
///
/// Two passes: the variance is accumulated around the computed mean.
pub fn mean_variance<T: Float>(values: &[T]) -> Option<(T, T)> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let mean = sum(values) / n;
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mean;
        acc + d * d
    });
    Some((mean, sum_sq / n))
}
