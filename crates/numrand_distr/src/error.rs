//! Error types for distribution sampling.
//!
//! This module provides:
//! - `DistributionError`: Errors from parameter validation and sampling

use numrand_core::RandomError;
use thiserror::Error;

/// Distribution errors.
///
/// # Variants
/// - `InvalidArgument`: Malformed parameters (negative max, inverted range,
///   non-finite or negative probabilities, `k > n`, length mismatch)
/// - `InvalidState`: No outcome can be produced from the current state
/// - `Source`: Error raised by the underlying random source
///
/// # Examples
/// ```
/// use numrand_distr::DistributionError;
///
/// let err = DistributionError::invalid_argument("stddev", "must be non-negative, got -1");
/// assert!(format!("{}", err).contains("stddev"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Invalid distribution parameter.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// Sampling cannot proceed from the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Error from the random source.
    #[error(transparent)]
    Source(#[from] RandomError),
}

impl DistributionError {
    /// Shorthand for [`DistributionError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        DistributionError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<DistributionError> for RandomError {
    fn from(err: DistributionError) -> Self {
        match err {
            DistributionError::InvalidArgument { name, reason } => {
                RandomError::InvalidArgument { name, reason }
            }
            DistributionError::InvalidState(msg) => RandomError::InvalidState(msg),
            DistributionError::Source(inner) => inner,
        }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DistributionError::invalid_argument(
            name,
            format!("must be finite and non-negative, got {}", value),
        ))
    }
}

/// Checks that `mean` is finite and `stddev` finite and non-negative.
pub(crate) fn check_gaussian(mean: f64, stddev: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(DistributionError::invalid_argument(
            "mean",
            format!("must be finite, got {}", mean),
        ));
    }
    check_non_negative("stddev", stddev)
}

/// Checks that `min` and `max` are finite, `max >= min` and `max - min`
/// does not overflow.
pub(crate) fn check_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DistributionError::invalid_argument(
            "max",
            format!("range bounds must be finite, got [{}, {})", min, max),
        ));
    }
    if max < min {
        return Err(DistributionError::invalid_argument(
            "max",
            format!("must not be less than min ({} < {})", max, min),
        ));
    }
    if !(max - min).is_finite() {
        return Err(width_overflow(min, max));
    }
    Ok(())
}

/// Single-precision [`check_range`]; the width must be finite as an `f32`.
pub(crate) fn check_range_f32(min: f32, max: f32) -> Result<()> {
    check_range(f64::from(min), f64::from(max))?;
    if !(max - min).is_finite() {
        return Err(width_overflow(f64::from(min), f64::from(max)));
    }
    Ok(())
}

fn width_overflow(min: f64, max: f64) -> DistributionError {
    DistributionError::invalid_argument(
        "max",
        format!("range width overflows, got [{}, {})", min, max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_converts_both_ways() {
        let source = RandomError::invalid_argument("max", "must be positive, got 0");
        let err: DistributionError = source.clone().into();
        assert_eq!(err.to_string(), source.to_string());

        let back: RandomError = err.into();
        assert_eq!(back, source);

        let state: RandomError = DistributionError::InvalidState("empty".to_string()).into();
        assert_eq!(state, RandomError::InvalidState("empty".to_string()));
    }

    #[test]
    fn test_checks() {
        assert!(check_non_negative("max", 0.0).is_ok());
        assert!(check_non_negative("max", -0.5).is_err());
        assert!(check_non_negative("max", f64::NAN).is_err());
        assert!(check_non_negative("max", f64::INFINITY).is_err());

        assert!(check_gaussian(0.0, 0.0).is_ok());
        assert!(check_gaussian(f64::NAN, 1.0).is_err());
        assert!(check_gaussian(0.0, -1.0).is_err());

        assert!(check_range(-1.0, 1.0).is_ok());
        assert!(check_range(2.0, 2.0).is_ok());
        assert!(check_range(2.0, 1.0).is_err());
        assert!(check_range(f64::NEG_INFINITY, 1.0).is_err());
        assert!(check_range(-f64::MAX, f64::MAX).is_err());
        assert!(check_range(0.0, f64::MAX).is_ok());

        assert!(check_range_f32(-1.0, 1.0).is_ok());
        assert!(check_range_f32(-f32::MAX, f32::MAX).is_err());
        assert!(check_range_f32(1.0, 0.0).is_err());
    }
}
