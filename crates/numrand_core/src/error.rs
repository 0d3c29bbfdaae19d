//! Error types for structured error handling.
//!
//! This module provides:
//! - `RandomError`: Errors from bounded generation, configuration parsing
//!   and distribution contracts

use thiserror::Error;

/// Categorised random-generation errors.
///
/// # Variants
/// - `InvalidArgument`: Empty or negative ranges, malformed parameters
/// - `InvalidState`: A contract violated upstream left no valid outcome
///
/// # Examples
/// ```
/// use numrand_core::RandomError;
///
/// let err = RandomError::invalid_argument("max", "must be positive, got 0");
/// assert_eq!(format!("{}", err), "Invalid argument 'max': must be positive, got 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RandomError {
    /// Invalid argument (empty range, negative bound, unknown name).
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// Operation cannot proceed from the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl RandomError {
    /// Shorthand for [`RandomError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        RandomError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, RandomError>;
