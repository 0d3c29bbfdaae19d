//! # Discrete Distribution
//!
//! A categorical distribution over a finite set of integer labels, plus
//! uniform sampling without replacement and Bernoulli trials.
//!
//! ## Normalisation
//!
//! Probabilities must be finite and non-negative. On construction they are
//! normalised against [`PROBABILITY_TOLERANCE`]:
//!
//! - sum <= tolerance: every outcome gets `1/n`
//! - `|1 - sum|` >= tolerance: every entry is divided by the sum
//! - otherwise the entries are kept as given
//!
//! ## Usage Example
//!
//! ```rust
//! use numrand_core::RandomSource;
//! use numrand_distr::discrete::{self, DiscreteDistribution};
//!
//! let dist = DiscreteDistribution::with_labels(&[1.0, 3.0], &[10, 20]).unwrap();
//! assert_eq!(dist.probabilities(), &[0.25, 0.75]);
//!
//! let mut rng = RandomSource::from_seed(42);
//! let label = discrete::sample(&mut rng, &dist).unwrap();
//! assert!(label == 10 || label == 20);
//! ```

use std::collections::HashSet;

use numrand_core::math::span;
use numrand_core::{RandomEngine, RandomSource};

use crate::error::{DistributionError, Result};

/// Sums within this distance of 1 are treated as normalised; sums at or
/// below it are treated as zero.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Categorical distribution over labelled outcomes.
///
/// Probabilities are normalised and index-aligned with the labels. Labels
/// are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteDistribution {
    probabilities: Vec<f64>,
    labels: Vec<i32>,
}

impl DiscreteDistribution {
    /// Creates a distribution with labels `0..n`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `probabilities` is empty or contains a negative
    /// or non-finite entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrand_distr::DiscreteDistribution;
    ///
    /// let dist = DiscreteDistribution::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(dist.probabilities(), &[0.25; 4]);
    /// assert_eq!(dist.labels(), &[0, 1, 2, 3]);
    /// ```
    pub fn new(probabilities: &[f64]) -> Result<Self> {
        let n = i32::try_from(probabilities.len()).map_err(|_| {
            DistributionError::invalid_argument(
                "probabilities",
                format!("too many outcomes: {}", probabilities.len()),
            )
        })?;
        let labels: Vec<i32> = (0..n).collect();
        Self::with_labels(probabilities, &labels)
    }

    /// Creates a distribution with explicit labels.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the slices differ in length, are empty, contain
    /// a negative or non-finite probability, or repeat a label.
    pub fn with_labels(probabilities: &[f64], labels: &[i32]) -> Result<Self> {
        if probabilities.len() != labels.len() {
            return Err(DistributionError::invalid_argument(
                "labels",
                format!(
                    "length {} does not match {} probabilities",
                    labels.len(),
                    probabilities.len()
                ),
            ));
        }
        if probabilities.is_empty() {
            return Err(DistributionError::invalid_argument(
                "probabilities",
                "at least one outcome is required",
            ));
        }
        if let Some((i, p)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(DistributionError::invalid_argument(
                "probabilities",
                format!("entry {} must be finite and non-negative, got {}", i, p),
            ));
        }
        let mut seen = HashSet::with_capacity(labels.len());
        if let Some(label) = labels.iter().find(|&&label| !seen.insert(label)) {
            return Err(DistributionError::invalid_argument(
                "labels",
                format!("duplicate label {}", label),
            ));
        }

        let mut probabilities = probabilities.to_vec();
        normalise(&mut probabilities);
        Ok(Self {
            probabilities,
            labels: labels.to_vec(),
        })
    }

    /// Normalised probabilities, index-aligned with [`labels`](Self::labels).
    #[inline]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Outcome labels.
    #[inline]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Number of outcomes.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no outcomes; never true for a constructed distribution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Probability of `label`, or `None` if it is not an outcome.
    pub fn probability_of(&self, label: i32) -> Option<f64> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .map(|i| self.probabilities[i])
    }

    /// Returns a new distribution without the outcome `label`, with the
    /// remaining probabilities renormalised. `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `label` is not an outcome or is the only one.
    pub fn remove_outcome(&self, label: i32) -> Result<Self> {
        let index = self
            .labels
            .iter()
            .position(|&l| l == label)
            .ok_or_else(|| {
                DistributionError::invalid_argument(
                    "label",
                    format!("{} is not an outcome", label),
                )
            })?;
        if self.labels.len() == 1 {
            return Err(DistributionError::invalid_argument(
                "label",
                format!("cannot remove {}, the only outcome", label),
            ));
        }
        let mut probabilities = self.probabilities.clone();
        let mut labels = self.labels.clone();
        probabilities.remove(index);
        labels.remove(index);
        Self::with_labels(&probabilities, &labels)
    }

    /// Label whose cumulative probability first exceeds `threshold`.
    #[inline]
    pub(crate) fn locate(&self, threshold: f64) -> Option<i32> {
        let mut accumulated = 0.0;
        for (&p, &label) in self.probabilities.iter().zip(&self.labels) {
            accumulated += p;
            if accumulated > threshold {
                return Some(label);
            }
        }
        None
    }

    /// First label with non-zero probability.
    pub(crate) fn first_nonzero(&self) -> Option<i32> {
        self.probabilities
            .iter()
            .zip(&self.labels)
            .find(|(p, _)| **p > 0.0)
            .map(|(_, &label)| label)
    }
}

/// Normalises validated, non-empty probabilities in place.
///
/// Finite weights whose sum overflows are first divided by the largest
/// entry, which brings the sum within `n`.
fn normalise(probabilities: &mut [f64]) {
    let mut sum = span::sum(probabilities);
    if !sum.is_finite() {
        if let Some((_, largest)) = span::min_max(probabilities) {
            tracing::debug!(largest, "probability sum overflows, rescaling by largest");
            for p in probabilities.iter_mut() {
                *p /= largest;
            }
            sum = span::sum(probabilities);
        }
    }
    if sum <= PROBABILITY_TOLERANCE {
        let uniform = 1.0 / probabilities.len() as f64;
        tracing::debug!(
            sum,
            outcomes = probabilities.len(),
            "probabilities sum to zero, using uniform"
        );
        probabilities.fill(uniform);
    } else if (1.0 - sum).abs() >= PROBABILITY_TOLERANCE {
        tracing::debug!(sum, "rescaling probabilities");
        span::multiply(probabilities, 1.0 / sum);
    }
}

/// Draws one label from `dist`.
///
/// # Errors
///
/// `InvalidState` if rounding leaves the cumulative sum below the drawn
/// threshold and no outcome has non-zero probability to fall back on.
pub fn sample<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    dist: &DiscreteDistribution,
) -> Result<i32> {
    let threshold = rng.next_double();
    if let Some(label) = dist.locate(threshold) {
        return Ok(label);
    }
    tracing::warn!(threshold, "cumulative probability below threshold, falling back");
    dist.first_nonzero()
        .ok_or_else(|| DistributionError::InvalidState("no non-zero probabilities".to_string()))
}

/// Fills `buffer` with labels drawn from `dist`.
///
/// # Errors
///
/// As [`sample`].
pub fn sample_fill<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    dist: &DiscreteDistribution,
    buffer: &mut [i32],
) -> Result<()> {
    for value in buffer.iter_mut() {
        *value = sample(rng, dist)?;
    }
    Ok(())
}

/// Draws `k` distinct indices from `0..n`, in selection order.
///
/// Partial Fisher-Yates shuffle: `k` swaps over an index array of size `n`.
///
/// # Errors
///
/// `InvalidArgument` if `k > n`.
///
/// # Examples
///
/// ```rust
/// use numrand_core::RandomSource;
/// use numrand_distr::discrete::sample_uniform_without_replacement;
///
/// let mut rng = RandomSource::from_seed(1);
/// let picks = sample_uniform_without_replacement(&mut rng, 10, 5).unwrap();
/// assert_eq!(picks.len(), 5);
/// assert!(sample_uniform_without_replacement(&mut rng, 10, 11).is_err());
/// ```
pub fn sample_uniform_without_replacement<E: RandomEngine>(
    rng: &mut RandomSource<E>,
    n: usize,
    k: usize,
) -> Result<Vec<usize>> {
    if k > n {
        return Err(DistributionError::invalid_argument(
            "k",
            format!("cannot draw {} items from {}", k, n),
        ));
    }
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = i + rng.next_u64_below((n - i) as u64)? as usize;
        indices.swap(i, j);
    }
    indices.truncate(k);
    Ok(indices)
}

/// Returns `true` with probability `p`.
///
/// `p <= 0` never succeeds and `p >= 1` always does.
#[inline]
pub fn sample_bernoulli<E: RandomEngine>(rng: &mut RandomSource<E>, p: f64) -> bool {
    rng.next_double() < p
}
