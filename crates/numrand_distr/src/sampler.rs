//! # Stateful Samplers
//!
//! Each sampler owns its [`RandomSource`] together with validated
//! distribution parameters, so a draw is a single infallible call.
//!
//! | Sampler | Output |
//! |---------|--------|
//! | [`UniformDistributionSampler`] | `f64` in [0, max) or (-max, max) |
//! | [`ZigguratGaussianSampler`] | `f64`, normal via Ziggurat |
//! | [`BoxMullerGaussianSampler`] | `f64`, normal via Box-Muller pairs |
//! | [`DiscreteDistributionSampler`] | `i32` label |
//!
//! Samplers are plain mutable state and not reentrant: give each thread
//! its own instance.
//!
//! ## Usage Example
//!
//! ```rust
//! use numrand_distr::{Sampler, ZigguratGaussianSampler};
//!
//! let mut sampler = ZigguratGaussianSampler::with_seed(100.0, 15.0, 42).unwrap();
//! let x = sampler.sample();
//! assert!(x.is_finite());
//!
//! let mut buffer = vec![0.0; 16];
//! sampler.sample_fill(&mut buffer);
//! ```

use numrand_core::{RandomEngine, RandomSource, Xoshiro256StarStar};

use crate::discrete::DiscreteDistribution;
use crate::error::{check_gaussian, check_non_negative, DistributionError, Result};
use crate::gaussian::{box_muller, ziggurat};
use crate::uniform;

/// A source of samples of type `T`.
pub trait Sampler<T> {
    /// Draws one sample.
    fn sample(&mut self) -> T;

    /// Fills `buffer` with samples.
    fn sample_fill(&mut self, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.sample();
        }
    }
}

/// Uniform samples over [0, max), or (-max, max) when `signed`.
#[derive(Clone, Debug)]
pub struct UniformDistributionSampler<E = Xoshiro256StarStar> {
    max: f64,
    signed: bool,
    rng: RandomSource<E>,
}

impl<E: RandomEngine> UniformDistributionSampler<E> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max` is negative or not finite.
    pub fn new(max: f64, signed: bool, rng: RandomSource<E>) -> Result<Self> {
        check_non_negative("max", max)?;
        Ok(Self { max, signed, rng })
    }

    /// Upper bound of the magnitude.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether samples take both signs.
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Mutable access to the underlying source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut RandomSource<E> {
        &mut self.rng
    }
}

impl UniformDistributionSampler {
    /// Creates a sampler over the default engine seeded with `seed`.
    pub fn with_seed(max: f64, signed: bool, seed: u64) -> Result<Self> {
        Self::new(max, signed, RandomSource::from_seed(seed))
    }

    /// Creates a sampler over the default engine seeded from process entropy.
    pub fn from_entropy(max: f64, signed: bool) -> Result<Self> {
        Self::new(max, signed, RandomSource::from_entropy())
    }
}

impl<E: RandomEngine> Sampler<f64> for UniformDistributionSampler<E> {
    #[inline]
    fn sample(&mut self) -> f64 {
        if self.signed {
            uniform::sample_signed(&mut self.rng) * self.max
        } else {
            uniform::sample(&mut self.rng) * self.max
        }
    }
}

/// Normal samples via the Ziggurat method.
#[derive(Clone, Debug)]
pub struct ZigguratGaussianSampler<E = Xoshiro256StarStar> {
    mean: f64,
    stddev: f64,
    rng: RandomSource<E>,
}

impl<E: RandomEngine> ZigguratGaussianSampler<E> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `mean` is not finite or `stddev` is negative or
    /// not finite.
    pub fn new(mean: f64, stddev: f64, rng: RandomSource<E>) -> Result<Self> {
        check_gaussian(mean, stddev)?;
        Ok(Self { mean, stddev, rng })
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Mutable access to the underlying source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut RandomSource<E> {
        &mut self.rng
    }
}

impl ZigguratGaussianSampler {
    /// Creates a sampler over the default engine seeded with `seed`.
    pub fn with_seed(mean: f64, stddev: f64, seed: u64) -> Result<Self> {
        Self::new(mean, stddev, RandomSource::from_seed(seed))
    }

    /// Creates a sampler over the default engine seeded from process entropy.
    pub fn from_entropy(mean: f64, stddev: f64) -> Result<Self> {
        Self::new(mean, stddev, RandomSource::from_entropy())
    }
}

impl<E: RandomEngine> Sampler<f64> for ZigguratGaussianSampler<E> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.mean + self.stddev * ziggurat::sample(&mut self.rng)
    }
}

/// Normal samples via Box-Muller.
///
/// Each transform yields two values; the second is kept in `spare` and
/// returned by the next call, so consecutive calls depend on each other.
#[derive(Clone, Debug)]
pub struct BoxMullerGaussianSampler<E = Xoshiro256StarStar> {
    mean: f64,
    stddev: f64,
    spare: Option<f64>,
    rng: RandomSource<E>,
}

impl<E: RandomEngine> BoxMullerGaussianSampler<E> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `mean` is not finite or `stddev` is negative or
    /// not finite.
    pub fn new(mean: f64, stddev: f64, rng: RandomSource<E>) -> Result<Self> {
        check_gaussian(mean, stddev)?;
        Ok(Self {
            mean,
            stddev,
            spare: None,
            rng,
        })
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Whether the next call will return a buffered value.
    #[inline]
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Mutable access to the underlying source.
    ///
    /// Reseeding through this does not discard a buffered value; call
    /// [`reset`](Self::reset) as well to replay a sequence.
    #[inline]
    pub fn source_mut(&mut self) -> &mut RandomSource<E> {
        &mut self.rng
    }

    /// Discards the buffered value.
    #[inline]
    pub fn reset(&mut self) {
        self.spare = None;
    }
}

impl BoxMullerGaussianSampler {
    /// Creates a sampler over the default engine seeded with `seed`.
    pub fn with_seed(mean: f64, stddev: f64, seed: u64) -> Result<Self> {
        Self::new(mean, stddev, RandomSource::from_seed(seed))
    }

    /// Creates a sampler over the default engine seeded from process entropy.
    pub fn from_entropy(mean: f64, stddev: f64) -> Result<Self> {
        Self::new(mean, stddev, RandomSource::from_entropy())
    }
}

impl<E: RandomEngine> Sampler<f64> for BoxMullerGaussianSampler<E> {
    fn sample(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return self.mean + self.stddev * spare;
        }
        let (first, second) = box_muller::sample(&mut self.rng);
        self.spare = Some(second);
        self.mean + self.stddev * first
    }
}

/// Labels drawn from a [`DiscreteDistribution`].
///
/// The fallback label for thresholds the cumulative sum never exceeds is
/// resolved on construction.
#[derive(Clone, Debug)]
pub struct DiscreteDistributionSampler<E = Xoshiro256StarStar> {
    dist: DiscreteDistribution,
    fallback: i32,
    rng: RandomSource<E>,
}

impl<E: RandomEngine> DiscreteDistributionSampler<E> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if no outcome has non-zero probability.
    pub fn new(dist: DiscreteDistribution, rng: RandomSource<E>) -> Result<Self> {
        let fallback = dist.first_nonzero().ok_or_else(|| {
            DistributionError::InvalidState("no non-zero probabilities".to_string())
        })?;
        Ok(Self {
            dist,
            fallback,
            rng,
        })
    }

    /// The sampled distribution.
    #[inline]
    pub fn distribution(&self) -> &DiscreteDistribution {
        &self.dist
    }

    /// Mutable access to the underlying source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut RandomSource<E> {
        &mut self.rng
    }
}

impl DiscreteDistributionSampler {
    /// Creates a sampler over the default engine seeded with `seed`.
    pub fn with_seed(dist: DiscreteDistribution, seed: u64) -> Result<Self> {
        Self::new(dist, RandomSource::from_seed(seed))
    }

    /// Creates a sampler over the default engine seeded from process entropy.
    pub fn from_entropy(dist: DiscreteDistribution) -> Result<Self> {
        Self::new(dist, RandomSource::from_entropy())
    }
}

impl<E: RandomEngine> Sampler<i32> for DiscreteDistributionSampler<E> {
    fn sample(&mut self) -> i32 {
        let threshold = self.rng.next_double();
        match self.dist.locate(threshold) {
            Some(label) => label,
            None => {
                tracing::warn!(threshold, "cumulative probability below threshold, falling back");
                self.fallback
            }
        }
    }
}
