//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. `sample` and `stats`
//! share the distribution flags defined here.

pub mod engines;
pub mod sample;
pub mod stats;

use clap::{Args, ValueEnum};
use numrand_core::{RandomEngine, RandomSource};
use numrand_distr::gaussian::ziggurat;
use numrand_distr::{discrete, uniform, BoxMullerGaussianSampler, DiscreteDistribution, Sampler};

use crate::{CliError, Result};

/// Distributions selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
    /// Continuous uniform over [min, max) or (-max, max)
    Uniform,
    /// Normal via the Ziggurat method
    Gaussian,
    /// Normal via Box-Muller
    BoxMuller,
    /// Categorical over labels 0..n
    Discrete,
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Distribution::Uniform => "uniform",
            Distribution::Gaussian => "gaussian",
            Distribution::BoxMuller => "box-muller",
            Distribution::Discrete => "discrete",
        };
        f.write_str(name)
    }
}

/// Distribution flags shared by `sample` and `stats`
#[derive(Debug, Clone, Args)]
pub struct DistributionArgs {
    /// Distribution to draw from
    #[arg(short, long, value_enum, default_value_t = Distribution::Uniform)]
    pub distribution: Distribution,

    /// Number of samples
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Lower bound (uniform)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound (uniform)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Sample from (-max, max) instead of [min, max) (uniform)
    #[arg(long)]
    pub signed: bool,

    /// Mean (gaussian, box-muller)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mean: f64,

    /// Standard deviation (gaussian, box-muller)
    #[arg(long, default_value_t = 1.0)]
    pub stddev: f64,

    /// Comma-separated outcome probabilities (discrete)
    #[arg(short, long, value_delimiter = ',')]
    pub probabilities: Vec<f64>,
}

impl Default for DistributionArgs {
    fn default() -> Self {
        Self {
            distribution: Distribution::Uniform,
            count: 10,
            min: 0.0,
            max: 1.0,
            signed: false,
            mean: 0.0,
            stddev: 1.0,
            probabilities: Vec::new(),
        }
    }
}

/// Draws `args.count` samples from the selected distribution.
///
/// Discrete labels are returned as `f64` so every distribution shares one
/// output path.
pub fn draw<E: RandomEngine>(
    mut rng: RandomSource<E>,
    args: &DistributionArgs,
) -> Result<Vec<f64>> {
    let mut samples = vec![0.0; args.count];

    match args.distribution {
        Distribution::Uniform if args.signed => {
            uniform::fill_signed_max(&mut rng, args.max, &mut samples)?;
        }
        Distribution::Uniform => {
            uniform::fill_range(&mut rng, args.min, args.max, &mut samples)?;
        }
        Distribution::Gaussian => {
            ziggurat::fill_with(&mut rng, args.mean, args.stddev, &mut samples)?;
        }
        Distribution::BoxMuller => {
            let mut sampler = BoxMullerGaussianSampler::new(args.mean, args.stddev, rng)?;
            sampler.sample_fill(&mut samples);
        }
        Distribution::Discrete => {
            if args.probabilities.is_empty() {
                return Err(CliError::InvalidArgument(
                    "--probabilities is required for the discrete distribution".to_string(),
                ));
            }
            let dist = DiscreteDistribution::new(&args.probabilities)?;
            let mut labels = vec![0; args.count];
            discrete::sample_fill(&mut rng, &dist, &mut labels)?;
            for (sample, label) in samples.iter_mut().zip(labels) {
                *sample = f64::from(label);
            }
        }
    }

    tracing::debug!(
        distribution = %args.distribution,
        count = samples.len(),
        "drew samples"
    );
    Ok(samples)
}
