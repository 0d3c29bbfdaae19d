//! Stats command implementation
//!
//! Draws samples and prints count, mean, standard deviation, min and max.

use std::io::Write;

use numrand_core::math::span;
use tracing::info;

use super::{draw, DistributionArgs};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Summary statistics of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Standard deviation
    pub stddev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl Summary {
    /// Summarise `samples`, or `None` when empty
    pub fn of(samples: &[f64]) -> Option<Self> {
        let (mean, variance) = span::mean_variance(samples)?;
        let (min, max) = span::min_max(samples)?;
        Some(Self {
            count: samples.len(),
            mean,
            stddev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Run the stats command
pub fn run<W: Write>(config: &CliConfig, args: &DistributionArgs, out: &mut W) -> Result<()> {
    if args.count == 0 {
        return Err(CliError::InvalidArgument(
            "--count must be positive for stats".to_string(),
        ));
    }

    let source_config = config.source_config();
    info!(
        engine = %source_config.engine(),
        distribution = %args.distribution,
        count = args.count,
        "Computing statistics"
    );

    let samples = draw(source_config.create_source(), args)?;
    let summary = Summary::of(&samples)
        .ok_or_else(|| CliError::InvalidArgument("no samples drawn".to_string()))?;

    writeln!(out, "distribution: {}", args.distribution)?;
    writeln!(out, "engine:       {}", source_config.engine())?;
    writeln!(out, "count:        {}", summary.count)?;
    writeln!(out, "mean:         {:.6}", summary.mean)?;
    writeln!(out, "stddev:       {:.6}", summary.stddev)?;
    writeln!(out, "min:          {:.6}", summary.min)?;
    writeln!(out, "max:          {:.6}", summary.max)?;
    out.flush()?;
    Ok(())
}
