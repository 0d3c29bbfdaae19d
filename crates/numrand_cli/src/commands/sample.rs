//! Sample command implementation
//!
//! Prints one sample per line.

use std::io::Write;

use tracing::info;

use super::{draw, DistributionArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the sample command
pub fn run<W: Write>(config: &CliConfig, args: &DistributionArgs, out: &mut W) -> Result<()> {
    let source_config = config.source_config();
    info!(
        engine = %source_config.engine(),
        distribution = %args.distribution,
        count = args.count,
        "Sampling"
    );

    let samples = draw(source_config.create_source(), args)?;
    for value in &samples {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;
    Ok(())
}
