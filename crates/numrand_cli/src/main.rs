//! numrand CLI - Random Samples from the Command Line
//!
//! Operational front end for the numrand engines and distributions.
//!
//! # Commands
//!
//! - `numrand sample -d gaussian -n 1000` - Print samples, one per line
//! - `numrand stats -d discrete -p 0.1,0.9` - Print summary statistics
//! - `numrand engines` - List the available engines
//!
//! # Configuration
//!
//! Engine, seed and log level are resolved from (highest first) command-line
//! flags, `NUMRAND_ENGINE` / `NUMRAND_SEED` / `NUMRAND_LOG_LEVEL`, the TOML
//! file given by `--config` (or `numrand.toml` if present), then defaults.
//! Logs go to stderr so stdout carries only samples.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::DistributionArgs;
use config::{build_config, CliArgs};

/// numrand - pseudo-random samples from the command line
#[derive(Parser)]
#[command(name = "numrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Engine name (see `numrand engines`)
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// Seed for reproducible output
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print samples, one per line
    Sample(DistributionArgs),

    /// Print summary statistics of a sample
    Stats(DistributionArgs),

    /// List the available engines
    Engines,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            engine: cli.engine.clone(),
            seed: cli.seed,
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli)).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        engine = %config.engine,
        seed = ?config.seed,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Commands::Sample(args) => {
            commands::sample::run(&config, args, &mut out).context("sample failed")?
        }
        Commands::Stats(args) => {
            commands::stats::run(&config, args, &mut out).context("stats failed")?
        }
        Commands::Engines => commands::engines::run(&mut out)?,
    }

    Ok(())
}
