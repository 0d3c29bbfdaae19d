//! CLI error types

use numrand_core::RandomError;
use numrand_distr::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Distribution parameters were rejected
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// The random source rejected a request
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
