//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use numrand_core::{EngineKind, SourceConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "numrand.toml";

/// Environment variable selecting the engine.
pub const ENV_ENGINE: &str = "NUMRAND_ENGINE";
/// Environment variable fixing the seed.
pub const ENV_SEED: &str = "NUMRAND_SEED";
/// Environment variable setting the log level.
pub const ENV_LOG_LEVEL: &str = "NUMRAND_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid engine: {0}. Run `numrand engines` for the supported names")]
    InvalidEngine(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Engine variant
    pub engine: EngineKind,
    /// Seed; drawn from process entropy when absent
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_engine(s: &str) -> Result<EngineKind, ConfigError> {
    EngineKind::from_str(s).map_err(|_| ConfigError::InvalidEngine(s.to_string()))
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields for which `lookup` returns a value
    pub fn merge_with_lookup<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup(ENV_ENGINE) {
            self.engine = parse_engine(&engine)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(engine) = &cli.engine {
            self.engine = parse_engine(engine)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Random source configuration for the selected engine and seed
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::builder()
            .engine(self.engine)
            .maybe_seed(self.seed)
            .build()
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Engine override
    pub engine: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose output (debug logging unless a log level is given)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.merge_with_lookup(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.engine, EngineKind::Xoshiro256StarStar);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            engine = "wyrand"
            seed = 42
            log_level = "debug"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine, EngineKind::WyRand);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("seed = 7").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.engine, EngineKind::Xoshiro256StarStar);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_toml_rejects_unknown_engine() {
        assert!(toml::from_str::<CliConfig>(r#"engine = "mt19937""#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .merge_with_lookup(env(&[
                (ENV_ENGINE, "xorshift"),
                (ENV_SEED, " 123 "),
                (ENV_LOG_LEVEL, "info"),
            ]))
            .unwrap();
        assert_eq!(config.engine, EngineKind::XorShift);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_env_errors() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.merge_with_lookup(env(&[(ENV_SEED, "-1")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            config.merge_with_lookup(env(&[(ENV_ENGINE, "lcg")])),
            Err(ConfigError::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_cli_args_take_precedence() {
        let cli = CliArgs {
            engine: Some("splitmix64".to_string()),
            seed: Some(9),
            verbose: true,
            ..Default::default()
        };
        let lookup = env(&[(ENV_ENGINE, "wyrand"), (ENV_SEED, "1"), (ENV_LOG_LEVEL, "error")]);
        let mut config = CliConfig::default();
        config.merge_with_lookup(lookup).unwrap();
        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.engine, EngineKind::SplitMix64);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_explicit_log_level_beats_verbose() {
        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            verbose: true,
            ..Default::default()
        };
        let mut config = CliConfig::default();
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/numrand.toml")),
            ..Default::default()
        };
        let err = build_config_with(&cli, env(&[])).unwrap_err();
        assert!(err.to_string().contains("Configuration file error"));
    }

    #[test]
    fn test_config_file_then_env_then_cli() {
        let path =
            std::env::temp_dir().join(format!("numrand-config-{}.toml", std::process::id()));
        std::fs::write(&path, "engine = \"wyrand\"\nseed = 5\nlog_level = \"info\"\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[(ENV_SEED, "6")])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.engine, EngineKind::WyRand);
        assert_eq!(config.seed, Some(6));
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_source_config() {
        let config = CliConfig {
            engine: EngineKind::Xoshiro512StarStar,
            seed: Some(3),
            log_level: LogLevel::Warn,
        };
        let source = config.source_config();
        assert_eq!(source.engine(), EngineKind::Xoshiro512StarStar);
        assert_eq!(source.seed(), Some(3));
    }
}
