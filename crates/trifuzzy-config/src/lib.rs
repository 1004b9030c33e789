//! Configuration system for trifuzzy.
//!
//! Load settings from TOML or YAML files to control output precision,
//! logging, sum verification and the values a set starts with.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use trifuzzy_config::{EnvironmentMode, FuzzyConfig};
//!
//! let config = FuzzyConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     precision = 3
//!     numbers = [[0.0, 1.0, 2.0], [4.0, 2.0, 3.0]]
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.precision, Some(3));
//! assert_eq!(config.seed_numbers().len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use trifuzzy_config::FuzzyConfig;
//!
//! let config = FuzzyConfig::load("trifuzzy.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trifuzzy_core::TriFuzzyNum;

/// `tracing` filter directive used when neither the file nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main trifuzzy configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FuzzyConfig {
    /// Environment mode affecting verification.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Largest tolerated gap between running and recomputed sums.
    #[serde(default = "default_sum_tolerance")]
    pub sum_tolerance: f64,

    /// Decimal places for printed fuzzy numbers; `None` prints them exactly.
    #[serde(default)]
    pub precision: Option<usize>,

    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Values inserted into every set before any command-line values.
    #[serde(default)]
    pub numbers: Vec<[f64; 3]>,
}

fn default_sum_tolerance() -> f64 {
    1e-9
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            environment_mode: EnvironmentMode::default(),
            sum_tolerance: default_sum_tolerance(),
            precision: None,
            log_level: default_log_level(),
            numbers: Vec::new(),
        }
    }
}

impl FuzzyConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](FuzzyConfig::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a file, picking YAML for `.yaml`/`.yml` and TOML otherwise,
    /// then validates it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that every numeric setting is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sum_tolerance.is_finite() || self.sum_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sum_tolerance must be a finite non-negative number, got {}",
                self.sum_tolerance
            )));
        }

        if let Some(index) = self
            .numbers
            .iter()
            .position(|bounds| bounds.iter().any(|b| !b.is_finite()))
        {
            return Err(ConfigError::Invalid(format!(
                "numbers[{}] contains a non-finite bound",
                index
            )));
        }

        Ok(())
    }

    /// Sets the output precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Adds a seed value.
    pub fn with_number(mut self, value: TriFuzzyNum) -> Self {
        let (lower, modal, upper) = value.to_tuple();
        self.numbers.push([lower, modal, upper]);
        self
    }

    /// Returns the seed values as normalized fuzzy numbers.
    pub fn seed_numbers(&self) -> Vec<TriFuzzyNum> {
        self.numbers.iter().copied().map(TriFuzzyNum::from).collect()
    }

    /// Returns true when running sums must be checked against a recount.
    pub fn verifies_sums(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }
}

/// Environment mode affecting how much checking is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Trust the running sums.
    #[default]
    Fast,

    /// Recompute sums after building a set and warn on drift.
    FullAssert,
}
