//! Error types for the command-line front end

use thiserror::Error;
use trifuzzy_config::ConfigError;
use trifuzzy_core::FuzzyError;

/// Anything that makes a `trifuzzy` invocation fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// A fuzzy number operation failed
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),

    /// The configuration file could not be loaded
    #[error("Could not load configuration: {0}")]
    Config(#[from] ConfigError),
}
