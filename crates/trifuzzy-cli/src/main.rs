//! trifuzzy - triangular fuzzy number calculator
//!
//! ```text
//! trifuzzy mean "(0, 1, 2)" "(2, 3, 4)" "(4, 5, 6)"
//! trifuzzy calc "(0, 1, 2)" - "(0, 1, 2)"
//! trifuzzy --config trifuzzy.toml sort 3 "1,2,4"
//! ```

mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use trifuzzy_config::{FuzzyConfig, DEFAULT_LOG_LEVEL};

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(event = "failed", error = %err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => FuzzyConfig::from_path(path),
        None => Ok(FuzzyConfig::default()),
    };
    // Installed before the config error propagates so that `main` can log it.
    logging::init(
        config
            .as_ref()
            .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str()),
    );
    let config = config?;

    let precision = cli.precision.or(config.precision);
    commands::run(&cli.command, &config, precision)
}
