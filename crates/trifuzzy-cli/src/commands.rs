//! Command execution. Every command renders its output as a string.

use std::fmt::Display;

use tracing::{info, warn};
use trifuzzy_config::FuzzyConfig;
use trifuzzy_core::{TriFuzzyNum, TriFuzzyNumSet};

use crate::cli::Command;
use crate::error::CliError;

/// Runs `command` and returns the text to print.
pub fn run(
    command: &Command,
    config: &FuzzyConfig,
    precision: Option<usize>,
) -> Result<String, CliError> {
    match command {
        Command::Mean { values } => {
            let set = build_set(config, values);
            info!(event = "mean", len = set.len());
            let mean = set.arithmetic_mean()?;
            Ok(render(&mean, precision))
        }
        Command::Sort { values } => {
            let set = build_set(config, values);
            info!(event = "sort", len = set.len());
            let lines: Vec<String> = set
                .iter()
                .map(|value| {
                    format!(
                        "{}  {}",
                        render(value, precision),
                        render(&value.rank(), precision)
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Rank { value } => Ok(render(&value.rank(), precision)),
        Command::Calc { left, op, right } => {
            let result = op.apply(*left, *right);
            info!(event = "calc", left = %left, op = %op, right = %right, result = %result);
            Ok(render(&result, precision))
        }
    }
}

/// Builds a set from the configured seeds followed by `values`.
fn build_set(config: &FuzzyConfig, values: &[TriFuzzyNum]) -> TriFuzzyNumSet {
    let mut set = TriFuzzyNumSet::from_values(config.seed_numbers());
    set.extend(values);

    if config.verifies_sums() {
        let drift = set.sums().max_abs_diff(&set.recompute_sums());
        if drift > config.sum_tolerance {
            warn!(
                event = "sum_drift",
                drift,
                tolerance = config.sum_tolerance,
                len = set.len(),
            );
        }
    }
    set
}

fn render(value: &impl Display, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}
