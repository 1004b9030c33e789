//! Command-line argument definitions.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use trifuzzy_core::TriFuzzyNum;

/// Triangular fuzzy number calculator.
///
/// Fuzzy numbers are written `"(l, m, u)"`, `"l,m,u"` or as a single crisp
/// value. Bounds may be given in any order.
#[derive(Debug, Parser)]
#[command(name = "trifuzzy", version, about)]
pub struct Cli {
    /// Configuration file (TOML, or YAML with a .yaml/.yml extension)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal places for printed values
    #[arg(long, short, global = true)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the arithmetic mean of the configured and given values
    Mean {
        #[arg(allow_hyphen_values = true)]
        values: Vec<TriFuzzyNum>,
    },

    /// Print the configured and given values in rank order
    Sort {
        #[arg(allow_hyphen_values = true)]
        values: Vec<TriFuzzyNum>,
    },

    /// Print the rank vector of a value
    Rank {
        #[arg(allow_hyphen_values = true)]
        value: TriFuzzyNum,
    },

    /// Apply an arithmetic operator to two values
    Calc {
        #[arg(allow_hyphen_values = true)]
        left: TriFuzzyNum,
        #[arg(allow_hyphen_values = true)]
        op: Operator,
        #[arg(allow_hyphen_values = true)]
        right: TriFuzzyNum,
    },
}

/// Binary operator accepted by `calc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn apply(self, left: TriFuzzyNum, right: TriFuzzyNum) -> TriFuzzyNum {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" => Ok(Operator::Sub),
            "*" | "x" | "mul" => Ok(Operator::Mul),
            other => Err(format!(
                "unknown operator '{}', expected one of + - * (add, sub, mul)",
                other
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        };
        f.write_str(symbol)
    }
}
