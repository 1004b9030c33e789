//! Text parsing for fuzzy numbers

use std::fmt;
use std::str::FromStr;

use super::tri_fuzzy_num::TriFuzzyNum;

/// Error when parsing a fuzzy number from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyParseError {
    pub message: String,
}

impl FuzzyParseError {
    fn new(message: impl Into<String>) -> Self {
        FuzzyParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for FuzzyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fuzzy number parse error: {}", self.message)
    }
}

impl std::error::Error for FuzzyParseError {}

/// Parses the `Display` form `"(l, m, u)"`.
///
/// # Format
/// - `"(0, 1, 2)"` or `"0,1,2"`: three bounds in any order
/// - `"3.5"` or `"(3.5)"`: a crisp number
impl FromStr for TriFuzzyNum {
    type Err = FuzzyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(|| {
                FuzzyParseError::new(format!("Unbalanced parentheses in '{}'", trimmed))
            })?,
            None => trimmed,
        };

        let values = inner
            .split(',')
            .map(parse_bound)
            .collect::<Result<Vec<f64>, _>>()?;

        match values.as_slice() {
            [value] => Ok(TriFuzzyNum::crisp(*value)),
            [r1, r2, r3] => Ok(TriFuzzyNum::new(*r1, *r2, *r3)),
            _ => Err(FuzzyParseError::new(format!(
                "Invalid fuzzy number '{}': expected 1 or 3 values separated by ',', got {}",
                trimmed,
                values.len()
            ))),
        }
    }
}

fn parse_bound(part: &str) -> Result<f64, FuzzyParseError> {
    let part = part.trim();
    let value = part
        .parse::<f64>()
        .map_err(|e| FuzzyParseError::new(format!("Invalid bound '{}': {}", part, e)))?;

    if !value.is_finite() {
        return Err(FuzzyParseError::new(format!(
            "Bound '{}' is not a finite number",
            part
        )));
    }
    Ok(value)
}
