//! Test utilities for trifuzzy-core
//!
//! Provides common fixtures used across the crate's test modules.

use crate::number::TriFuzzyNum;
use crate::set::ComponentSums;

/// Shorthand for `TriFuzzyNum::new`.
pub fn tfn(r1: f64, r2: f64, r3: f64) -> TriFuzzyNum {
    TriFuzzyNum::new(r1, r2, r3)
}

/// A small grid of bounds mixing signs, crisp values and wide spreads.
pub fn sample_bounds() -> Vec<f64> {
    vec![-3.5, -1.0, 0.0, 0.25, 1.0, 2.0, 7.75]
}

/// Every fuzzy number that can be built from three entries of `sample_bounds`.
pub fn sample_numbers() -> Vec<TriFuzzyNum> {
    let bounds = sample_bounds();
    let mut numbers = Vec::new();
    for &a in &bounds {
        for &b in &bounds {
            for &c in &bounds {
                numbers.push(tfn(a, b, c));
            }
        }
    }
    numbers
}

/// Sums the fields of `values` from scratch, in iteration order.
pub fn naive_sums<'a>(values: impl IntoIterator<Item = &'a TriFuzzyNum>) -> ComponentSums {
    let mut sums = ComponentSums::default();
    for value in values {
        sums.lower += value.lower_value();
        sums.modal += value.modal_value();
        sums.upper += value.upper_value();
    }
    sums
}

/// Finite values whose rank components used to overflow, next to an ordinary one.
pub fn extreme_numbers() -> Vec<TriFuzzyNum> {
    vec![
        tfn(1e200, 1e201, 1e202),
        tfn(0.0, 1.0, 3.0),
        TriFuzzyNum::crisp(1e300),
        TriFuzzyNum::crisp(-1e300),
        tfn(-1e200, 0.0, 1e200),
        tfn(-1e308, 0.0, 1e308),
        tfn(f64::MAX, f64::MAX, f64::MAX),
    ]
}
