//! trifuzzy Core - Triangular fuzzy numbers and their aggregates
//!
//! This crate provides:
//! - [`TriFuzzyNum`], an imprecise quantity given by (lower, modal, upper) bounds
//! - [`Rank`], the defuzzification key that totally orders fuzzy numbers
//! - [`TriFuzzyNumSet`], a ranked multiset with an O(1) arithmetic mean

pub mod error;
pub mod number;
pub mod set;

#[cfg(test)]
mod test_utils;

pub use error::{FuzzyError, Result};
pub use number::{FuzzyParseError, Rank, TriFuzzyNum, CRISP_ZERO};
pub use set::{ComponentSums, TriFuzzyNumSet};
