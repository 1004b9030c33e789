//! Triangular fuzzy numbers
//!
//! A triangular fuzzy number describes an imprecise quantity through three
//! bounds: the smallest plausible value, the most plausible one, and the
//! largest plausible one. Values are immutable; every arithmetic operation
//! returns a new, normalized number.
//!
//! Numbers are ordered by their [`Rank`], not by their fields.

#[macro_use]
mod macros;

mod parse;
mod rank;
mod tri_fuzzy_num;


pub use parse::FuzzyParseError;
pub use rank::Rank;
pub use tri_fuzzy_num::{TriFuzzyNum, CRISP_ZERO};
