//! Ranked multiset of fuzzy numbers with running sums
//!
//! [`TriFuzzyNumSet`] keeps its elements ordered by [`Rank`](crate::Rank) and
//! maintains the componentwise sum of everything it holds, so the arithmetic
//! mean is available in constant time.

mod sums;
mod tri_fuzzy_num_set;


pub use sums::ComponentSums;
pub use tri_fuzzy_num_set::{Iter, TriFuzzyNumSet};
