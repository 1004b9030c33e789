//! TriFuzzyNum - Triangular fuzzy number value type

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;

use super::rank::Rank;

/// A triangular fuzzy number with `lower <= modal <= upper`.
///
/// The bounds are sorted on construction, so the argument order never
/// matters. Equality is exact field-wise equality; ordering goes through
/// [`Rank`] and is exposed as [`compare_rank`](TriFuzzyNum::compare_rank).
///
/// Arithmetic:
/// - `a + b = (a.l + b.l, a.m + b.m, a.u + b.u)`
/// - `a - b = (a.l - b.u, a.m - b.m, a.u - b.l)`
/// - `a * b = (a.l * b.l, a.m * b.m, a.u * b.u)`
///
/// Every result is re-normalized. Multiplication is the naive componentwise
/// product: with mixed-sign bounds the products are sorted again, which keeps
/// the invariant but is not the interval-arithmetic product.
///
/// # Examples
///
/// ```
/// use trifuzzy_core::TriFuzzyNum;
///
/// let a = TriFuzzyNum::new(2.0, 0.0, 1.0);
/// assert_eq!(a.lower_value(), 0.0);
/// assert_eq!(a.modal_value(), 1.0);
/// assert_eq!(a.upper_value(), 2.0);
///
/// assert_eq!(a - a, TriFuzzyNum::new(-2.0, 0.0, 2.0));
/// assert_eq!(a.to_string(), "(0, 1, 2)");
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Bounds")
)]
pub struct TriFuzzyNum {
    lower: f64,
    modal: f64,
    upper: f64,
}

/// The crisp zero, identity element for addition.
pub const CRISP_ZERO: TriFuzzyNum = TriFuzzyNum::crisp(0.0);

impl TriFuzzyNum {
    /// The crisp zero.
    pub const ZERO: TriFuzzyNum = CRISP_ZERO;

    /// The crisp one, identity element for multiplication.
    pub const ONE: TriFuzzyNum = TriFuzzyNum::crisp(1.0);

    /// Creates a fuzzy number from three bounds given in any order.
    pub fn new(r1: f64, r2: f64, r3: f64) -> Self {
        let lower = r1.min(r2).min(r3);
        let upper = r1.max(r2).max(r3);
        let modal = r1.min(r2).max(r1.max(r2).min(r3));
        TriFuzzyNum {
            lower,
            modal,
            upper,
        }
    }

    /// Creates a crisp number, one without any uncertainty.
    #[inline]
    pub const fn crisp(value: f64) -> Self {
        TriFuzzyNum {
            lower: value,
            modal: value,
            upper: value,
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower_value(&self) -> f64 {
        self.lower
    }

    /// Returns the modal (most plausible) value.
    #[inline]
    pub const fn modal_value(&self) -> f64 {
        self.modal
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper_value(&self) -> f64 {
        self.upper
    }

    /// Returns `true` when all three bounds coincide.
    #[inline]
    pub fn is_crisp(&self) -> bool {
        self.lower == self.modal && self.modal == self.upper
    }

    /// Returns the `(lower, modal, upper)` bounds.
    #[inline]
    pub const fn to_tuple(&self) -> (f64, f64, f64) {
        (self.lower, self.modal, self.upper)
    }

    /// Computes the rank vector used to order fuzzy numbers.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::of(self.lower, self.modal, self.upper)
    }

    /// Compares two fuzzy numbers by their rank vectors.
    ///
    /// This is a total order. `Ordering::Equal` means order-equivalent, which
    /// does not by itself imply `self == other`.
    pub fn compare_rank(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Returns true if both numbers have the same rank.
    pub fn is_rank_equivalent(&self, other: &Self) -> bool {
        self.compare_rank(other) == Ordering::Equal
    }
}

impl_fuzzy_op!(TriFuzzyNum: Add::add, AddAssign::add_assign, |a, b| {
    TriFuzzyNum::new(a.lower + b.lower, a.modal + b.modal, a.upper + b.upper)
});

impl_fuzzy_op!(TriFuzzyNum: Sub::sub, SubAssign::sub_assign, |a, b| {
    TriFuzzyNum::new(a.lower - b.upper, a.modal - b.modal, a.upper - b.lower)
});

impl_fuzzy_op!(TriFuzzyNum: Mul::mul, MulAssign::mul_assign, |a, b| {
    TriFuzzyNum::new(a.lower * b.lower, a.modal * b.modal, a.upper * b.upper)
});

// Rank-equivalent values that differ field-wise are reported as incomparable
// so that `partial_cmp == Some(Equal)` agrees with `==`.
impl PartialOrd for TriFuzzyNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare_rank(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl Sum for TriFuzzyNum {
    fn sum<I: Iterator<Item = TriFuzzyNum>>(iter: I) -> Self {
        iter.fold(CRISP_ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a TriFuzzyNum> for TriFuzzyNum {
    fn sum<I: Iterator<Item = &'a TriFuzzyNum>>(iter: I) -> Self {
        iter.fold(CRISP_ZERO, |acc, value| acc + value)
    }
}

impl fmt::Debug for TriFuzzyNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriFuzzyNum({}, {}, {})",
            self.lower, self.modal, self.upper
        )
    }
}

impl fmt::Display for TriFuzzyNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.p$}, {:.p$}, {:.p$})",
                self.lower,
                self.modal,
                self.upper,
                p = p
            ),
            None => write!(f, "({}, {}, {})", self.lower, self.modal, self.upper),
        }
    }
}

impl From<f64> for TriFuzzyNum {
    fn from(value: f64) -> Self {
        TriFuzzyNum::crisp(value)
    }
}

impl From<(f64, f64, f64)> for TriFuzzyNum {
    fn from((r1, r2, r3): (f64, f64, f64)) -> Self {
        TriFuzzyNum::new(r1, r2, r3)
    }
}

impl From<[f64; 3]> for TriFuzzyNum {
    fn from([r1, r2, r3]: [f64; 3]) -> Self {
        TriFuzzyNum::new(r1, r2, r3)
    }
}

// Deserialized bounds are untrusted and go through the sorting constructor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Bounds {
    lower: f64,
    modal: f64,
    upper: f64,
}

#[cfg(feature = "serde")]
impl From<Bounds> for TriFuzzyNum {
    fn from(bounds: Bounds) -> Self {
        TriFuzzyNum::new(bounds.lower, bounds.modal, bounds.upper)
    }
}
