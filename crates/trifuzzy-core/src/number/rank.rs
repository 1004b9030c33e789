//! Rank - the defuzzification key used to order fuzzy numbers

use std::cmp::Ordering;
use std::fmt;

/// The rank vector `(x, y, z)` of a triangular fuzzy number.
///
/// For bounds `l <= m <= u`:
///
/// ```text
/// d1 = sqrt(1 + (u - m)^2)
/// d2 = sqrt(1 + (m - l)^2)
/// z  = (u - l) + d1 + d2
/// y  = (u - l) / z
/// x  = ((u - l) * m + d1 * l + d2 * u) / z
/// ```
///
/// `x` is a centroid-style location index, `y` the spread ratio and `z` the
/// total spread. Ranks compare lexicographically: `x` first, then `y`, then
/// `z`. Since `d1, d2 >= 1`, `z >= 2` and the divisions are always defined.
///
/// `d1` and `d2` go through `hypot`, and `x` is evaluated as the convex
/// combination `y * m + (d1 / z) * l + (d2 / z) * u`, so very large finite
/// bounds do not overflow. The comparison uses `f64::total_cmp` with signed
/// zeros folded together, which keeps it a total order even if a component
/// ends up infinite or NaN.
///
/// # Examples
///
/// ```
/// use trifuzzy_core::TriFuzzyNum;
///
/// let crisp = TriFuzzyNum::crisp(3.0).rank();
/// assert_eq!((crisp.x(), crisp.y(), crisp.z()), (3.0, 0.0, 2.0));
///
/// assert!(TriFuzzyNum::new(1.0, 2.0, 3.0).rank() < TriFuzzyNum::new(2.0, 3.0, 4.0).rank());
/// ```
#[derive(Clone, Copy)]
pub struct Rank {
    x: f64,
    y: f64,
    z: f64,
}

impl Rank {
    /// Computes the rank of the bounds `lower <= modal <= upper`.
    pub fn of(lower: f64, modal: f64, upper: f64) -> Self {
        let spread = upper - lower;
        let d1 = 1.0_f64.hypot(upper - modal);
        let d2 = 1.0_f64.hypot(modal - lower);

        let z = spread + d1 + d2;
        let y = spread / z;
        let x = y * modal + (d1 / z) * lower + (d2 / z) * upper;

        Rank { x, y, z }
    }

    /// Returns the centroid index.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the spread ratio.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the total spread.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the components as an `(x, y, z)` tuple.
    #[inline]
    pub const fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

// Adding 0.0 turns -0.0 into 0.0 so that signed zeros compare equal.
#[inline]
fn compare_component(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_component(self.x, other.x)
            .then_with(|| compare_component(self.y, other.y))
            .then_with(|| compare_component(self.z, other.z))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}, {:.p$}]", self.x, self.y, self.z, p = p),
            None => write!(f, "[{}, {}, {}]", self.x, self.y, self.z),
        }
    }
}
