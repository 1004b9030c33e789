use crate::number::TriFuzzyNum;

/// Componentwise sums of the lower, modal and upper bounds of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentSums {
    pub lower: f64,
    pub modal: f64,
    pub upper: f64,
}

impl ComponentSums {
    #[inline]
    pub(crate) fn add(&mut self, value: &TriFuzzyNum) {
        self.lower += value.lower_value();
        self.modal += value.modal_value();
        self.upper += value.upper_value();
    }

    #[inline]
    pub(crate) fn subtract(&mut self, value: &TriFuzzyNum) {
        self.lower -= value.lower_value();
        self.modal -= value.modal_value();
        self.upper -= value.upper_value();
    }

    /// Returns the sums as a `(lower, modal, upper)` tuple.
    #[inline]
    pub const fn to_tuple(&self) -> (f64, f64, f64) {
        (self.lower, self.modal, self.upper)
    }

    /// Largest absolute difference between matching components.
    pub fn max_abs_diff(&self, other: &ComponentSums) -> f64 {
        (self.lower - other.lower)
            .abs()
            .max((self.modal - other.modal).abs())
            .max((self.upper - other.upper).abs())
    }
}
