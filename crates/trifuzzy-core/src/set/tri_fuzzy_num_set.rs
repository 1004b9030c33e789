//! TriFuzzyNumSet - Ranked multiset with an O(1) arithmetic mean

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Flatten;

use tracing::{debug, trace};

use super::sums::ComponentSums;
use crate::error::{FuzzyError, Result};
use crate::number::{Rank, TriFuzzyNum};

/// Iterator over the elements of a [`TriFuzzyNumSet`] in rank order.
pub type Iter<'a> = Flatten<btree_map::Values<'a, Rank, Vec<TriFuzzyNum>>>;

/// A multiset of fuzzy numbers ordered by rank.
///
/// Elements that are order-equivalent are kept side by side in insertion
/// order, never merged. Every insert and remove updates the running
/// [`ComponentSums`], which always hold the sum of the stored elements.
///
/// # Examples
///
/// ```
/// use trifuzzy_core::{TriFuzzyNum, TriFuzzyNumSet};
///
/// let mut set = TriFuzzyNumSet::from_values([
///     TriFuzzyNum::new(0.0, 1.0, 2.0),
///     TriFuzzyNum::new(2.0, 3.0, 4.0),
/// ]);
/// set.insert(TriFuzzyNum::new(4.0, 5.0, 6.0));
///
/// assert_eq!(set.arithmetic_mean().unwrap(), TriFuzzyNum::new(2.0, 3.0, 4.0));
///
/// set.clear();
/// assert!(set.arithmetic_mean().is_err());
/// ```
#[derive(Clone, Default)]
pub struct TriFuzzyNumSet {
    // Buckets are never empty.
    buckets: BTreeMap<Rank, Vec<TriFuzzyNum>>,
    len: usize,
    sums: ComponentSums,
}

impl TriFuzzyNumSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set by inserting each value in sequence order.
    pub fn from_values(values: impl IntoIterator<Item = TriFuzzyNum>) -> Self {
        let mut set = Self::new();
        set.extend(values);
        set
    }

    /// Returns the number of stored elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value. Order-equivalent values are stored alongside each other.
    pub fn insert(&mut self, value: TriFuzzyNum) {
        self.buckets.entry(value.rank()).or_default().push(value);
        self.len += 1;
        self.sums.add(&value);

        trace!(event = "insert", value = %value, len = self.len);
    }

    /// Removes one element order-equivalent to `value`.
    ///
    /// A field-identical element is preferred; otherwise the earliest
    /// inserted of the order-equivalent elements goes. The sums are adjusted
    /// by the element actually removed, which is returned. Without an
    /// order-equivalent element the set is left untouched.
    pub fn remove(&mut self, value: &TriFuzzyNum) -> Option<TriFuzzyNum> {
        let Entry::Occupied(mut bucket) = self.buckets.entry(value.rank()) else {
            trace!(event = "remove_miss", value = %value, len = self.len);
            return None;
        };

        let index = removal_index(bucket.get(), value);
        let removed = bucket.get_mut().remove(index);
        if bucket.get().is_empty() {
            bucket.remove();
        }

        self.len -= 1;
        // An emptied set restarts from exact zero sums.
        if self.len == 0 {
            self.sums = ComponentSums::default();
        } else {
            self.sums.subtract(&removed);
        }

        trace!(event = "remove", value = %removed, len = self.len);
        Some(removed)
    }

    /// Returns true if some stored element is order-equivalent to `value`.
    pub fn contains(&self, value: &TriFuzzyNum) -> bool {
        self.buckets.contains_key(&value.rank())
    }

    /// Returns how many stored elements are order-equivalent to `value`.
    pub fn count(&self, value: &TriFuzzyNum) -> usize {
        self.buckets.get(&value.rank()).map_or(0, Vec::len)
    }

    /// Removes every element and resets the sums.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
        self.sums = ComponentSums::default();
    }

    /// Iterates in rank order; order-equivalent elements in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        self.buckets.values().flatten()
    }

    /// Returns the running sums.
    #[inline]
    pub fn sums(&self) -> ComponentSums {
        self.sums
    }

    /// Recomputes the sums by scanning every element, for verification.
    pub fn recompute_sums(&self) -> ComponentSums {
        let mut sums = ComponentSums::default();
        for value in self.iter() {
            sums.add(value);
        }
        sums
    }

    /// Returns the componentwise arithmetic mean of the stored elements.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::EmptyCollection`] when the set is empty.
    pub fn arithmetic_mean(&self) -> Result<TriFuzzyNum> {
        if self.is_empty() {
            return Err(FuzzyError::EmptyCollection {
                operation: "TriFuzzyNumSet::arithmetic_mean",
            });
        }

        let count = self.len as f64;
        let mean = TriFuzzyNum::new(
            self.sums.lower / count,
            self.sums.modal / count,
            self.sums.upper / count,
        );

        debug!(event = "mean", len = self.len, mean = %mean);
        Ok(mean)
    }
}

/// Picks which element of a bucket `remove` takes out.
pub(crate) fn removal_index(bucket: &[TriFuzzyNum], value: &TriFuzzyNum) -> usize {
    bucket
        .iter()
        .position(|stored| stored == value)
        .unwrap_or(0)
}

impl Extend<TriFuzzyNum> for TriFuzzyNumSet {
    fn extend<I: IntoIterator<Item = TriFuzzyNum>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> Extend<&'a TriFuzzyNum> for TriFuzzyNumSet {
    fn extend<I: IntoIterator<Item = &'a TriFuzzyNum>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<TriFuzzyNum> for TriFuzzyNumSet {
    fn from_iter<I: IntoIterator<Item = TriFuzzyNum>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a TriFuzzyNumSet {
    type Item = &'a TriFuzzyNum;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TriFuzzyNumSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriFuzzyNumSet")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("sums", &self.sums)
            .finish()
    }
}
