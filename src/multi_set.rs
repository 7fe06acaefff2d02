//! ## Multisets
//! This module provides a hash based multiset implementation, mapping every distinct element to
//! the number of times it occurs. The key exported data structure is [MultiSet].
//!
//! A multiset is *normalized* if every stored count is strictly positive. Raw construction
//! through [MultiSet::from_counts] may break this, [MultiSet::normalize] restores it. Every other
//! mutating operation removes the elements whose count it drives to `0` or below.

use std::{
    borrow::Borrow,
    collections::hash_map::{self, Entry},
    hash::Hash,
};

use log::{debug, trace};
use rustc_hash::FxHashMap;

/// Multiplicity of an element. Signed so that raw, not yet normalized, multisets can be
/// represented.
pub type Count = i64;

/// Multisets containing values of type `T`.
#[derive(Clone)]
pub struct MultiSet<T> {
    counts: FxHashMap<T, Count>,
}

impl<T> MultiSet<T> {
    /// Create a new empty multiset.
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Number of distinct elements stored, this is `O(1)`. See [MultiSet::cardinality] for the
    /// number of elements including duplicates.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the set is empty, this is `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Check whether every stored count is strictly positive.
    pub fn is_normalized(&self) -> bool {
        self.counts.values().all(|count| *count > 0)
    }

    /// Drop every element with a count of `0` or below.
    pub fn normalize(&mut self) {
        let before = self.counts.len();
        self.counts.retain(|_, count| *count > 0);
        let dropped = before - self.counts.len();
        if dropped > 0 {
            trace!("Normalize dropped {} non-positive entries", dropped);
        }
    }

    /// Obtain an iterator over all distinct elements together with their counts. The order is
    /// the unspecified order of the underlying map.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Obtain an iterator over all distinct elements.
    pub fn elements(&self) -> hash_map::Keys<'_, T, Count> {
        self.counts.keys()
    }

    /// Obtain an iterator that yields every element as often as it occurs.
    pub fn expanded(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(elem, count)| std::iter::repeat_n(elem, (*count).max(0) as usize))
    }

    /// Total number of elements including duplicates, non-positive counts are ignored.
    pub fn cardinality(&self) -> Count {
        self.counts
            .values()
            .filter(|count| **count > 0)
            .fold(0, |acc: Count, count| acc.saturating_add(*count))
    }

    /// Find the highest count and all elements that reach it. The elements are returned in
    /// unspecified order. An empty multiset has no mode and reports `(vec![], 0)`.
    pub fn mode(&self) -> (Vec<&T>, Count) {
        let max = self
            .counts
            .values()
            .copied()
            .filter(|count| *count > 0)
            .max()
            .unwrap_or(0);
        if max == 0 {
            return (Vec::new(), 0);
        }
        let elems = self
            .counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(elem, _)| elem)
            .collect();
        (elems, max)
    }

    /// Multiply every count by `factor`. Scaling by `0` or a negative factor empties the
    /// multiset.
    pub fn scale(&mut self, factor: Count) {
        if factor <= 0 {
            debug!(
                "Scale by {} clears {} distinct elements",
                factor,
                self.counts.len()
            );
            self.counts.clear();
            return;
        }
        for count in self.counts.values_mut() {
            *count = count.saturating_mul(factor);
        }
        self.normalize();
    }
}

impl<T: Eq + Hash> MultiSet<T> {
    /// Create a multiset from raw `(element, count)` pairs. The result is not normalized, if a
    /// key occurs more than once the last pair wins.
    pub fn from_counts<I: IntoIterator<Item = (T, Count)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }

    /// The count of `elem`, `0` if it is absent.
    pub fn count<Q>(&self, elem: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(elem).copied().unwrap_or(0)
    }

    /// Check whether `elem` occurs at least `n` times. Absent elements count as `0` so
    /// `contains(x, 0)` always holds.
    pub fn contains<Q>(&self, elem: &Q, n: Count) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.count(elem) >= n
    }

    /// Set the count of `elem` to exactly `n`, removing it if `n <= 0`.
    pub fn assign_count(&mut self, elem: T, n: Count) {
        if n > 0 {
            self.counts.insert(elem, n);
        } else {
            self.counts.remove(&elem);
        }
    }

    /// Add `n` (possibly negative) to the count of `elem`, removing it if the result is `<= 0`.
    pub fn add_element_count(&mut self, elem: T, n: Count) {
        match self.counts.entry(elem) {
            Entry::Occupied(mut occupied) => {
                let new = occupied.get().saturating_add(n);
                if new > 0 {
                    *occupied.get_mut() = new;
                } else {
                    occupied.remove();
                }
            }
            Entry::Vacant(vacant) => {
                if n > 0 {
                    vacant.insert(n);
                }
            }
        }
    }

    /// Raise the count of `elem` to at least `n`.
    pub fn union_element(&mut self, elem: T, n: Count) {
        match self.counts.entry(elem) {
            Entry::Occupied(mut occupied) => {
                let new = (*occupied.get()).max(n);
                if new > 0 {
                    *occupied.get_mut() = new;
                } else {
                    occupied.remove();
                }
            }
            Entry::Vacant(vacant) => {
                if n > 0 {
                    vacant.insert(n);
                }
            }
        }
    }

    /// Lower the count of `elem` to at most `n`.
    pub fn intersect_element(&mut self, elem: T, n: Count) {
        // An absent element stays absent as min(0, n) <= 0.
        if let Entry::Occupied(mut occupied) = self.counts.entry(elem) {
            let new = (*occupied.get()).min(n);
            if new > 0 {
                *occupied.get_mut() = new;
            } else {
                occupied.remove();
            }
        }
    }

    /// Add a single occurrence of `elem`.
    pub fn insert(&mut self, elem: T) {
        self.add_element_count(elem, 1);
    }

    /// Remove all occurrences of `elem`, returning its previous count.
    pub fn remove<Q>(&mut self, elem: &Q) -> Count
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.remove(elem).unwrap_or(0)
    }

    /// Check whether every element occurs in `other` at least as often as in `self`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .all(|(elem, count)| *count <= other.count(elem))
    }
}

impl<T: Eq + Hash + Clone> MultiSet<T> {
    /// Combine `self` with `other` element wise, `rule` receives the count in `self` and the
    /// count in `other` with absent elements counting as `0`.
    fn combine(&mut self, other: &Self, rule: impl Fn(Count, Count) -> Count) {
        for (elem, count) in self.counts.iter_mut() {
            *count = rule(*count, other.count(elem));
        }
        for (elem, count) in other.iter() {
            if !self.counts.contains_key(elem) {
                self.assign_count(elem.clone(), rule(0, count));
            }
        }
        self.normalize();
    }

    /// Turn `self` into the union of `self` and `other`, taking the maximum of both counts.
    pub fn union(&mut self, other: &Self) {
        self.combine(other, Count::max);
    }

    /// Turn `self` into the intersection of `self` and `other`, taking the minimum of both
    /// counts.
    pub fn intersect(&mut self, other: &Self) {
        self.combine(other, Count::min);
    }

    /// Add all counts of `other` to `self`.
    pub fn add_count(&mut self, other: &Self) {
        self.combine(other, Count::saturating_add);
    }

    /// Subtract all counts of `other` from `self`, elements that drop to `0` or below vanish.
    pub fn subtract_count(&mut self, other: &Self) {
        self.combine(other, |lhs, rhs| lhs.saturating_sub(rhs).max(0));
    }
}

impl<T> Default for MultiSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for MultiSet<T> {
    // Absent elements and non-positive counts are indistinguishable.
    fn eq(&self, other: &Self) -> bool {
        let covered = |lhs: &Self, rhs: &Self| {
            lhs.counts
                .iter()
                .all(|(elem, count)| (*count).max(0) == rhs.count(elem).max(0))
        };
        covered(self, other) && covered(other, self)
    }
}

impl<T: Eq + Hash> Eq for MultiSet<T> {}

impl<T: Eq + Hash> From<FxHashMap<T, Count>> for MultiSet<T> {
    fn from(counts: FxHashMap<T, Count>) -> Self {
        Self { counts }
    }
}

impl<T: Eq + Hash> FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for MultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

impl<T> IntoIterator for MultiSet<T> {
    type Item = (T, Count);

    type IntoIter = hash_map::IntoIter<T, Count>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MultiSet<T> {
    type Item = (&'a T, Count);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(element, count)` pairs of a [MultiSet].
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, Count>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, Count);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(elem, count)| (elem, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
