//! ## Multiset Algebra
//! This module contains the free function forms of the [MultiSet] operations. Unlike the methods
//! they never touch their operands, the variadic ones fold any number of borrowed multisets from
//! left to right into a fresh, normalized result:
//! - [union], [intersect] and [sum] accept zero or more operands and return the empty multiset
//!   when given none. Note that this makes `intersect([])` empty rather than a universal set.
//! - [difference] takes exactly two operands as it is not associative.
//!
//! Additionally the borrowed operators `|`, `&`, `+` and `-` are provided, mirroring
//! [std::collections::HashSet].

use std::{
    hash::Hash,
    ops::{Add, BitAnd, BitOr, Sub},
};

use log::trace;

use crate::multi_set::{Count, MultiSet};

fn fold<'a, T, I>(multisets: I, op: impl Fn(&mut MultiSet<T>, &MultiSet<T>)) -> MultiSet<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a MultiSet<T>>,
{
    let mut iter = multisets.into_iter();
    let Some(first) = iter.next() else {
        return MultiSet::new();
    };
    let mut acc = first.clone();
    acc.normalize();
    let mut operands = 1;
    for set in iter {
        op(&mut acc, set);
        operands += 1;
    }
    trace!(
        "Folded {} operands into {} distinct elements",
        operands,
        acc.len()
    );
    acc
}

/// The union of all `multisets`, every element gets the maximum of its counts.
pub fn union<'a, T, I>(multisets: I) -> MultiSet<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a MultiSet<T>>,
{
    fold(multisets, MultiSet::union)
}

/// The intersection of all `multisets`, every element gets the minimum of its counts.
pub fn intersect<'a, T, I>(multisets: I) -> MultiSet<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a MultiSet<T>>,
{
    fold(multisets, MultiSet::intersect)
}

/// The sum of all `multisets`, every element gets the sum of its counts.
pub fn sum<'a, T, I>(multisets: I) -> MultiSet<T>
where
    T: Eq + Hash + Clone + 'a,
    I: IntoIterator<Item = &'a MultiSet<T>>,
{
    fold(multisets, MultiSet::add_count)
}

/// `lhs` with all counts of `rhs` subtracted.
pub fn difference<T: Eq + Hash + Clone>(lhs: &MultiSet<T>, rhs: &MultiSet<T>) -> MultiSet<T> {
    fold([lhs, rhs], MultiSet::subtract_count)
}

/// A copy of `set` with every count multiplied by `factor`.
pub fn scale<T: Clone>(set: &MultiSet<T>, factor: Count) -> MultiSet<T> {
    let mut scaled = set.clone();
    scaled.scale(factor);
    scaled
}

/// Check whether `lhs` and `rhs` contain the same elements with the same counts.
pub fn equal<T: Eq + Hash>(lhs: &MultiSet<T>, rhs: &MultiSet<T>) -> bool {
    lhs == rhs
}

/// Check whether no element occurs more often in `lhs` than in `rhs`.
pub fn subset<T: Eq + Hash>(lhs: &MultiSet<T>, rhs: &MultiSet<T>) -> bool {
    lhs.is_subset(rhs)
}

impl<T: Eq + Hash + Clone> BitOr<&MultiSet<T>> for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn bitor(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        union([self, rhs])
    }
}

impl<T: Eq + Hash + Clone> BitAnd<&MultiSet<T>> for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn bitand(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        intersect([self, rhs])
    }
}

impl<T: Eq + Hash + Clone> Add<&MultiSet<T>> for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn add(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        sum([self, rhs])
    }
}

impl<T: Eq + Hash + Clone> Sub<&MultiSet<T>> for &MultiSet<T> {
    type Output = MultiSet<T>;

    fn sub(self, rhs: &MultiSet<T>) -> MultiSet<T> {
        difference(self, rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::{multi_set::MultiSet, test_util::init_logger, test_util::sorted};

    use super::{difference, equal, intersect, scale, subset, sum, union};

    fn ms(pairs: &[(&'static str, i64)]) -> MultiSet<&'static str> {
        MultiSet::from_counts(pairs.iter().copied())
    }

    fn none() -> [&'static MultiSet<&'static str>; 0] {
        []
    }

    // A handful of operands used for the algebraic laws below.
    fn samples() -> Vec<MultiSet<&'static str>> {
        vec![
            MultiSet::new(),
            ms(&[("a", 2), ("b", 1)]),
            ms(&[("b", 3), ("c", 1)]),
            ms(&[("a", 1), ("c", 4), ("d", 2)]),
        ]
    }

    #[test]
    fn union_test() {
        init_logger();
        assert!(union(none()).is_empty());
        let m1 = MultiSet::new();
        let m2 = ms(&[("a", 2), ("b", 1)]);
        let m3 = ms(&[("b", 3), ("c", 1)]);
        let result = union([&m1, &m2, &m3]);
        assert_eq!(sorted(result.to_string()), "[a a b b b c]");
        assert_eq!(union([&m2, &m3]), ms(&[("a", 2), ("b", 3), ("c", 1)]));
        // operands are left untouched
        assert_eq!(m2, ms(&[("a", 2), ("b", 1)]));
    }

    #[test]
    fn intersect_test() {
        assert!(intersect(none()).is_empty());
        let m1 = ms(&[("a", 2), ("b", 1), ("c", 2)]);
        let m2 = ms(&[("a", 2), ("b", 3)]);
        let m3 = ms(&[("b", 3), ("c", 1)]);
        assert_eq!(intersect([&m1, &m2, &m3]), ms(&[("b", 1)]));
        assert_eq!(sorted(intersect(vec![&m1, &m2, &m3]).to_string()), "[b]");
    }

    #[test]
    fn sum_test() {
        assert!(sum(none()).is_empty());
        let m1 = ms(&[("b", 1)]);
        let m2 = ms(&[("a", 2), ("b", 1)]);
        let m3 = ms(&[("b", 2), ("c", 1)]);
        assert_eq!(sorted(sum([&m1, &m2, &m3]).to_string()), "[a a b b b b c]");
    }

    #[test]
    fn difference_test() {
        let m1 = ms(&[("a", 2), ("b", 1)]);
        let m2 = ms(&[("a", 1), ("b", 2), ("c", 1)]);
        assert_eq!(difference(&m1, &m2), ms(&[("a", 1)]));
        assert!(difference(&m2, &m2).is_empty());
        assert_eq!(difference(&m2, &m1), ms(&[("b", 1), ("c", 1)]));
    }

    #[test]
    fn single_operand_is_normalized_test() {
        let raw = ms(&[("a", 2), ("b", -1)]);
        for result in [union([&raw]), intersect([&raw]), sum([&raw])] {
            assert!(result.is_normalized());
            assert_eq!(result.len(), 1);
        }
    }

    #[test]
    fn scale_test() {
        let m = ms(&[("a", 2), ("b", 1)]);
        assert_eq!(sorted(scale(&m, 3).to_string()), "[a a a a a a b b b]");
        assert!(scale(&m, 0).is_empty());
        assert!(scale(&m, -1).is_empty());
        assert_eq!(m.cardinality(), 3);
        for set in samples() {
            assert!(scale(&set, 0).is_empty());
        }
    }

    #[test]
    fn equal_test() {
        let m1 = ms(&[("a", 2)]);
        let m2 = ms(&[("a", 2), ("b", 1)]);
        let m3 = ms(&[("a", 2), ("c", 1)]);
        let m4 = ms(&[("b", 1), ("a", 2)]);
        assert!(!equal(&m1, &m2));
        assert!(!equal(&m2, &m3));
        assert!(equal(&m2, &m4));
        for a in samples() {
            assert!(equal(&a, &a));
            for b in samples() {
                assert_eq!(equal(&a, &b), equal(&b, &a));
            }
        }
    }

    #[test]
    fn subset_test() {
        let m1 = ms(&[("a", 2)]);
        let m2 = ms(&[("a", 2), ("b", 1)]);
        let m3 = ms(&[("b", 3), ("c", 1)]);
        assert!(subset(&m1, &m1));
        assert!(subset(&m1, &m2));
        assert!(!subset(&m2, &m3));
        for a in samples() {
            assert!(subset(&a, &a));
        }
    }

    #[test]
    fn associativity_and_commutativity_test() {
        let sets = samples();
        for a in &sets {
            for b in &sets {
                assert_eq!(union([a, b]), union([b, a]));
                assert_eq!(intersect([a, b]), intersect([b, a]));
                assert_eq!(sum([a, b]), sum([b, a]));
                for c in &sets {
                    assert_eq!(union([&union([a, b]), c]), union([a, &union([b, c])]));
                    assert_eq!(
                        intersect([&intersect([a, b]), c]),
                        intersect([a, &intersect([b, c])])
                    );
                    assert_eq!(sum([&sum([a, b]), c]), sum([a, &sum([b, c])]));
                }
            }
        }
    }

    #[test]
    fn cardinality_additivity_test() {
        let sets = samples();
        for a in &sets {
            for b in &sets {
                assert_eq!(sum([a, b]).cardinality(), a.cardinality() + b.cardinality());
            }
        }
    }

    #[test]
    fn results_are_normalized_test() {
        let sets = samples();
        for a in &sets {
            for b in &sets {
                assert!(union([a, b]).is_normalized());
                assert!(intersect([a, b]).is_normalized());
                assert!(sum([a, b]).is_normalized());
                assert!(difference(a, b).is_normalized());
            }
        }
    }

    #[test]
    fn operator_test() {
        let m1 = ms(&[("a", 2), ("b", 1)]);
        let m2 = ms(&[("b", 3), ("c", 1)]);
        assert_eq!(&m1 | &m2, ms(&[("a", 2), ("b", 3), ("c", 1)]));
        assert_eq!(&m1 & &m2, ms(&[("b", 1)]));
        assert_eq!(&m1 + &m2, ms(&[("a", 2), ("b", 4), ("c", 1)]));
        assert_eq!(&m1 - &m2, ms(&[("a", 2)]));
    }
}
