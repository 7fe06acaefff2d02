//! ## Pretty Printing
//! This module contains the textual renderings of a [MultiSet]:
//! - the expanded form `[a a b]` through [fmt::Display], every element repeated by its count
//! - the compact form `[a:2 b:1]` through the alternate flag `{:#}` and [fmt::Debug]
//! - the quoted form `["a" "a" "b"]` through [MultiSet::quoted], which renders every copy with
//!   the element's [fmt::Debug] implementation
//!
//! None of these impose an order on the elements, it is the unspecified iteration order of the
//! multiset.

use std::fmt;

use crate::multi_set::{Count, MultiSet};

/// Wrapper rendering a [MultiSet] in its quoted form, see [MultiSet::quoted].
pub struct Quoted<'a, T>(&'a MultiSet<T>);

impl<T> MultiSet<T> {
    /// Render every copy of every element quoted, i.e. with its [fmt::Debug] implementation.
    pub fn quoted(&self) -> Quoted<'_, T> {
        Quoted(self)
    }
}

fn write_tokens<I, F>(f: &mut fmt::Formatter<'_>, tokens: I, mut write_token: F) -> fmt::Result
where
    I: Iterator,
    F: FnMut(&mut fmt::Formatter<'_>, I::Item) -> fmt::Result,
{
    f.write_str("[")?;
    for (idx, token) in tokens.enumerate() {
        if idx > 0 {
            f.write_str(" ")?;
        }
        write_token(f, token)?;
    }
    f.write_str("]")
}

fn write_expanded<T>(
    set: &MultiSet<T>,
    f: &mut fmt::Formatter<'_>,
    write_elem: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write_tokens(f, set.expanded(), write_elem)
}

fn write_compact<T>(
    set: &MultiSet<T>,
    f: &mut fmt::Formatter<'_>,
    write_pair: impl Fn(&mut fmt::Formatter<'_>, &T, Count) -> fmt::Result,
) -> fmt::Result {
    write_tokens(f, set.iter(), |f, (elem, count)| write_pair(f, elem, count))
}

impl<T: fmt::Display> fmt::Display for MultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write_compact(self, f, |f, elem, count| write!(f, "{}:{}", elem, count))
        } else {
            write_expanded(self, f, |f, elem| write!(f, "{}", elem))
        }
    }
}

// Debug shows the stored counts verbatim, including non-positive ones.
impl<T: fmt::Debug> fmt::Debug for MultiSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_compact(self, f, |f, elem, count| write!(f, "{:?}:{}", elem, count))
    }
}

impl<T: fmt::Debug> fmt::Display for Quoted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expanded(self.0, f, |f, elem| write!(f, "{:?}", elem))
    }
}
