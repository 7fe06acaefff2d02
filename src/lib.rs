//! # Multiset
//! This library contains a hash based multiset (bag) [MultiSet] together with its set algebra:
//! - [multi_set] has the type itself with its in place operations and queries
//! - [algebra] has the free function forms folding several multisets into a new one as well as
//!   the relational queries [algebra::equal] and [algebra::subset]
//! - [pretty_print] has the expanded, quoted and compact renderings

pub mod algebra;
pub mod multi_set;
pub mod pretty_print;

#[cfg(test)]
mod test_util;

pub use algebra::{difference, equal, intersect, scale, subset, sum, union};
pub use multi_set::{Count, MultiSet};
