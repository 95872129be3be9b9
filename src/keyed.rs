//! Explode and group-by helpers over row slices.
//!
//! Grouping goes through a `BTreeMap`, so output is always ordered by key.
//! That ordering is what makes repeated runs produce identical tables, and it
//! is the "natural" order that top-N selection falls back to on ties.
//!
//! ```
//! use marquee::combiners::AverageF64;
//! use marquee::keyed::{combine_by_key, explode};
//!
//! let rows = vec![
//!     (vec!["Action"], Some(10.0)),
//!     (vec!["Action"], Some(30.0)),
//!     (vec!["Action", "Drama"], Some(50.0)),
//! ];
//! let pairs = explode(&rows, |r| r.0.iter(), |r| r.1);
//! let means = combine_by_key(pairs, &AverageF64);
//! assert_eq!(means, vec![(&"Action", Some(30.0)), (&"Drama", Some(50.0))]);
//! ```

use crate::combiners::CombineFn;
use std::collections::BTreeMap;

/// One `(key, value)` pair per element of each row's list field.
///
/// A row with an empty list contributes nothing.
pub fn explode<'a, T, K, V, L, I, F>(rows: &'a [T], list: L, value: F) -> impl Iterator<Item = (K, V)>
where
    L: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
    F: Fn(&'a T) -> V,
    V: Clone,
{
    rows.iter().flat_map(move |row| {
        let v = value(row);
        list(row).into_iter().map(move |k| (k, v.clone()))
    })
}

/// Group `pairs` by key and fold each group through `comb`; ascending by key.
pub fn combine_by_key<K, V, A, O, C>(pairs: impl IntoIterator<Item = (K, V)>, comb: &C) -> Vec<(K, O)>
where
    K: Ord,
    C: CombineFn<V, A, O>,
{
    let mut groups: BTreeMap<K, A> = BTreeMap::new();
    for (k, v) in pairs {
        let acc = groups.entry(k).or_insert_with(|| comb.create());
        comb.add_input(acc, v);
    }
    groups
        .into_iter()
        .map(|(k, acc)| (k, comb.finish(acc)))
        .collect()
}
