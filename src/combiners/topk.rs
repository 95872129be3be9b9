//! Top-K combiner for selecting the largest values

use crate::combiners::CombineFn;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::marker::PhantomData;

/// An item ranked by a float key.
///
/// Ordering is total: larger `key` ranks higher, and among equal keys the
/// smaller `seq` (earlier arrival) ranks higher. `item` never takes part in
/// the comparison.
#[derive(Clone, Debug)]
pub struct Ranked<T> {
    pub key: OrderedFloat<f64>,
    pub seq: usize,
    pub item: T,
}

impl<T> Ranked<T> {
    pub fn new(key: f64, seq: usize, item: T) -> Self {
        Self {
            key: OrderedFloat(key),
            seq,
            item,
        }
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

/* ===================== TopK<T> ===================== */

/// The **K** highest-ranked items.
///
/// The accumulator maintains a **min-heap** (via `BinaryHeap<Reverse<_>>`) of
/// size ≤ `k`, so memory is bounded by `k`.
///
/// - Accumulator: `BinaryHeap<Reverse<Ranked<T>>>`
/// - Output: `Vec<T>` sorted by key descending, ties in arrival order.
///
/// `k == 0` always produces an empty vector.
#[derive(Clone, Debug)]
pub struct TopK<T> {
    /// Number of items to keep.
    pub k: usize,
    _m: PhantomData<T>,
}
impl<T> TopK<T> {
    /// Create a new `TopK` with the given `k`.
    #[must_use]
    pub const fn new(k: usize) -> Self {
        Self { k, _m: PhantomData }
    }
}

impl<T> CombineFn<Ranked<T>, BinaryHeap<Reverse<Ranked<T>>>, Vec<T>> for TopK<T> {
    fn create(&self) -> BinaryHeap<Reverse<Ranked<T>>> {
        BinaryHeap::with_capacity(self.k + 1)
    }

    fn add_input(&self, acc: &mut BinaryHeap<Reverse<Ranked<T>>>, v: Ranked<T>) {
        acc.push(Reverse(v));
        if acc.len() > self.k {
            acc.pop();
        } // drop lowest-ranked
    }

    fn finish(&self, acc: BinaryHeap<Reverse<Ranked<T>>>) -> Vec<T> {
        // ascending by Reverse == descending by rank
        acc.into_sorted_vec()
            .into_iter()
            .map(|Reverse(r)| r.item)
            .collect()
    }
}

/// Select the `k` items with the largest `key`, stable on ties.
///
/// Items whose key is `None` or NaN are skipped.
pub fn top_k_by<T, I, F>(items: I, k: usize, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<f64>,
{
    let top = TopK::new(k);
    let mut acc = top.create();
    for (seq, item) in items.into_iter().enumerate() {
        if let Some(v) = key(&item).filter(|v| !v.is_nan()) {
            top.add_input(&mut acc, Ranked::new(v, seq, item));
        }
    }
    top.finish(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_largest_descending() {
        let out = top_k_by(vec![3.0, 7.0, 5.0, 1.0], 2, |v| Some(*v));
        assert_eq!(out, vec![7.0, 5.0]);
    }

    #[test]
    fn ties_keep_arrival_order() {
        let items = vec![("a", 5.0), ("b", 9.0), ("c", 5.0), ("d", 5.0), ("e", 1.0)];
        let out = top_k_by(items, 3, |(_, v)| Some(*v));
        let labels: Vec<_> = out.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn fewer_items_than_k() {
        let out = top_k_by(vec![2.0, 4.0], 10, |v| Some(*v));
        assert_eq!(out, vec![4.0, 2.0]);
        assert!(top_k_by(vec![2.0], 0, |v| Some(*v)).is_empty());
    }

    #[test]
    fn missing_and_nan_keys_are_skipped() {
        let out = top_k_by(vec![Some(1.0), None, Some(f64::NAN), Some(-2.0)], 5, |v| *v);
        assert_eq!(out, vec![Some(1.0), Some(-2.0)]);
    }
}
