//! Built-in combiners for keyed aggregation.
//!
//! A combiner folds the values of one group into an accumulator and finishes
//! it into an output. Inputs are `Option`s: a missing value is skipped rather
//! than poisoning the group, mirroring how the charts treat a missing
//! `budget` (and therefore `profit`).
//!
//! - [`Sum<T>`] -- sum of present values; an all-missing group sums to zero.
//! - [`AverageF64`] -- mean of present values; an all-missing group is `None`.
//! - [`TopK<T>`] -- the K items with the largest keys, stable on ties.
//!
//! # Examples
//! ```
//! use marquee::combiners::{AverageF64, Sum};
//! use marquee::keyed::combine_by_key;
//!
//! let rows = vec![("Action", Some(10.0)), ("Drama", None), ("Action", Some(30.0))];
//!
//! let means = combine_by_key(rows.clone(), &AverageF64);
//! assert_eq!(means, vec![("Action", Some(20.0)), ("Drama", None)]);
//!
//! let sums = combine_by_key(rows, &Sum::<f64>::new());
//! assert_eq!(sums, vec![("Action", 40.0), ("Drama", 0.0)]);
//! ```

mod basic;
mod statistical;
mod topk;

pub use basic::Sum;
pub use statistical::AverageF64;
pub use topk::{Ranked, TopK, top_k_by};

/// Fold a group of `V` values through an accumulator `A` into an output `O`.
pub trait CombineFn<V, A, O> {
    /// Fresh accumulator for an empty group.
    fn create(&self) -> A;
    /// Fold one value into the accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Produce the group's output.
    fn finish(&self, acc: A) -> O;
}
