//! Basic arithmetic combiners: Sum

use crate::combiners::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Sum<T> ===================== */

/// Sum of present values per key.
///
/// - Input: `Option<T>`, `None` is skipped
/// - Accumulator: `T`
/// - Output: `T` (`T::default()` for a group with no present values)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);
impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<Option<T>, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: Option<T>) {
        if let Some(v) = v {
            *acc = take(acc) + v;
        }
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}
