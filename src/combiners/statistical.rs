//! Statistical combiners: `AverageF64`

use crate::combiners::CombineFn;

/* ===================== AverageF64 ===================== */

/// Mean of present values per key as `f64`.
///
/// Values must be convertible into `f64` via `Into<f64>`.
///
/// - Input: `Option<V>`, `None` is skipped and does not count
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `Option<f64>`, `None` when no value was present
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<Option<V>, (f64, u64), Option<f64>> for AverageF64
where
    V: Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: Option<V>) {
        if let Some(v) = v {
            acc.0 += v.into();
            acc.1 += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> Option<f64> {
        (acc.1 > 0).then(|| acc.0 / (acc.1 as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_do_not_count() {
        let mut acc = CombineFn::<Option<f64>, _, _>::create(&AverageF64);
        for v in [Some(10.0_f64), None, Some(30.0), Some(50.0)] {
            AverageF64.add_input(&mut acc, v);
        }
        assert_eq!(CombineFn::<Option<f64>, _, _>::finish(&AverageF64, acc), Some(30.0));
    }

    #[test]
    fn empty_group_has_no_mean() {
        let acc = CombineFn::<Option<f64>, _, _>::create(&AverageF64);
        assert_eq!(CombineFn::<Option<f64>, _, _>::finish(&AverageF64, acc), None);
    }
}
