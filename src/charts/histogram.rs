//! Equal-width binning for the budget histograms.

use serde::Serialize;

/// Default bin count for budget histograms.
pub const HISTOGRAM_BINS: usize = 30;

/// One histogram bin over `[lower, upper)`; the last bin is closed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Count `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Non-finite values are ignored. No values (or `bins == 0`) yields no bins;
/// when every value is equal a single bin holds them all.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![Bin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let span = max - min;
    let width = span / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - min) / span) * bins as f64) as usize;
        out[idx.min(bins - 1)].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_lands_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let counts: Vec<_> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[3].upper, 4.0);
    }

    #[test]
    fn counts_sum_to_input_len() {
        let values: Vec<f64> = (0..97).map(|i| f64::from(i) * 1.37).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 97);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(histogram(&[], 30).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
        assert_eq!(histogram(&[5.0, 5.0], 30), vec![Bin { lower: 5.0, upper: 5.0, count: 2 }]);
    }
}
