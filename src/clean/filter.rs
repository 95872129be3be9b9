//! Zero filter: drop rows with no financial signal.

use crate::record::RawMovie;

/// Whether a loaded cell holds a nonzero number.
///
/// Missing and non-numeric cells count as zero here; coercion happens later.
pub fn raw_is_nonzero(cell: Option<&str>) -> bool {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .is_some_and(|v| !v.is_nan() && v != 0.0)
}

/// Whether any of `budget`, `revenue`, `budget_adj`, `revenue_adj` is nonzero.
pub fn has_financial_signal(row: &RawMovie) -> bool {
    row.financial_cells().into_iter().any(raw_is_nonzero)
}

/// Keep rows with at least one nonzero financial cell, in input order.
pub fn retain_financial_rows(rows: Vec<RawMovie>) -> Vec<RawMovie> {
    rows.into_iter().filter(has_financial_signal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_classification() {
        assert!(raw_is_nonzero(Some("150000000")));
        assert!(raw_is_nonzero(Some(" 1.5e3 ")));
        assert!(raw_is_nonzero(Some("-4")));
        assert!(!raw_is_nonzero(Some("0")));
        assert!(!raw_is_nonzero(Some("0.0")));
        assert!(!raw_is_nonzero(Some("abc")));
        assert!(!raw_is_nonzero(None));
    }

    #[test]
    fn single_nonzero_column_is_enough() {
        let row = RawMovie {
            revenue_adj: Some("12".into()),
            budget: Some("0".into()),
            ..Default::default()
        };
        assert!(has_financial_signal(&row));
        assert!(!has_financial_signal(&RawMovie::default()));
    }
}
