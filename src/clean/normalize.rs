//! Column normalizer: best-effort numeric coercion and sentinel fill.
//!
//! Coercion never fails. A cell that does not parse, or parses to NaN,
//! becomes `None`. Anything else that parses is kept as written: negative
//! counts, fractional years and infinities all stay present.

use crate::record::{NOT_FOUND, NormalizedMovie, RawMovie};

/// Parse a cell as an `f64`; NaN is the missing value.
pub fn coerce_f64(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

/// Replace a missing free-text value with [`NOT_FOUND`].
pub fn fill_text(cell: Option<String>) -> String {
    cell.unwrap_or_else(|| NOT_FOUND.to_string())
}

/// Coerce the seven numeric columns and fill the four free-text columns.
pub fn normalize_row(row: RawMovie) -> NormalizedMovie {
    NormalizedMovie {
        budget: coerce_f64(row.budget.as_deref()),
        revenue: coerce_f64(row.revenue.as_deref()),
        budget_adj: coerce_f64(row.budget_adj.as_deref()),
        revenue_adj: coerce_f64(row.revenue_adj.as_deref()),
        vote_average: coerce_f64(row.vote_average.as_deref()),
        vote_count: coerce_f64(row.vote_count.as_deref()),
        release_year: coerce_f64(row.release_year.as_deref()),
        homepage: fill_text(row.homepage),
        tagline: fill_text(row.tagline),
        keywords: fill_text(row.keywords),
        production_companies: fill_text(row.production_companies),
        original_title: row.original_title,
        genres: row.genres,
        cast: row.cast,
        director: row.director,
    }
}

/// Normalize every row, preserving order.
pub fn normalize(rows: Vec<RawMovie>) -> Vec<NormalizedMovie> {
    rows.into_iter().map(normalize_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_numbers_become_missing() {
        assert_eq!(coerce_f64(Some("1.5")), Some(1.5));
        assert_eq!(coerce_f64(Some(" 42 ")), Some(42.0));
        assert_eq!(coerce_f64(Some("n/a")), None);
        assert_eq!(coerce_f64(Some("NaN")), None);
        assert_eq!(coerce_f64(None), None);
    }

    #[test]
    fn parseable_oddities_stay_present() {
        assert_eq!(coerce_f64(Some("inf")), Some(f64::INFINITY));
        assert_eq!(coerce_f64(Some("-3")), Some(-3.0));
        assert_eq!(coerce_f64(Some("2015.5")), Some(2015.5));
    }

    #[test]
    fn free_text_is_filled_and_lists_left_raw() {
        let n = normalize_row(RawMovie {
            tagline: Some("In space...".into()),
            cast: None,
            vote_count: Some("-3".into()),
            ..Default::default()
        });
        assert_eq!(n.tagline, "In space...");
        assert_eq!(n.homepage, NOT_FOUND);
        assert_eq!(n.keywords, NOT_FOUND);
        assert_eq!(n.production_companies, NOT_FOUND);
        assert_eq!(n.cast, None);
        assert_eq!(n.vote_count, Some(-3.0));
        assert_eq!(n.release_year, None);
    }
}
