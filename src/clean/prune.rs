//! Record pruner: drop rows missing a required analysis field.
//!
//! Required: `revenue`, `release_year`, `genres`, `vote_average`,
//! `vote_count`. The conversion to [`PrunedMovie`] makes those fields
//! non-optional, so later stages cannot see a pruned-away gap.

use crate::record::{NormalizedMovie, PrunedMovie};
use crate::validation::{
    ErrorCollector, Validate, ValidationError, ValidationResult, combine_validations, required,
};

impl Validate for NormalizedMovie {
    fn validate(&self) -> ValidationResult {
        combine_validations([
            required("revenue", &self.revenue),
            required("release_year", &self.release_year),
            required("genres", &self.genres),
            required("vote_average", &self.vote_average),
            required("vote_count", &self.vote_count),
        ])
    }
}

impl TryFrom<NormalizedMovie> for PrunedMovie {
    type Error = Vec<ValidationError>;

    fn try_from(m: NormalizedMovie) -> Result<Self, Self::Error> {
        match m {
            NormalizedMovie {
                original_title,
                homepage,
                tagline,
                keywords,
                production_companies,
                budget,
                revenue: Some(revenue),
                budget_adj,
                revenue_adj,
                vote_average: Some(vote_average),
                vote_count: Some(vote_count),
                release_year: Some(release_year),
                genres: Some(genres),
                cast,
                director,
            } => Ok(PrunedMovie {
                original_title,
                homepage,
                tagline,
                keywords,
                production_companies,
                budget,
                revenue,
                budget_adj,
                revenue_adj,
                vote_average,
                vote_count,
                release_year,
                genres,
                cast,
                director,
            }),
            incomplete => Err(incomplete.validate().err().unwrap_or_default()),
        }
    }
}

/// Keep rows carrying every required field; order is preserved and the
/// output is densely indexed from 0.
///
/// Excluded rows are silent unless `collector` is given.
pub fn prune(rows: Vec<NormalizedMovie>, mut collector: Option<&mut ErrorCollector>) -> Vec<PrunedMovie> {
    let mut out = Vec::with_capacity(rows.len());
    for (row, m) in rows.into_iter().enumerate() {
        let title = m.original_title.clone();
        match PrunedMovie::try_from(m) {
            Ok(p) => out.push(p),
            Err(errors) => {
                if let Some(c) = collector.as_deref_mut() {
                    c.add_error(row, title, errors);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::normalize::normalize_row;
    use crate::record::RawMovie;

    fn complete() -> RawMovie {
        RawMovie {
            original_title: Some("Heat".into()),
            revenue: Some("187436818".into()),
            release_year: Some("1995".into()),
            genres: Some("Action|Crime".into()),
            vote_average: Some("7.7".into()),
            vote_count: Some("1120".into()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_rows_survive_with_values() {
        let out = prune(vec![normalize_row(complete())], None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].release_year, 1995.0);
        assert_eq!(out[0].vote_count, 1120.0);
        assert_eq!(out[0].budget, None);
    }

    #[test]
    fn missing_fields_are_dropped_and_collected() {
        let no_revenue = RawMovie { revenue: Some("unknown".into()), ..complete() };
        let no_genres = RawMovie { genres: None, vote_count: None, ..complete() };
        let rows = vec![normalize_row(no_revenue), normalize_row(complete()), normalize_row(no_genres)];

        let mut collector = ErrorCollector::new();
        let out = prune(rows, Some(&mut collector));

        assert_eq!(out.len(), 1);
        assert_eq!(collector.error_count(), 2);
        assert_eq!(collector.errors()[0].row, 0);
        assert_eq!(collector.errors()[1].row, 2);
        assert_eq!(collector.errors()[1].errors.len(), 2);
        assert_eq!(collector.count_field("revenue"), 1);
    }
}
