//! Metric deriver.

use crate::record::Movie;

/// `revenue - budget`, missing when `budget` is.
pub fn profit_of(revenue: f64, budget: Option<f64>) -> Option<f64> {
    budget.map(|b| revenue - b)
}

/// Set `profit` on every row.
pub fn derive_profit(rows: Vec<Movie>) -> Vec<Movie> {
    rows.into_iter()
        .map(|m| Movie {
            profit: profit_of(m.revenue, m.budget),
            ..m
        })
        .collect()
}
