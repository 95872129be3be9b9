//! Row types for each stage of the cleaning pipeline.
//!
//! A movie moves through four shapes, each produced by exactly one stage:
//!
//! - [`RawMovie`] -- cells as loaded, `None` for missing cells.
//! - [`NormalizedMovie`] -- numeric columns coerced, free-text columns filled.
//! - [`PrunedMovie`] -- required analysis fields are guaranteed present.
//! - [`Movie`] -- list-valued fields split, directors repaired, profit derived.
//!
//! Encoding the stage in the type means a later stage can never observe a
//! record that skipped an earlier one.

use serde::Serialize;

/// Placeholder written into free-text columns that were missing.
pub const NOT_FOUND: &str = "Not Found";

/// Token used when a movie has no director at all.
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Delimiter of list-valued source fields.
pub const LIST_DELIMITER: char = '|';

/// Columns the loader requires in the input header.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "original_title",
    "homepage",
    "tagline",
    "keywords",
    "production_companies",
    "budget",
    "revenue",
    "budget_adj",
    "revenue_adj",
    "vote_average",
    "vote_count",
    "release_year",
    "genres",
    "cast",
    "director",
];

/// One row of the source table, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawMovie {
    pub original_title: Option<String>,
    pub homepage: Option<String>,
    pub tagline: Option<String>,
    pub keywords: Option<String>,
    pub production_companies: Option<String>,
    pub budget: Option<String>,
    pub revenue: Option<String>,
    pub budget_adj: Option<String>,
    pub revenue_adj: Option<String>,
    pub vote_average: Option<String>,
    pub vote_count: Option<String>,
    pub release_year: Option<String>,
    pub genres: Option<String>,
    pub cast: Option<String>,
    pub director: Option<String>,
}

impl RawMovie {
    /// The four financial cells consulted by the zero filter.
    pub fn financial_cells(&self) -> [Option<&str>; 4] {
        [
            self.budget.as_deref(),
            self.revenue.as_deref(),
            self.budget_adj.as_deref(),
            self.revenue_adj.as_deref(),
        ]
    }
}

/// A row after numeric coercion and sentinel fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMovie {
    pub original_title: Option<String>,
    pub homepage: String,
    pub tagline: String,
    pub keywords: String,
    pub production_companies: String,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    pub budget_adj: Option<f64>,
    pub revenue_adj: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<f64>,
    pub release_year: Option<f64>,
    pub genres: Option<String>,
    pub cast: Option<String>,
    pub director: Option<String>,
}

/// A row that carries every field the aggregations depend on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrunedMovie {
    pub original_title: Option<String>,
    pub homepage: String,
    pub tagline: String,
    pub keywords: String,
    pub production_companies: String,
    pub budget: Option<f64>,
    pub revenue: f64,
    pub budget_adj: Option<f64>,
    pub revenue_adj: Option<f64>,
    pub vote_average: f64,
    pub vote_count: f64,
    pub release_year: f64,
    pub genres: String,
    pub cast: Option<String>,
    pub director: Option<String>,
}

/// A fully cleaned movie, ready for aggregation.
///
/// List-valued fields are never absent: a missing source value is an empty
/// vector (or `["Unknown"]` for `director`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub original_title: Option<String>,
    pub homepage: String,
    pub tagline: String,
    pub keywords: String,
    pub budget: Option<f64>,
    pub revenue: f64,
    pub budget_adj: Option<f64>,
    pub revenue_adj: Option<f64>,
    pub vote_average: f64,
    pub vote_count: f64,
    pub release_year: f64,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub production_companies: Vec<String>,
    pub director: Vec<String>,
    /// `revenue - budget`; `None` until derived, and whenever `budget` is missing.
    pub profit: Option<f64>,
}

impl Movie {
    /// Display title, empty when the source had none.
    pub fn title(&self) -> &str {
        self.original_title.as_deref().unwrap_or_default()
    }
}
