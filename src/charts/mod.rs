//! Chart aggregations: twelve small tables across three dashboards.
//!
//! Every aggregator is a pure function of the cleaned `&[Movie]` slice, so the
//! three dashboards can be built in any order, or concurrently, with the same
//! result. Output ordering is fixed per table:
//!
//! | table | order |
//! |---|---|
//! | per-genre means | genre name ascending |
//! | per-year series | year ascending, one row per year |
//! | top-N rankings | value descending, ties in genre/row order |
//! | scatter points | cleaned-table row order |
//! | histograms | bin lower edge ascending |
//!
//! - [`profitability`] -- mean profit by genre and year, top-5 genres by total
//!   profit, top-10 directors by mean profit.
//! - [`revenue`] -- top-10 grossing movies, budget/rating vs revenue, revenue
//!   by year.
//! - [`budget`] -- budget distribution, mean budget by genre, budget vs
//!   rating, budget range of movies with revenue.

pub mod budget;
pub mod histogram;
pub mod profitability;
pub mod revenue;

use crate::record::Movie;
use crate::style::{ChartSpec, DashboardStyle};
use serde::Serialize;

pub use histogram::{Bin, HISTOGRAM_BINS, histogram};

/// A category and its (possibly undefined) aggregate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryValue {
    pub label: String,
    pub value: Option<f64>,
}

/// One point of a per-year series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearValue {
    pub year: f64,
    pub value: Option<f64>,
}

/// One entry of a top-N ranking; `rank` starts at 1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedValue {
    pub rank: usize,
    pub label: String,
    pub value: f64,
}

/// A pie slice and its share of the slices shown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareSlice {
    pub label: String,
    pub value: f64,
    pub percent: f64,
}

/// A scatter point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The table behind one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", content = "rows", rename_all = "snake_case")]
pub enum ChartData {
    Category(Vec<CategoryValue>),
    Yearly(Vec<YearValue>),
    Ranking(Vec<RankedValue>),
    Share(Vec<ShareSlice>),
    Scatter(Vec<Point>),
    Histogram(Vec<Bin>),
}

impl ChartData {
    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        match self {
            Self::Category(r) => r.len(),
            Self::Yearly(r) => r.len(),
            Self::Ranking(r) => r.len(),
            Self::Share(r) => r.len(),
            Self::Scatter(r) => r.len(),
            Self::Histogram(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A chart: what it asks, and the table that answers it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    pub spec: ChartSpec,
    pub data: ChartData,
}

/// Four charts sharing one style.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub style: DashboardStyle,
    pub charts: Vec<Chart>,
}

/// Build the three dashboards in order: profitability, revenue, budget.
pub fn build_dashboards(movies: &[Movie]) -> Vec<Dashboard> {
    vec![
        profitability::dashboard(movies),
        revenue::dashboard(movies),
        budget::dashboard(movies),
    ]
}

/// Owned labels for grouped keys.
pub(crate) fn category_values<S: Into<String>>(groups: Vec<(S, Option<f64>)>) -> Vec<CategoryValue> {
    groups
        .into_iter()
        .map(|(label, value)| CategoryValue {
            label: label.into(),
            value,
        })
        .collect()
}

/// Number a descending selection from 1.
pub(crate) fn ranked<S: Into<String>>(top: Vec<(S, f64)>) -> Vec<RankedValue> {
    top.into_iter()
        .enumerate()
        .map(|(i, (label, value))| RankedValue {
            rank: i + 1,
            label: label.into(),
            value,
        })
        .collect()
}
