//! Dashboard 2: what drives revenue?

use super::{Chart, ChartData, Dashboard, Point, RankedValue, YearValue, ranked};
use crate::combiners::{Sum, top_k_by};
use crate::keyed::combine_by_key;
use crate::record::Movie;
use crate::style::{ChartKind, ChartSpec, DashboardStyle};
use ordered_float::OrderedFloat;

/// Movies shown in the top-grossing ranking.
pub const TOP_GROSSING: usize = 10;

/// The `n` movies with the largest revenue, one entry per row.
///
/// Equal revenues keep table order; duplicate titles stay separate entries.
pub fn top_grossing(movies: &[Movie], n: usize) -> Vec<RankedValue> {
    let top = top_k_by(movies.iter(), n, |m| Some(m.revenue));
    ranked(top.into_iter().map(|m| (m.title(), m.revenue)).collect())
}

/// `(budget, revenue)` for every movie with a budget.
pub fn budget_vs_revenue(movies: &[Movie]) -> Vec<Point> {
    movies
        .iter()
        .filter_map(|m| m.budget.map(|b| Point { x: b, y: m.revenue }))
        .collect()
}

/// `(vote_average, revenue)` for every movie.
pub fn rating_vs_revenue(movies: &[Movie]) -> Vec<Point> {
    movies
        .iter()
        .map(|m| Point {
            x: m.vote_average,
            y: m.revenue,
        })
        .collect()
}

/// Total revenue per release year, years ascending.
pub fn revenue_by_year(movies: &[Movie]) -> Vec<YearValue> {
    let pairs = movies.iter().map(|m| (OrderedFloat(m.release_year), Some(m.revenue)));
    combine_by_key(pairs, &Sum::<f64>::new())
        .into_iter()
        .map(|(year, total)| YearValue {
            year: year.into_inner(),
            value: Some(total),
        })
        .collect()
}

pub fn dashboard(movies: &[Movie]) -> Dashboard {
    Dashboard {
        style: DashboardStyle::revenue(),
        charts: vec![
            Chart {
                spec: ChartSpec::new(
                    "top_grossing",
                    "What are the top-grossing movies?",
                    ChartKind::HorizontalBar,
                    "Revenue",
                    "Movies",
                ),
                data: ChartData::Ranking(top_grossing(movies, TOP_GROSSING)),
            },
            Chart {
                spec: ChartSpec::new(
                    "budget_vs_revenue",
                    "How does the budget correlate with revenue?",
                    ChartKind::Scatter,
                    "Budget",
                    "Revenue",
                ),
                data: ChartData::Scatter(budget_vs_revenue(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "rating_vs_revenue",
                    "How does movie rating impact revenue?",
                    ChartKind::Scatter,
                    "Vote Average",
                    "Revenue",
                ),
                data: ChartData::Scatter(rating_vs_revenue(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "revenue_by_year",
                    "What is the revenue trend over the years?",
                    ChartKind::Line,
                    "Release Year",
                    "Total Revenue",
                ),
                data: ChartData::Yearly(revenue_by_year(movies)),
            },
        ],
    }
}
