//! Dashboard 3: how is budget allocated, and does it pay off?

use super::histogram::{Bin, HISTOGRAM_BINS, histogram};
use super::{CategoryValue, Chart, ChartData, Dashboard, Point, category_values};
use crate::combiners::AverageF64;
use crate::keyed::{combine_by_key, explode};
use crate::record::Movie;
use crate::style::{ChartKind, ChartSpec, DashboardStyle};

fn budgets<'a>(movies: impl Iterator<Item = &'a Movie>) -> Vec<f64> {
    movies.filter_map(|m| m.budget).collect()
}

/// Histogram of every known budget.
pub fn budget_distribution(movies: &[Movie], bins: usize) -> Vec<Bin> {
    histogram(&budgets(movies.iter()), bins)
}

/// Mean budget per genre, genres ascending.
pub fn mean_budget_by_genre(movies: &[Movie]) -> Vec<CategoryValue> {
    let pairs = explode(movies, |m| m.genres.iter(), |m| m.budget);
    category_values(combine_by_key(pairs, &AverageF64))
}

/// `(budget, vote_average)` for every movie with a budget.
pub fn budget_vs_rating(movies: &[Movie]) -> Vec<Point> {
    movies
        .iter()
        .filter_map(|m| {
            m.budget.map(|b| Point {
                x: b,
                y: m.vote_average,
            })
        })
        .collect()
}

/// Histogram of budgets among movies that earned any revenue.
pub fn optimal_budget_range(movies: &[Movie], bins: usize) -> Vec<Bin> {
    histogram(&budgets(movies.iter().filter(|m| m.revenue > 0.0)), bins)
}

pub fn dashboard(movies: &[Movie]) -> Dashboard {
    Dashboard {
        style: DashboardStyle::budget(),
        charts: vec![
            Chart {
                spec: ChartSpec::new(
                    "budget_distribution",
                    "What is the distribution of budgets among movies?",
                    ChartKind::Histogram,
                    "Budget",
                    "Frequency",
                ),
                data: ChartData::Histogram(budget_distribution(movies, HISTOGRAM_BINS)),
            },
            Chart {
                spec: ChartSpec::new(
                    "genre_budget",
                    "Which genres have the highest average budgets?",
                    ChartKind::Bar,
                    "",
                    "Average Budget",
                ),
                data: ChartData::Category(mean_budget_by_genre(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "budget_vs_rating",
                    "How does budget impact critical acclaim?",
                    ChartKind::Scatter,
                    "Budget",
                    "Vote Average",
                ),
                data: ChartData::Scatter(budget_vs_rating(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "optimal_budget_range",
                    "What is the optimal budget range for maximizing revenue?",
                    ChartKind::Histogram,
                    "Budget",
                    "Frequency of Successful Movies",
                ),
                data: ChartData::Histogram(optimal_budget_range(movies, HISTOGRAM_BINS)),
            },
        ],
    }
}
