//! Dashboard 1: where does profit come from?

use super::{Chart, ChartData, CategoryValue, Dashboard, RankedValue, ShareSlice, YearValue};
use super::{category_values, ranked};
use crate::combiners::{AverageF64, Sum, top_k_by};
use crate::keyed::{combine_by_key, explode};
use crate::record::Movie;
use crate::style::{ChartKind, ChartSpec, DashboardStyle};
use ordered_float::OrderedFloat;

/// Genres shown in the total-profit pie.
pub const TOP_GENRES: usize = 5;
/// Directors shown in the mean-profit ranking.
pub const TOP_DIRECTORS: usize = 10;

/// Mean profit per genre, genres ascending.
///
/// A movie counts once for each of its genres; movies without a profit are
/// skipped, and a genre with no profit at all reports `None`.
pub fn mean_profit_by_genre(movies: &[Movie]) -> Vec<CategoryValue> {
    let pairs = explode(movies, |m| m.genres.iter(), |m| m.profit);
    category_values(combine_by_key(pairs, &AverageF64))
}

/// Mean profit per release year, years ascending.
pub fn mean_profit_by_year(movies: &[Movie]) -> Vec<YearValue> {
    let pairs = movies.iter().map(|m| (OrderedFloat(m.release_year), m.profit));
    combine_by_key(pairs, &AverageF64)
        .into_iter()
        .map(|(year, value)| YearValue {
            year: year.into_inner(),
            value,
        })
        .collect()
}

/// The `n` genres with the largest total profit, with their share of those `n`.
///
/// Ties keep genre-name order.
pub fn top_genres_by_total_profit(movies: &[Movie], n: usize) -> Vec<ShareSlice> {
    let totals = combine_by_key(
        explode(movies, |m| m.genres.iter(), |m| m.profit),
        &Sum::<f64>::new(),
    );
    let top = top_k_by(totals, n, |(_, total)| Some(*total));
    let shown: f64 = top.iter().map(|(_, total)| total).sum();
    top.into_iter()
        .map(|(label, value)| ShareSlice {
            label: label.clone(),
            value,
            percent: if shown == 0.0 { 0.0 } else { value / shown * 100.0 },
        })
        .collect()
}

/// The `n` directors with the highest mean profit.
///
/// Co-directed movies count for every director. Ties keep name order.
pub fn top_directors_by_mean_profit(movies: &[Movie], n: usize) -> Vec<RankedValue> {
    let means = combine_by_key(
        explode(movies, |m| m.director.iter(), |m| m.profit),
        &AverageF64,
    );
    let top = top_k_by(means, n, |(_, mean)| *mean);
    ranked(
        top.into_iter()
            .filter_map(|(label, mean)| mean.map(|m| (label, m)))
            .collect(),
    )
}

pub fn dashboard(movies: &[Movie]) -> Dashboard {
    Dashboard {
        style: DashboardStyle::profitability(),
        charts: vec![
            Chart {
                spec: ChartSpec::new(
                    "genre_profit",
                    "Which genres are the most profitable?",
                    ChartKind::Bar,
                    "",
                    "Average Profit",
                ),
                data: ChartData::Category(mean_profit_by_genre(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "year_profit",
                    "How does the release year impact profitability?",
                    ChartKind::Line,
                    "Release Year",
                    "Average Profit",
                ),
                data: ChartData::Yearly(mean_profit_by_year(movies)),
            },
            Chart {
                spec: ChartSpec::new(
                    "top_genre_profit_share",
                    "What is the distribution of total profit among top 5 genres?",
                    ChartKind::Pie,
                    "",
                    "",
                ),
                data: ChartData::Share(top_genres_by_total_profit(movies, TOP_GENRES)),
            },
            Chart {
                spec: ChartSpec::new(
                    "director_profit",
                    "Which directors produce the most profitable movies?",
                    ChartKind::HorizontalBar,
                    "Average Profit",
                    "",
                ),
                data: ChartData::Ranking(top_directors_by_mean_profit(movies, TOP_DIRECTORS)),
            },
        ],
    }
}
