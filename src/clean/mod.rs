//! The cleaning pipeline, from loaded rows to aggregation-ready movies.
//!
//! Stages run strictly in this order, each consuming the previous stage's
//! table and producing a new one:
//!
//! 1. [`filter`] -- drop rows whose four financial cells are all zero, judged
//!    on the *loaded* text.
//! 2. [`normalize`] -- coerce numeric columns, fill free-text columns.
//! 3. [`prune`] -- drop rows missing a required field, judged *after*
//!    coercion.
//! 4. [`split`] -- split list fields and repair `director` ([`director`]).
//! 5. [`profit`] -- derive `profit = revenue - budget`.
//!
//! The zero filter and the pruner are deliberately separate passes: merging
//! them changes which rows survive.

pub mod director;
pub mod filter;
pub mod normalize;
pub mod profit;
pub mod prune;
pub mod split;

use crate::record::{Movie, RawMovie};
use crate::validation::ErrorCollector;
use split::RepairTally;
use tracing::{debug, info};

/// Row counts observed while cleaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub rows_loaded: usize,
    pub rows_after_zero_filter: usize,
    pub rows_after_prune: usize,
    pub director_repairs: RepairTally,
}

impl CleanReport {
    /// Rows removed by the pruner.
    pub fn rows_pruned(&self) -> usize {
        self.rows_after_zero_filter - self.rows_after_prune
    }
}

/// Cleaned table plus the counts describing how it was reached.
#[derive(Clone, Debug)]
pub struct Cleaned {
    pub movies: Vec<Movie>,
    pub report: CleanReport,
}

/// Run every cleaning stage over `raw`.
///
/// Rows dropped by the pruner are recorded in `collector` when given.
pub fn clean_table(raw: Vec<RawMovie>, collector: Option<&mut ErrorCollector>) -> Cleaned {
    let rows_loaded = raw.len();

    let filtered = filter::retain_financial_rows(raw);
    let rows_after_zero_filter = filtered.len();
    debug!(kept = rows_after_zero_filter, dropped = rows_loaded - rows_after_zero_filter, "zero filter");

    let normalized = normalize::normalize(filtered);
    let pruned = prune::prune(normalized, collector);
    let rows_after_prune = pruned.len();
    debug!(kept = rows_after_prune, dropped = rows_after_zero_filter - rows_after_prune, "pruned");

    let split::SplitOutput { movies, repairs } = split::split_fields(pruned);
    debug!(
        reencoded = repairs.reencoded,
        sanitized = repairs.sanitized,
        missing = repairs.missing,
        "director repair"
    );
    let movies = profit::derive_profit(movies);

    info!(
        loaded = rows_loaded,
        kept = movies.len(),
        "cleaned movie table"
    );
    Cleaned {
        movies,
        report: CleanReport {
            rows_loaded,
            rows_after_zero_filter,
            rows_after_prune,
            director_repairs: repairs,
        },
    }
}
