//! Load, clean and aggregate in one call.
//!
//! The [`Runner`] owns the execution mode and an optional metrics sink. In
//! parallel mode the three dashboards are built concurrently on a dedicated
//! rayon pool; each dashboard is a pure function of the same cleaned slice, so
//! both modes produce identical output.

use crate::charts::{self, Dashboard, budget, profitability, revenue};
use crate::clean::{CleanReport, clean_table};
use crate::io::csv::read_movies;
use crate::metrics::{
    CHARTS_BUILT, DIRECTOR_FALLBACKS, DIRECTOR_UNKNOWN, MetricsCollector, ROWS_AFTER_PRUNE,
    ROWS_AFTER_ZERO_FILTER, ROWS_KEPT_RATIO, ROWS_LOADED, ROWS_PRUNED,
};
use crate::record::{Movie, RawMovie};
use crate::validation::ErrorCollector;
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecMode {
    #[default]
    Sequential,
    /// Build dashboards concurrently; `threads` defaults to the CPU count.
    Parallel { threads: Option<usize> },
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The cleaned table the dashboards were built from.
    pub movies: Vec<Movie>,
    pub report: CleanReport,
    /// Rows excluded by the pruner, with the fields they were missing.
    pub pruned: ErrorCollector,
    /// Profitability, revenue and budget, in that order.
    pub dashboards: Vec<Dashboard>,
}

#[derive(Clone, Default)]
pub struct Runner {
    pub mode: ExecMode,
    pub metrics: Option<MetricsCollector>,
}

impl Runner {
    #[must_use]
    pub fn new(mode: ExecMode) -> Self {
        Self {
            mode,
            metrics: None,
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Load the table at `path` and analyze it.
    ///
    /// # Errors
    /// Returns an error if the table cannot be loaded (see
    /// [`read_movies`]) or the parallel pool cannot be built.
    pub fn run(&self, path: impl AsRef<Path>) -> Result<Analysis> {
        if let Some(m) = &self.metrics {
            m.record_start();
        }
        let raw = read_movies(path.as_ref())?;
        let analysis = self.analyze(raw)?;
        if let Some(m) = &self.metrics {
            m.record_end();
        }
        Ok(analysis)
    }

    /// Clean already-loaded rows and build every dashboard.
    ///
    /// # Errors
    /// Returns an error only if the parallel pool cannot be built.
    pub fn analyze(&self, raw: Vec<RawMovie>) -> Result<Analysis> {
        let mut pruned = ErrorCollector::new();
        let cleaned = clean_table(raw, Some(&mut pruned));
        let report = cleaned.report;
        if cleaned.movies.is_empty() {
            warn!(loaded = report.rows_loaded, "no rows survived cleaning; charts will be empty");
        }

        let dashboards = build_dashboards_with(&cleaned.movies, self.mode)?;
        let charts_built: usize = dashboards.iter().map(|d| d.charts.len()).sum();
        info!(dashboards = dashboards.len(), charts = charts_built, mode = ?self.mode, "built dashboards");

        if let Some(m) = &self.metrics {
            record_report(m, &report);
            m.increment_counter(CHARTS_BUILT, charts_built as u64);
        }
        Ok(Analysis {
            movies: cleaned.movies,
            report,
            pruned,
            dashboards,
        })
    }
}

/// Build the three dashboards under `mode`.
///
/// # Errors
/// Returns an error if the parallel thread pool cannot be built.
pub fn build_dashboards_with(movies: &[Movie], mode: ExecMode) -> Result<Vec<Dashboard>> {
    match mode {
        ExecMode::Sequential => Ok(charts::build_dashboards(movies)),
        ExecMode::Parallel { threads } => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.unwrap_or_else(num_cpus::get).max(1))
                .build()?;
            let (profit, (rev, bud)) = pool.install(|| {
                rayon::join(
                    || profitability::dashboard(movies),
                    || rayon::join(|| revenue::dashboard(movies), || budget::dashboard(movies)),
                )
            });
            Ok(vec![profit, rev, bud])
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn record_report(metrics: &MetricsCollector, report: &CleanReport) {
    metrics.set_counter(ROWS_LOADED, report.rows_loaded as u64);
    metrics.set_counter(ROWS_AFTER_ZERO_FILTER, report.rows_after_zero_filter as u64);
    metrics.set_counter(ROWS_PRUNED, report.rows_pruned() as u64);
    metrics.set_counter(ROWS_AFTER_PRUNE, report.rows_after_prune as u64);
    metrics.set_counter(DIRECTOR_FALLBACKS, report.director_repairs.sanitized as u64);
    metrics.set_counter(DIRECTOR_UNKNOWN, report.director_repairs.missing as u64);

    let kept = if report.rows_loaded == 0 {
        0.0
    } else {
        report.rows_after_prune as f64 / report.rows_loaded as f64
    };
    metrics.set_gauge(ROWS_KEPT_RATIO, kept, Some("rows kept after cleaning"));
}
