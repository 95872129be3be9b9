//! Run metrics: row counts per stage, repair outcomes and timing.
//!
//! Pruned rows never surface as errors, so the counters here are the one
//! place where a shrinking table becomes visible. The collector is cheap to
//! clone and safe to share across the parallel dashboard builders.
//!
//! # Example
//!
//! ```
//! use marquee::metrics::MetricsCollector;
//!
//! let metrics = MetricsCollector::new();
//! metrics.record_start();
//! metrics.set_counter("rows_loaded", 10);
//! metrics.increment_counter("charts_built", 4);
//! metrics.increment_counter("charts_built", 4);
//! metrics.record_end();
//!
//! assert_eq!(metrics.counter("charts_built"), Some(8));
//! assert!(metrics.to_json()["rows_loaded"]["value"] == 10);
//! ```

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const ROWS_LOADED: &str = "rows_loaded";
pub const ROWS_AFTER_ZERO_FILTER: &str = "rows_after_zero_filter";
pub const ROWS_PRUNED: &str = "rows_pruned";
pub const ROWS_AFTER_PRUNE: &str = "rows_after_prune";
pub const DIRECTOR_FALLBACKS: &str = "director_fallbacks";
pub const DIRECTOR_UNKNOWN: &str = "director_unknown";
pub const CHARTS_BUILT: &str = "charts_built";
/// Gauge: share of loaded rows that survived cleaning.
pub const ROWS_KEPT_RATIO: &str = "rows_kept_ratio";

/// Thread-safe container for run metrics.
#[derive(Clone, Default)]
pub struct MetricsCollector {
    inner: Arc<Mutex<MetricsCollectorInner>>,
}

#[derive(Default)]
struct MetricsCollectorInner {
    counters: BTreeMap<String, u64>,
    gauges: BTreeMap<String, (f64, Option<String>)>,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MetricsCollectorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the start time of the run.
    pub fn record_start(&self) {
        self.lock().start_time = Some(Instant::now());
    }

    /// Record the end time of the run.
    pub fn record_end(&self) {
        self.lock().end_time = Some(Instant::now());
    }

    /// Elapsed run time, once both ends were recorded.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        let inner = self.lock();
        match (inner.start_time, inner.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    /// Add `value` to a counter, creating it at zero if needed.
    pub fn increment_counter(&self, name: &str, value: u64) {
        *self.lock().counters.entry(name.to_string()).or_default() += value;
    }

    /// Set a counter to a specific value.
    pub fn set_counter(&self, name: &str, value: u64) {
        self.lock().counters.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> Option<u64> {
        self.lock().counters.get(name).copied()
    }

    /// Set a gauge with an optional description.
    pub fn set_gauge(&self, name: &str, value: f64, description: Option<&str>) {
        self.lock()
            .gauges
            .insert(name.to_string(), (value, description.map(str::to_string)));
    }

    #[must_use]
    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.lock().gauges.get(name).map(|(v, _)| *v)
    }

    /// All metrics as a JSON object keyed by name.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let inner = self.lock();
        let mut metrics_json = serde_json::Map::new();

        for (name, count) in &inner.counters {
            metrics_json.insert(name.clone(), json!({ "value": count }));
        }
        for (name, (value, desc)) in &inner.gauges {
            let mut metric_obj = serde_json::Map::new();
            metric_obj.insert("value".to_string(), json!(value));
            if let Some(desc) = desc {
                metric_obj.insert("description".to_string(), json!(desc));
            }
            metrics_json.insert(name.clone(), Value::Object(metric_obj));
        }

        if let (Some(start), Some(end)) = (inner.start_time, inner.end_time) {
            metrics_json.insert(
                "execution_time_ms".to_string(),
                json!({
                    "value": u64::try_from(end.duration_since(start).as_millis()).unwrap_or(u64::MAX),
                    "description": "Total run time in milliseconds",
                }),
            );
        }
        Value::Object(metrics_json)
    }

    /// Write a human-readable report, metrics sorted by name.
    ///
    /// # Errors
    /// Propagates write failures from `out`.
    pub fn write_report<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "\n========== Run Metrics ==========")?;
        if let Some(elapsed) = self.elapsed() {
            writeln!(
                out,
                "Execution Time: {:.3}s ({} ms)",
                elapsed.as_secs_f64(),
                elapsed.as_millis()
            )?;
            writeln!(out, "---------------------------------")?;
        }
        let inner = self.lock();
        let mut lines: Vec<(String, String)> = inner
            .counters
            .iter()
            .map(|(name, v)| (name.clone(), v.to_string()))
            .collect();
        for (name, (value, desc)) in &inner.gauges {
            let shown = match desc {
                Some(desc) => format!("{value:.4} ({desc})"),
                None => format!("{value:.4}"),
            };
            lines.push((name.clone(), shown));
        }
        drop(inner);
        lines.sort();
        for (name, shown) in lines {
            writeln!(out, "{name}: {shown}")?;
        }
        writeln!(out, "=================================\n")
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        // stdout going away mid-report is not worth failing a finished run
        let _ = self.write_report(std::io::stdout().lock());
    }

    /// Save all metrics to a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let formatted = serde_json::to_string_pretty(&self.to_json())?;
        let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        file.write_all(formatted.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_metrics_sorted() {
        let m = MetricsCollector::new();
        m.set_counter("rows_pruned", 3);
        m.set_counter("charts_built", 12);
        m.set_gauge(ROWS_KEPT_RATIO, 0.5, Some("rows kept after cleaning"));

        let mut buf = Vec::new();
        m.write_report(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let charts = text.find("charts_built: 12").unwrap();
        let kept = text.find("rows_kept_ratio: 0.5000 (rows kept after cleaning)").unwrap();
        let pruned = text.find("rows_pruned: 3").unwrap();
        assert!(charts < kept && kept < pruned);
    }

    #[test]
    fn clones_share_state() {
        let a = MetricsCollector::new();
        let b = a.clone();
        b.increment_counter(CHARTS_BUILT, 4);
        assert_eq!(a.counter(CHARTS_BUILT), Some(4));
        assert_eq!(a.counter("absent"), None);
    }

    #[test]
    fn save_writes_json() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("metrics.json");
        let m = MetricsCollector::new();
        m.set_counter(ROWS_LOADED, 7);
        m.save_to_file(&path)?;
        let back: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(back[ROWS_LOADED]["value"], 7);
        Ok(())
    }
}
