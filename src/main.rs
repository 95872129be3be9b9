use anyhow::{Context, Result};
use clap::Parser;
use marquee::render::{CsvRenderer, Renderer, TextRenderer};
use marquee::{Analysis, ExecMode, MetricsCollector, Runner};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Clean the TMDB movie table and build the profitability, revenue and
/// budget dashboards.
#[derive(Parser, Debug)]
#[command(name = "marquee", version, about)]
struct Args {
    /// Movie table (CSV, optionally gzip-compressed)
    #[arg(value_name = "FILE", default_value = "tmdb-movies.csv")]
    input: PathBuf,

    /// Write one CSV per chart plus dashboards.json here instead of printing a summary
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Build the dashboards concurrently
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (defaults to the CPU count)
    #[arg(long, value_name = "N", requires = "parallel")]
    threads: Option<usize>,

    /// Save run metrics as JSON
    #[arg(long, value_name = "FILE")]
    metrics: Option<PathBuf>,

    /// Save the rows dropped for missing required fields as JSON
    #[arg(long, value_name = "FILE")]
    pruned: Option<PathBuf>,
}

impl Args {
    fn mode(&self) -> ExecMode {
        if self.parallel {
            ExecMode::Parallel {
                threads: self.threads,
            }
        } else {
            ExecMode::Sequential
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let metrics = MetricsCollector::new();
    let analysis = Runner::new(args.mode())
        .with_metrics(metrics.clone())
        .run(&args.input)?;

    // the analysis is complete either way; a render failure is only reported
    if let Err(e) = render(args, &analysis) {
        error!("render failed: {e:#}");
    }

    if let Some(path) = &args.pruned {
        fs::write(path, analysis.pruned.to_json()?)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), rows = analysis.pruned.error_count(), "saved pruned rows");
    }

    if let Some(path) = &args.metrics {
        metrics.save_to_file(path)?;
        info!(path = %path.display(), "saved metrics");
    } else {
        metrics.print();
    }
    Ok(())
}

fn render(args: &Args, analysis: &Analysis) -> Result<()> {
    match &args.out {
        Some(dir) => {
            let mut r = CsvRenderer::new(dir);
            r.render_all(&analysis.dashboards)?;
            info!(dir = %dir.display(), files = r.written().len(), "wrote chart tables");
            Ok(())
        }
        None => TextRenderer::new(std::io::stdout().lock()).render_all(&analysis.dashboards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee::testing::write_sample_csv;
    use std::ffi::OsStr;

    #[test]
    fn defaults_read_the_tmdb_table_sequentially() -> Result<()> {
        let args = Args::try_parse_from(["marquee"])?;
        assert_eq!(args.input, PathBuf::from("tmdb-movies.csv"));
        assert_eq!(args.mode(), ExecMode::Sequential);
        assert!(args.out.is_none() && args.metrics.is_none() && args.pruned.is_none());
        Ok(())
    }

    #[test]
    fn threads_require_parallel() -> Result<()> {
        assert!(Args::try_parse_from(["marquee", "--threads", "2"]).is_err());

        let args = Args::try_parse_from(["marquee", "--parallel", "--threads", "3", "in.csv"])?;
        assert_eq!(args.mode(), ExecMode::Parallel { threads: Some(3) });
        assert_eq!(args.input, PathBuf::from("in.csv"));

        let args = Args::try_parse_from(["marquee", "--parallel"])?;
        assert_eq!(args.mode(), ExecMode::Parallel { threads: None });
        Ok(())
    }

    #[test]
    fn metrics_are_saved_when_rendering_fails() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let input = write_sample_csv(tmp.path())?;
        // a regular file where the output directory should go
        let blocked = tmp.path().join("charts");
        fs::write(&blocked, "")?;
        let metrics = tmp.path().join("metrics.json");
        let pruned = tmp.path().join("pruned.json");

        let args = Args::try_parse_from([
            OsStr::new("marquee"),
            input.as_os_str(),
            OsStr::new("--out"),
            blocked.as_os_str(),
            OsStr::new("--metrics"),
            metrics.as_os_str(),
            OsStr::new("--pruned"),
            pruned.as_os_str(),
        ])?;
        run(&args)?;

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&metrics)?)?;
        assert_eq!(json["rows_loaded"]["value"], 8);
        assert_eq!(json["charts_built"]["value"], 12);

        let dropped: serde_json::Value = serde_json::from_str(&fs::read_to_string(&pruned)?)?;
        assert_eq!(dropped.as_array().map(Vec::len), Some(2));
        assert_eq!(dropped[0]["title"], "No Votes");
        Ok(())
    }

    #[test]
    fn missing_input_is_an_error() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let metrics = tmp.path().join("metrics.json");
        let args = Args::try_parse_from([
            OsStr::new("marquee"),
            OsStr::new("no-such-file.csv"),
            OsStr::new("--metrics"),
            metrics.as_os_str(),
        ])?;
        assert!(run(&args).is_err());
        assert!(!metrics.exists());
        Ok(())
    }
}
