//! # Marquee
//!
//! A **batch analysis pipeline** for the TMDB movie table. Marquee loads the
//! CSV, cleans it through a fixed sequence of stages, and aggregates the result
//! into twelve small chart tables grouped into three dashboards (profitability,
//! revenue and budget).
//!
//! ## Key Features
//!
//! - **Stage-typed rows** - `RawMovie` → `NormalizedMovie` → `PrunedMovie` →
//!   `Movie`; each stage's guarantees are visible in the field types
//! - **Observable data loss** - pruned rows and director repairs are counted,
//!   never raised as errors
//! - **Deterministic output** - grouped tables are key-ordered and top-N ties
//!   keep input order, so repeated runs match exactly
//! - **Sequential and parallel execution** - dashboards can be built
//!   concurrently on rayon with identical results
//! - **Pluggable rendering** - text summary or one CSV per chart
//!
//! ## Quick Start
//!
//! ```no_run
//! use marquee::{ExecMode, Runner};
//! use marquee::render::{Renderer, TextRenderer};
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let analysis = Runner::new(ExecMode::Sequential).run("tmdb-movies.csv")?;
//! println!("{} movies after cleaning", analysis.movies.len());
//!
//! TextRenderer::new(std::io::stdout()).render_all(&analysis.dashboards)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. [`io::csv`] reads the table, keeping every cell as text
//! 2. [`clean`] filters, coerces, prunes, splits and derives profit
//! 3. [`charts`] aggregates through [`keyed`] grouping and the [`combiners`]
//! 4. [`render`] presents the [`charts::Dashboard`]s
//!
//! [`runner`] ties the steps together and feeds [`metrics`].

pub mod charts;
pub mod clean;
pub mod combiners;
pub mod error;
pub mod io;
pub mod keyed;
pub mod metrics;
pub mod record;
pub mod render;
pub mod runner;
pub mod style;
pub mod testing;
pub mod validation;

pub use charts::{Chart, ChartData, Dashboard, build_dashboards};
pub use clean::{CleanReport, Cleaned, clean_table};
pub use combiners::{AverageF64, CombineFn, Sum, TopK};
pub use error::{EncodingRepairError, LoadError};
pub use io::csv::{read_movies, write_csv_vec};
pub use metrics::MetricsCollector;
pub use record::{Movie, NormalizedMovie, PrunedMovie, RawMovie};
pub use runner::{Analysis, ExecMode, Runner};
pub use style::{ChartKind, ChartSpec, DashboardStyle};
pub use validation::{ErrorCollector, Validate, ValidationError, ValidationResult};
