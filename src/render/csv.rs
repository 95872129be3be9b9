//! One CSV per chart, plus a JSON manifest of everything rendered.

use super::{Renderer, slugify};
use crate::charts::{ChartData, Dashboard};
use crate::io::csv::write_csv_vec;
use crate::style::{ChartSpec, DashboardStyle};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest written next to the chart tables.
pub const MANIFEST: &str = "dashboards.json";

#[derive(Serialize)]
struct ManifestChart {
    file: String,
    rows: usize,
    #[serde(flatten)]
    spec: ChartSpec,
    data: ChartData,
}

#[derive(Serialize)]
struct ManifestDashboard {
    style: DashboardStyle,
    charts: Vec<ManifestChart>,
}

/// Writes `<dir>/<dashboard>_<nn>_<slug>.csv` for every chart, `nn` counting
/// from `01` within each dashboard, and keeps `<dir>/dashboards.json` up to
/// date with every dashboard rendered so far.
///
/// Columns follow the chart shape: `label,value` for categories,
/// `year,value` for yearly series, `rank,label,value` for rankings,
/// `label,value,percent` for shares, `x,y` for scatters and
/// `lower,upper,count` for histograms. Undefined values are empty cells.
pub struct CsvRenderer {
    dir: PathBuf,
    manifest: Vec<ManifestDashboard>,
    written: Vec<PathBuf>,
}

impl CsvRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            manifest: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Every file written so far, manifest excluded, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_table(path: &Path, data: &ChartData) -> Result<usize> {
        match data {
            ChartData::Category(rows) => write_csv_vec(path, rows),
            ChartData::Yearly(rows) => write_csv_vec(path, rows),
            ChartData::Ranking(rows) => write_csv_vec(path, rows),
            ChartData::Share(rows) => write_csv_vec(path, rows),
            ChartData::Scatter(rows) => write_csv_vec(path, rows),
            ChartData::Histogram(rows) => write_csv_vec(path, rows),
        }
    }

    fn write_manifest(&self) -> Result<()> {
        let path = self.dir.join(MANIFEST);
        let json = serde_json::to_string_pretty(&self.manifest)?;
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))
    }
}

impl Renderer for CsvRenderer {
    fn render(&mut self, dashboard: &Dashboard) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let prefix = slugify(&dashboard.style.title);

        let mut charts = Vec::with_capacity(dashboard.charts.len());
        for (i, chart) in dashboard.charts.iter().enumerate() {
            let file = format!("{prefix}_{:02}_{}.csv", i + 1, chart.spec.slug);
            let path = self.dir.join(&file);
            let rows = Self::write_table(&path, &chart.data)?;
            debug!(file = %path.display(), rows, "wrote chart table");
            self.written.push(path);
            charts.push(ManifestChart {
                file,
                rows,
                spec: chart.spec.clone(),
                data: chart.data.clone(),
            });
        }
        self.manifest.push(ManifestDashboard {
            style: dashboard.style.clone(),
            charts,
        });
        self.write_manifest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::profitability;
    use crate::testing::MovieBuilder;

    #[test]
    fn writes_numbered_tables_and_manifest() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let movies = vec![
            MovieBuilder::new("a").genres(&["Action"]).money(10.0, 40.0).build(),
            MovieBuilder::new("b").genres(&["Drama"]).revenue(5.0).build(),
        ];
        let mut r = CsvRenderer::new(tmp.path());
        r.render(&profitability::dashboard(&movies))?;

        let names: Vec<String> = r
            .written()
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(
            names,
            vec![
                "profitability_analysis_01_genre_profit.csv",
                "profitability_analysis_02_year_profit.csv",
                "profitability_analysis_03_top_genre_profit_share.csv",
                "profitability_analysis_04_director_profit.csv",
            ]
        );

        let genre = fs::read_to_string(tmp.path().join(&names[0]))?;
        assert_eq!(genre, "label,value\nAction,30.0\nDrama,\n");

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tmp.path().join(MANIFEST))?)?;
        assert_eq!(manifest[0]["style"]["title"], "Profitability Analysis");
        assert_eq!(manifest[0]["charts"][0]["slug"], "genre_profit");
        assert_eq!(manifest[0]["charts"][0]["rows"], 2);
        Ok(())
    }
}
