//! Plain-text dashboard summary.

use super::Renderer;
use crate::charts::{Chart, ChartData, Dashboard};
use anyhow::Result;
use std::io::Write;

/// Scatter tables are summarized, not listed.
const SCATTER_PREVIEW: usize = 5;

/// Writes an aligned text summary of each chart to `out`.
///
/// # Example
///
/// ```
/// use marquee::charts::build_dashboards;
/// use marquee::render::{Renderer, TextRenderer};
///
/// let mut buf = Vec::new();
/// TextRenderer::new(&mut buf).render_all(&build_dashboards(&[])).unwrap();
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.contains("== Budget Allocation =="));
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn chart(&mut self, n: usize, chart: &Chart) -> std::io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "{n}. {} [{} rows]", chart.spec.question, chart.data.len())?;
        if chart.data.is_empty() {
            return writeln!(out, "   (no data)");
        }
        match &chart.data {
            ChartData::Category(rows) => {
                let w = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
                for r in rows {
                    writeln!(out, "   {:<w$}  {}", r.label, fmt_opt(r.value))?;
                }
            }
            ChartData::Yearly(rows) => {
                for r in rows {
                    writeln!(out, "   {:<6}  {}", r.year, fmt_opt(r.value))?;
                }
            }
            ChartData::Ranking(rows) => {
                let w = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
                for r in rows {
                    writeln!(out, "   {:>2}. {:<w$}  {:.2}", r.rank, r.label, r.value)?;
                }
            }
            ChartData::Share(rows) => {
                let w = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
                for r in rows {
                    writeln!(out, "   {:<w$}  {:.2}  ({:.1}%)", r.label, r.value, r.percent)?;
                }
            }
            ChartData::Scatter(points) => {
                writeln!(
                    out,
                    "   ({}, {}) points, first {}:",
                    chart.spec.x_label,
                    chart.spec.y_label,
                    SCATTER_PREVIEW.min(points.len())
                )?;
                for p in points.iter().take(SCATTER_PREVIEW) {
                    writeln!(out, "   {:.2}, {:.2}", p.x, p.y)?;
                }
            }
            ChartData::Histogram(bins) => {
                for b in bins.iter().filter(|b| b.count > 0) {
                    writeln!(out, "   [{:.0}, {:.0}]  {}", b.lower, b.upper, b.count)?;
                }
            }
        }
        Ok(())
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, dashboard: &Dashboard) -> Result<()> {
        writeln!(self.out, "== {} ==", dashboard.style.title)?;
        for (i, chart) in dashboard.charts.iter().enumerate() {
            self.chart(i + 1, chart)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::profitability;
    use crate::testing::MovieBuilder;

    #[test]
    fn aligns_labels_and_marks_undefined_means() -> Result<()> {
        let movies = vec![
            MovieBuilder::new("a").genres(&["Action"]).money(10.0, 40.0).build(),
            MovieBuilder::new("b").genres(&["Documentary"]).revenue(5.0).build(),
        ];
        let mut r = TextRenderer::new(Vec::new());
        r.render(&profitability::dashboard(&movies))?;
        let text = String::from_utf8(r.into_inner())?;

        assert!(text.starts_with("== Profitability Analysis ==\n"));
        assert!(text.contains("1. Which genres are the most profitable? [2 rows]"));
        assert!(text.contains("   Action       30.00\n"));
        assert!(text.contains("   Documentary  n/a\n"));
        Ok(())
    }
}
