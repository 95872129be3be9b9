//! Presentation configuration handed to renderers.
//!
//! Nothing in the pipeline reads these values; they travel with each
//! [`Dashboard`](crate::charts::Dashboard) so a renderer can reproduce the
//! titles, palettes and axis labels without any global style state.

use serde::Serialize;

/// Drawing primitive a chart maps onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Pie,
    Scatter,
    Histogram,
}

/// Dashboard-wide styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardStyle {
    pub title: String,
    /// Named color palette (matplotlib/seaborn naming).
    pub palette: String,
    /// Background of the dashboard title box.
    pub title_color: String,
    /// Background of each chart's question box.
    pub panel_color: String,
    pub font_weight: String,
}

impl DashboardStyle {
    fn new(title: &str, palette: &str, title_color: &str, panel_color: &str) -> Self {
        Self {
            title: title.to_string(),
            palette: palette.to_string(),
            title_color: title_color.to_string(),
            panel_color: panel_color.to_string(),
            font_weight: "semibold".to_string(),
        }
    }

    pub fn profitability() -> Self {
        Self::new("Profitability Analysis", "bwr", "#e66771", "#f4c2c2")
    }

    pub fn revenue() -> Self {
        Self::new("Revenue Analysis", "rainbow", "#4169e1", "#c5e384")
    }

    pub fn budget() -> Self {
        Self::new("Budget Allocation", "YlGnBu", "#00ffff", "#77b5fe")
    }
}

/// The question a chart answers and how its axes are labeled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Short identifier, used for output file names.
    pub slug: String,
    pub question: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
}

impl ChartSpec {
    pub fn new(slug: &str, question: &str, kind: ChartKind, x_label: &str, y_label: &str) -> Self {
        Self {
            slug: slug.to_string(),
            question: question.to_string(),
            kind,
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}
