//! Dashboard renderers.
//!
//! A renderer only reads a [`Dashboard`]; nothing it does feeds back into the
//! cleaned table or the chart tables, so a failed render leaves the analysis
//! intact.

pub mod csv;
pub mod text;

use crate::charts::Dashboard;
use anyhow::Result;

pub use csv::CsvRenderer;
pub use text::TextRenderer;

/// Something that can present a dashboard.
pub trait Renderer {
    /// Render one dashboard.
    ///
    /// # Errors
    /// Implementations return an error when their output cannot be written.
    fn render(&mut self, dashboard: &Dashboard) -> Result<()>;

    /// Render several dashboards in order, stopping at the first failure.
    ///
    /// # Errors
    /// See [`Renderer::render`].
    fn render_all(&mut self, dashboards: &[Dashboard]) -> Result<()> {
        for d in dashboards {
            self.render(d)?;
        }
        Ok(())
    }
}

/// File-name form of a dashboard title: lowercase ASCII words joined by `_`.
pub(crate) fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
