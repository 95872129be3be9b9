//! Test support for code built on marquee.
//!
//! - **Builders**: [`RawMovieBuilder`] for loader-shaped rows,
//!   [`MovieBuilder`] for cleaned rows fed straight to aggregators
//! - **Fixtures**: [`sample_csv`], a small table that hits every cleaning path
//! - **Assertions**: ordering checks for chart tables
//!
//! # Quick Start
//!
//! ```
//! use marquee::charts::profitability::mean_profit_by_genre;
//! use marquee::testing::*;
//!
//! let movies = vec![
//!     MovieBuilder::new("a").genres(&["Action"]).money(0.0, 10.0).build(),
//!     MovieBuilder::new("b").genres(&["Action", "Drama"]).money(0.0, 50.0).build(),
//! ];
//! let table = mean_profit_by_genre(&movies);
//! assert_strictly_ascending_by(&table, |row| row.label.clone());
//! assert_eq!(table[0].value, Some(30.0));
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::{assert_descending_by, assert_strictly_ascending_by};
pub use builders::{MovieBuilder, RawMovieBuilder};
#[cfg(feature = "compression-gzip")]
pub use fixtures::write_sample_csv_gz;
pub use fixtures::{sample_csv, write_sample_csv};
