//! CSV I/O for the movie table and the per-chart output tables.
//!
//! - [`read_movies`] loads the source table into [`RawMovie`] rows.
//! - [`write_csv_vec`] writes any `Serialize` slice, one row per element.
//!
//! # Design notes
//! - Cells are kept as text: coercion belongs to the normalizer, and the zero
//!   filter must see the loaded representation.
//! - Columns are resolved by header name once; a missing required column is a
//!   [`LoadError::MissingColumns`] listing every absent name.
//! - Short rows are tolerated (`flexible`); absent trailing cells are missing.
//! - Records are read as bytes. A cell that is not valid UTF-8 is decoded as
//!   Latin-1 instead, so stray bytes reach the director repair rather than
//!   failing the load.

use crate::error::LoadError;
use crate::io::compression::auto_detect_reader;
use crate::record::{RawMovie, REQUIRED_COLUMNS};
use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::fs::{File, create_dir_all};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Cell texts read as missing, matching the usual dataframe NA markers.
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Position of each required column in the header.
#[derive(Clone, Copy, Debug)]
struct ColumnIndex([usize; REQUIRED_COLUMNS.len()]);

impl ColumnIndex {
    fn resolve(headers: &ByteRecord, path: &Path) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(decode_cell).collect();
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match names.iter().position(|h| h.trim() == name) {
                Some(pos) => *slot = pos,
                None => missing.push(name.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(Self(positions))
        } else {
            Err(LoadError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            })
        }
    }

    fn cell(&self, record: &ByteRecord, column: usize) -> Option<String> {
        record
            .get(self.0[column])
            .map(decode_cell)
            .filter(|text| !MISSING_MARKERS.contains(&text.as_str()))
    }

    fn movie(&self, r: &ByteRecord) -> RawMovie {
        RawMovie {
            original_title: self.cell(r, 0),
            homepage: self.cell(r, 1),
            tagline: self.cell(r, 2),
            keywords: self.cell(r, 3),
            production_companies: self.cell(r, 4),
            budget: self.cell(r, 5),
            revenue: self.cell(r, 6),
            budget_adj: self.cell(r, 7),
            revenue_adj: self.cell(r, 8),
            vote_average: self.cell(r, 9),
            vote_count: self.cell(r, 10),
            release_year: self.cell(r, 11),
            genres: self.cell(r, 12),
            cast: self.cell(r, 13),
            director: self.cell(r, 14),
        }
    }
}

/// UTF-8 when the bytes allow it, otherwise one char per byte (Latin-1).
fn decode_cell(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Read the movie table at `path` into raw rows, preserving file order.
///
/// **Compression**: gzip input is detected by extension or magic bytes when the
/// `compression-gzip` feature is enabled.
///
/// # Errors
/// Returns an error if the file cannot be opened or split into CSV records, if
/// it has no header row, or if any column in [`REQUIRED_COLUMNS`] is absent.
pub fn read_movies(path: impl AsRef<Path>) -> Result<Vec<RawMovie>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = auto_detect_reader(f, path)?;
    read_movies_from(rdr, path)
}

/// Same as [`read_movies`] over an already-open stream; `path` only labels errors.
///
/// # Errors
/// See [`read_movies`].
pub fn read_movies_from<R: Read>(reader: R, path: &Path) -> Result<Vec<RawMovie>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr
        .byte_headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .clone();
    if headers.is_empty() {
        return Err(LoadError::EmptyInput {
            path: path.to_path_buf(),
        }
        .into());
    }
    let columns = ColumnIndex::resolve(&headers, path)?;

    let mut out = Vec::new();
    for (i, rec) in rdr.byte_records().enumerate() {
        let rec = rec.with_context(|| format!("parse CSV record #{} in {}", i + 1, path.display()))?;
        out.push(columns.movie(&rec));
    }
    debug!(rows = out.len(), path = %path.display(), "loaded movie table");
    Ok(out)
}

/// Write a typed slice to a CSV file with a header row.
///
/// Creates parent directories if they don't exist.
///
/// # Returns
/// The number of rows written (i.e., `data.len()`).
///
/// # Errors
/// Returns an error if the file/dirs cannot be created or any row fails to
/// serialize/flush.
pub fn write_csv_vec<T: Serialize>(path: impl AsRef<Path>, data: &[T]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(f);
    for (i, row) in data.iter().enumerate() {
        wtr.serialize(row)
            .with_context(|| format!("serialize CSV row #{} to {}", i + 1, path.display()))?;
    }
    wtr.flush()?;
    Ok(data.len())
}
