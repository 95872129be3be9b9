//! Structural failures that abort a run.
//!
//! Row-level problems never show up here: unparsable cells become missing
//! values and incomplete rows are pruned. Only a table that cannot be read at
//! all, or that lacks required columns, produces a [`LoadError`].

use std::path::PathBuf;

use thiserror::Error;

/// Fatal input errors raised by the loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path}: missing required column(s): {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
    #[error("{path}: input has no header row")]
    EmptyInput { path: PathBuf },
}

/// Failure of the byte-level director repair.
///
/// Always recovered by the sanitize-only branch; never leaves the cleaner.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingRepairError {
    #[error("character {ch:?} at byte {position} has no single-byte encoding")]
    Unencodable { ch: char, position: usize },
    #[error("re-decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}
