//! Director-field repair.
//!
//! Director names in the source mix correctly decoded text with mojibake
//! (UTF-8 bytes that were decoded as Latin-1 somewhere upstream). Each value
//! goes through one of two branches:
//!
//! 1. [`repair_encoding`]: re-encode every character as a single Latin-1 byte
//!    and decode the bytes as UTF-8. Succeeds on mojibake and on plain ASCII.
//! 2. Sanitize only, when the repair fails.
//!
//! Both branches then [`sanitize`] (keep ASCII letters/digits, whitespace and
//! `|`) and split on `|`. A missing value becomes `["Unknown"]`.

use crate::error::EncodingRepairError;
use crate::record::{LIST_DELIMITER, UNKNOWN_DIRECTOR};
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s|]").expect("valid director allow-list regex"));

/// Which branch produced a cleaned director value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepairPath {
    /// The source cell was missing.
    Missing,
    /// The Latin-1 to UTF-8 round trip succeeded.
    Reencoded,
    /// The round trip failed; only the allow-list was applied.
    Sanitized,
}

/// A cleaned director cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanedDirectors {
    pub path: RepairPath,
    pub names: Vec<String>,
}

/// Reinterpret `text`'s characters as Latin-1 bytes and decode them as UTF-8.
///
/// # Errors
/// [`EncodingRepairError::Unencodable`] when a character is above U+00FF,
/// [`EncodingRepairError::InvalidUtf8`] when the bytes are not valid UTF-8.
pub fn repair_encoding(text: &str) -> Result<String, EncodingRepairError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (position, ch) in text.char_indices() {
        let byte = u8::try_from(u32::from(ch))
            .map_err(|_| EncodingRepairError::Unencodable { ch, position })?;
        bytes.push(byte);
    }
    String::from_utf8(bytes).map_err(|e| EncodingRepairError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Remove every character that is not an ASCII letter or digit, whitespace, or `|`.
pub fn sanitize(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

/// Clean one director cell into an ordered list of names.
pub fn clean_directors(raw: Option<&str>) -> CleanedDirectors {
    let (path, text) = match raw {
        None => (RepairPath::Missing, UNKNOWN_DIRECTOR.to_string()),
        Some(text) => match repair_encoding(text) {
            Ok(repaired) => (RepairPath::Reencoded, repaired),
            Err(_) => (RepairPath::Sanitized, sanitize(text)),
        },
    };
    let names = sanitize(&text)
        .split(LIST_DELIMITER)
        .map(str::to_string)
        .collect();
    CleanedDirectors { path, names }
}
