//! Required-field validation for cleaned rows.
//!
//! The pruner is a hard filter: a row failing [`Validate`] is dropped, never
//! reported as an error. An [`ErrorCollector`] can still be attached to see
//! *which* rows were dropped and why, since otherwise the exclusion only shows
//! up as smaller groups and shifted means.
//!
//! # Example
//!
//! ```
//! use marquee::validation::*;
//!
//! struct Year(Option<i32>);
//!
//! impl Validate for Year {
//!     fn validate(&self) -> ValidationResult {
//!         required("release_year", &self.0)
//!     }
//! }
//!
//! assert!(Year(Some(2015)).validate().is_ok());
//! assert_eq!(Year(None).validate().unwrap_err()[0].field.as_deref(), Some("release_year"));
//! ```

use serde::Serialize;
use std::fmt;

/// Result type for validation operations.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Trait for rows that can be checked before aggregation.
pub trait Validate {
    /// Validate this instance and return every problem found.
    fn validate(&self) -> ValidationResult;
}

/// A single validation error with context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation (optional)
    pub field: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// Error code for categorization (optional)
    pub code: Option<String>,
}

impl ValidationError {
    /// Create a validation error for a specific field.
    pub fn field<S: Into<String>, M: Into<String>>(field: S, message: M) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            code: None,
        }
    }

    /// Attach an error code.
    #[must_use]
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "[{}] {}", field, self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        if let Some(ref code) = self.code {
            write!(f, " (code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Fail with a `missing` error when `value` is `None`.
pub fn required<T>(field: &str, value: &Option<T>) -> ValidationResult {
    match value {
        Some(_) => Ok(()),
        None => Err(vec![
            ValidationError::field(field, "missing required value").with_code("missing"),
        ]),
    }
}

/// Combine multiple validation results, keeping every error.
pub fn combine_validations(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    let mut all_errors = Vec::new();
    for result in results {
        if let Err(mut errors) = result {
            all_errors.append(&mut errors);
        }
    }
    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors)
    }
}

/// Collects the rows excluded by a validating stage.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<RecordError>,
}

/// Validation errors for one excluded row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordError {
    /// Position of the row in the stage's input
    pub row: usize,
    /// Title of the row, when it had one
    pub title: Option<String>,
    /// The validation errors for this row
    pub errors: Vec<ValidationError>,
}

impl ErrorCollector {
    /// Create a new empty error collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an excluded row.
    pub fn add_error(&mut self, row: usize, title: Option<String>, errors: Vec<ValidationError>) {
        self.errors.push(RecordError { row, title, errors });
    }

    /// Number of excluded rows.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// All collected errors, in input order.
    pub fn errors(&self) -> &[RecordError] {
        &self.errors
    }

    /// How many excluded rows failed on `field`.
    pub fn count_field(&self, field: &str) -> usize {
        self.errors
            .iter()
            .filter(|r| r.errors.iter().any(|e| e.field.as_deref() == Some(field)))
            .count()
    }

    /// Export errors to JSON format.
    ///
    /// # Errors
    /// Propagates serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.errors)
    }
}
