//! Shared data models for validation errors, the final report, and the
//! loosely-typed field reads used by the checks.

pub mod field;
pub mod files;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Fixed taxonomy of reportable defects.
pub enum ErrorKind {
    FileNotFound,
    InvalidFormat,
    Syntax,
    MissingField,
    InvalidType,
    InvalidValue,
    InvalidFile,
    InvalidLine,
    FileReadError,
}

impl ErrorKind {
    /// Taxonomy key as it appears in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "file_not_found",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::Syntax => "syntax",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::InvalidValue => "invalid_value",
            ErrorKind::InvalidFile => "invalid_file",
            ErrorKind::InvalidLine => "invalid_line",
            ErrorKind::FileReadError => "file_read_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single defect with a locator into the offending field.
pub struct ValidationError {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    pub recommendation: String,
}

impl ValidationError {
    pub fn new(
        path: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Validation results container. `valid` is true iff `errors` is empty.
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
