//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// An explicitly given storage file does not exist
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Storage file exists and is non-empty but does not parse as a record collection
    #[error("Storage file {} is corrupt: {message}", .path.display())]
    DataCorruption { path: PathBuf, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for record fields
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ExpenseError {
    /// Build a corruption error for the given storage file
    pub fn corrupt(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        Self::DataCorruption {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Check if this is a data corruption error
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = ExpenseError::FileNotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "File does not exist: missing.json");
    }

    #[test]
    fn test_corruption_display() {
        let bad: Result<Vec<i32>, _> = serde_json::from_str("not json");
        let err = ExpenseError::corrupt("expenses.json", &bad.unwrap_err());
        assert!(err.is_corruption());
        assert!(err
            .to_string()
            .starts_with("Storage file expenses.json is corrupt"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
