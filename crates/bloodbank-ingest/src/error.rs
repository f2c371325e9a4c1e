//! Error types for reference data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reference files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Reference file not found.
    #[error("reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Row has fewer cells than the fixed layout requires.
    #[error("line {line} of {path} has {found} columns, expected {expected}")]
    ColumnCount {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    /// Cell value could not be parsed.
    #[error("invalid {field} value '{value}' on line {line} of {path}")]
    InvalidValue {
        field: String,
        value: String,
        line: u64,
        path: PathBuf,
    },

    // === Content Errors ===
    /// Pincode directory produced no usable pincodes.
    #[error("no pincodes found in {path}")]
    NoPincodes { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/holidays.csv"),
        };
        assert_eq!(err.to_string(), "reference file not found: /data/holidays.csv");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = IngestError::InvalidValue {
            field: "Date".to_string(),
            value: "someday".to_string(),
            line: 3,
            path: PathBuf::from("holidays.csv"),
        };
        assert_eq!(
            err.to_string(),
            "invalid Date value 'someday' on line 3 of holidays.csv"
        );
    }
}
