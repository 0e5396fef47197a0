//! Error types for reference-data ingestion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File contained no data rows.
    #[error("reference file is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("invalid {field} value '{value}' in {path} (line {line})")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
        line: u64,
    },

    #[error("seasonality for '{symptom}' in {path} has {found} values, expected 12")]
    InvalidSeasonality {
        symptom: String,
        found: usize,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyFile {
            path: PathBuf::from("/data/specialists.csv"),
        };
        assert_eq!(err.to_string(), "reference file is empty: /data/specialists.csv");

        let err = IngestError::InvalidValue {
            field: "weight".to_string(),
            value: "lots".to_string(),
            path: PathBuf::from("names.csv"),
            line: 3,
        };
        assert_eq!(err.to_string(), "invalid weight value 'lots' in names.csv (line 3)");
    }
}
