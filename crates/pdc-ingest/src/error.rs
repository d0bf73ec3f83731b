//! Error types for upload ingestion.
//!
//! Every variant means the upload could not be read as a table at all; the
//! pipeline never runs on such input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an uploaded table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// The upload contains no bytes.
    #[error("upload is empty: {origin}")]
    EmptyInput { origin: String },

    /// File extension is not one of the supported table formats.
    #[error("unsupported file type '{extension}' for {origin} (expected csv, xls, xlsx, xlsm or ods)")]
    UnsupportedFormat { origin: String, extension: String },

    /// Byte-order mark of an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {origin} (expected UTF-8)")]
    UnsupportedEncoding {
        origin: String,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// Delimited text could not be parsed.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// Spreadsheet could not be opened or read.
    #[error("failed to read spreadsheet {origin}: {message}")]
    Workbook { origin: String, message: String },

    /// Spreadsheet has no worksheet.
    #[error("no worksheet found in {origin}")]
    NoWorksheet { origin: String },

    /// First row has no column names.
    #[error("could not find a header row in {origin}")]
    NoHeaderDetected { origin: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/patients.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/patients.csv");

        let err = IngestError::UnsupportedFormat {
            origin: "notes.txt".to_string(),
            extension: "txt".to_string(),
        };
        assert!(err.to_string().starts_with("unsupported file type 'txt'"));
    }
}
