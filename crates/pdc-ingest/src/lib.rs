//! Upload ingestion for the patient data cleaner.
//!
//! Reads a delimited-text or spreadsheet upload into a [`RawTable`] whose
//! first row names the columns. No type coercion happens here: every cell is
//! text so the normalizers fully control interpretation.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pdc_ingest::read_table;
//!
//! let table = read_table(Path::new("uploads/patients.xlsx"))?;
//! println!("{} rows, columns: {:?}", table.len(), table.columns);
//! ```

mod csv;
mod error;
mod format;
mod spreadsheet;

use std::path::Path;

use pdc_model::RawTable;
use tracing::info;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use crate::csv::{normalize_cell, normalize_header, read_csv_bytes, validate_encoding};
pub use format::SourceFormat;
pub use spreadsheet::read_spreadsheet_bytes;

/// Reads an in-memory upload of the given format.
pub fn read_table_from_bytes(bytes: Vec<u8>, format: SourceFormat, origin: &str) -> Result<RawTable> {
    if format.is_spreadsheet() {
        read_spreadsheet_bytes(bytes, origin)
    } else {
        read_csv_bytes(&bytes, origin)
    }
}

/// Reads an upload from disk, choosing the reader by file extension.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let format = SourceFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let origin = path.display().to_string();
    let table = read_table_from_bytes(bytes, format, &origin)?;
    info!(
        path = %origin,
        format = %format,
        columns = table.columns.len(),
        rows = table.len(),
        "upload read"
    );
    Ok(table)
}
