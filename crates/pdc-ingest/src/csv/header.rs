//! Header and cell normalization shared by every reader.

use tracing::{debug, warn};

use pdc_model::RawTable;

use crate::error::{IngestError, Result};

/// Normalizes a header value: strips a BOM, trims and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a cell value by trimming whitespace and a stray BOM.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Builds a [`RawTable`] from raw rows whose first row is the header.
///
/// Blank rows are expected to be filtered by the caller. Short rows are padded
/// with empty cells; cells beyond the header width are dropped.
pub fn build_table(mut raw_rows: Vec<Vec<String>>, origin: &str) -> Result<RawTable> {
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyInput {
            origin: origin.to_string(),
        });
    }
    let header_row = raw_rows.remove(0);
    let columns: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            origin: origin.to_string(),
        });
    }

    let width = columns.len();
    let mut truncated = 0usize;
    let rows: Vec<Vec<String>> = raw_rows
        .into_iter()
        .map(|mut row| {
            if row.len() > width {
                truncated += 1;
            }
            row.resize(width, String::new());
            row
        })
        .collect();
    if truncated > 0 {
        warn!(origin, rows = truncated, "rows wider than header; extra cells dropped");
    }
    debug!(origin, columns = width, rows = rows.len(), "table read");
    Ok(RawTable::new(columns, rows))
}

pub(crate) fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  first_name  "), "first_name");
        assert_eq!(normalize_header("\u{feff}patient_id"), "patient_id");
        assert_eq!(normalize_header("track   name"), "track name");
    }

    #[test]
    fn test_build_table_pads_and_truncates() {
        let table = build_table(rows(&[&["a", "b"], &["1"], &["1", "2", "3"]]), "t").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_build_table_requires_header() {
        assert!(matches!(
            build_table(Vec::new(), "t"),
            Err(IngestError::EmptyInput { .. })
        ));
        assert!(matches!(
            build_table(rows(&[&["", " "]]), "t"),
            Err(IngestError::NoHeaderDetected { .. })
        ));
    }
}
