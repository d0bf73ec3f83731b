//! CSV parsing with every cell kept as text.

use ::csv::ReaderBuilder;

use pdc_model::RawTable;

use super::header::{build_table, is_blank_row, normalize_cell};
use crate::error::{IngestError, Result};

/// Rejects UTF-16 byte-order marks; UTF-8 (with or without BOM) is accepted.
pub fn validate_encoding(bytes: &[u8], origin: &str) -> Result<()> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                origin: origin.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                origin: origin.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Reads comma-separated bytes into a [`RawTable`]. The first non-blank row is the header.
pub fn read_csv_bytes(bytes: &[u8], origin: &str) -> Result<RawTable> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyInput {
            origin: origin.to_string(),
        });
    }
    validate_encoding(bytes, origin)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if is_blank_row(&row) {
            continue;
        }
        raw_rows.push(row);
    }
    build_table(raw_rows, origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_values_as_text() {
        let table = read_csv_bytes(b"patient_id,mobile,dob\nP1,091234567,44197\n", "t").unwrap();
        assert_eq!(table.columns, vec!["patient_id", "mobile", "dob"]);
        assert_eq!(table.rows[0], vec!["P1", "091234567", "44197"]);
    }

    #[test]
    fn test_skips_blank_rows_and_strips_bom() {
        let table = read_csv_bytes("\u{feff}a,b\n,\n1,2\n\n".as_bytes(), "t").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_quoted_fields() {
        let table = read_csv_bytes(b"name,note\n\"Tan, Mei\",\"said \"\"hi\"\"\"\n", "t").unwrap();
        assert_eq!(table.rows[0], vec!["Tan, Mei", "said \"hi\""]);
    }

    #[test]
    fn test_empty_upload() {
        assert!(matches!(
            read_csv_bytes(b"", "t"),
            Err(IngestError::EmptyInput { .. })
        ));
        assert!(matches!(
            read_csv_bytes(b"  \n", "t"),
            Err(IngestError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_utf16_rejected() {
        assert!(matches!(
            read_csv_bytes(&[0xFF, 0xFE, b'a', 0], "t"),
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        assert!(matches!(
            read_csv_bytes(&[b'a', b',', b'b', b'\n', 0xC3, 0x28], "t"),
            Err(IngestError::CsvParse { .. })
        ));
    }
}
