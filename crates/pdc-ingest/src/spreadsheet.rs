//! Spreadsheet (xls, xlsx, xlsm, ods) reading via calamine.
//!
//! Only the first worksheet is read. Every cell is rendered as text. Numeric
//! cells print without a trailing `.0`, so day serials typed as plain numbers
//! reach the date normalizer as e.g. `"44197"`. Cells carrying a date format
//! are resolved by calamine (including the 1904 date system) and rendered as
//! `YYYY-MM-DD HH:MM:SS`.

use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use pdc_model::RawTable;

use crate::csv::{build_table, is_blank_row, normalize_cell};
use crate::error::{IngestError, Result};

/// Text form of date-formatted cells.
const CELL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads the first worksheet of a workbook held in memory.
pub fn read_spreadsheet_bytes(bytes: Vec<u8>, origin: &str) -> Result<RawTable> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyInput {
            origin: origin.to_string(),
        });
    }
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Workbook {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    let sheet_count = workbook.sheet_names().len();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            origin: origin.to_string(),
        })?
        .map_err(|e| IngestError::Workbook {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
    debug!(origin, sheets = sheet_count, "reading first worksheet");

    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| !is_blank_row(row))
        .collect();
    build_table(raw_rows, origin)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) => normalize_cell(value),
        Data::DateTime(value) => datetime_text(value),
        other => normalize_cell(&other.to_string()),
    }
}

/// Durations and out-of-range values keep the raw serial.
fn datetime_text(value: &ExcelDateTime) -> String {
    value
        .is_datetime()
        .then(|| value.as_datetime())
        .flatten()
        .map_or_else(
            || normalize_cell(&value.to_string()),
            |datetime| datetime.format(CELL_DATETIME_FORMAT).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    fn date_cell(serial: f64, is_1904: bool) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, is_1904))
    }

    #[test]
    fn numeric_cells_render_without_fraction() {
        assert_eq!(cell_text(&Data::Float(44197.0)), "44197");
        assert_eq!(cell_text(&Data::Float(91234567.0)), "91234567");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::String("  Tan ".to_string())), "Tan");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn date_cells_render_as_calendar_text() {
        assert_eq!(cell_text(&date_cell(44197.0, false)), "2021-01-01 00:00:00");
        assert_eq!(cell_text(&date_cell(44197.5, false)), "2021-01-01 12:00:00");
    }

    #[test]
    fn early_date_cells_keep_full_date() {
        // Serial 7380 has four digits and would read as free text.
        assert_eq!(cell_text(&date_cell(7380.0, false)), "1920-03-15 00:00:00");
    }

    #[test]
    fn date_cells_honour_1904_system() {
        assert_eq!(cell_text(&date_cell(42735.0, true)), "2021-01-01 00:00:00");
    }

    #[test]
    fn iso_and_duration_cells() {
        assert_eq!(
            cell_text(&Data::DateTimeIso("2021-01-01T08:30:00".to_string())),
            "2021-01-01T08:30:00"
        );
        let duration = Data::DateTime(ExcelDateTime::new(
            1.5,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_text(&duration), "1.5");
    }

    #[test]
    fn garbage_bytes_are_unreadable() {
        let result = read_spreadsheet_bytes(b"not a workbook".to_vec(), "junk.xlsx");
        assert!(matches!(result, Err(IngestError::Workbook { .. })));
    }
}
