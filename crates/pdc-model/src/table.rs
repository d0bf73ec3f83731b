use serde::{Deserialize, Serialize};

/// An uploaded table as read from the source file: a header row and text cells.
///
/// Cells are kept as text exactly as ingested; an empty (or whitespace-only)
/// cell is treated as null by [`RawTable::cell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Convenience constructor used by tests and callers that build tables in memory.
    pub fn from_rows(columns: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            columns: columns.iter().map(|column| (*column).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the cell text, or `None` when the cell is absent or blank.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        let value = self.rows.get(row)?.get(column)?;
        if value.trim().is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }
}
