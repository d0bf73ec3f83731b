//! Delimited-text reading.

mod header;
mod reader;

pub use header::{build_table, normalize_cell, normalize_header};
pub(crate) use header::is_blank_row;
pub use reader::{read_csv_bytes, validate_encoding};
