//! Per-cell normalizers.
//!
//! - **datetime**: spreadsheet serials and free-text dates to UTC timestamps
//! - **phone**: digit extraction and dialing-code inference
//! - **enumeration**: folding categorical values to canonical spellings

pub mod datetime;
pub mod enumeration;
pub mod phone;

pub use datetime::{DateOutcome, normalize_date, parse_date, serial_to_date};
pub use enumeration::{normalize_enum, title_case};
pub use phone::{PhoneOutcome, normalize_phone};
