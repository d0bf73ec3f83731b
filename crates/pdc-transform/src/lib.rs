//! Record transformation for the patient data cleaner.
//!
//! - **reconcile**: partitions input columns against a schema
//! - **normalization**: per-cell date, phone and enum normalizers
//!
//! Every function here is pure. A normalizer never fails the batch; it returns
//! an outcome the caller turns into a per-record issue.

pub mod normalization;
pub mod reconcile;

pub use normalization::{
    DateOutcome, PhoneOutcome, normalize_date, normalize_enum, normalize_phone, parse_date,
    serial_to_date, title_case,
};
pub use reconcile::reconcile;
