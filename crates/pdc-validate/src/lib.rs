//! Record validation for the patient data cleaner.
//!
//! - **Issue accumulation**: per-record diagnostics folded in a fixed stage order
//! - **Required fields**: nulls in required fields become `<field> missing`
//! - **Allowed values**: non-null enum values outside the allowed set are flagged
//! - **Batch reports**: missing fields, null counts, contact nulls and issue frequency
//!
//! # Example
//!
//! ```ignore
//! use pdc_validate::{IssueAccumulator, IssueStage, check_required};
//!
//! let mut issues = IssueAccumulator::new();
//! issues.extend_stage(IssueStage::Required, check_required(&schema, &values));
//! let record = NormalizedRecord { values, issues: issues.finish() };
//! ```

mod accumulator;
mod checks;
mod report;

pub use accumulator::{IssueAccumulator, IssueStage};
pub use checks::{check_enum, check_required};
pub use report::{contact_null_count, issue_frequency, missing_fields, required_null_counts};
