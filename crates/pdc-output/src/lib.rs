//! Output generation for the patient data cleaner.
//!
//! Two CSV files per run:
//! - `<name>.csv`: schema fields plus `upload_issues`, with a header row
//! - `<name>_for_upload.csv`: schema fields only, no header row
//!
//! The batch report can additionally be written as JSON.

mod error;
mod paths;
mod report;
mod tables;

pub use error::{OutputError, Result};
pub use paths::{FOR_UPLOAD_SUFFIX, OutputPaths, ensure_parent_dir};
pub use report::write_report_json;
pub use tables::{write_clean_csv, write_full_csv, write_outputs};
