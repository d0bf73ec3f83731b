//! Pipeline orchestration for the patient data cleaner.
//!
//! [`run`] takes a readable [`pdc_model::RawTable`], a schema and a country
//! profile and produces the normalized [`pdc_model::OutputBundle`] with its
//! [`pdc_model::PipelineReport`]. It never fails: every data problem becomes a
//! per-record issue or a report entry.

pub mod pipeline;
pub mod redact;

pub use pipeline::{PipelineOutput, run, run_file};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
