//! CLI library components for the patient data cleaner.

pub mod logging;
pub mod pipeline;
pub mod types;
