//! Data model for the patient data cleaner.
//!
//! Schemas and country profiles are declarative and immutable; tables flow
//! through the pipeline as [`RawTable`] in and [`OutputBundle`] out, with a
//! [`PipelineReport`] describing what happened on the way.

pub mod issue;
pub mod reconciliation;
pub mod record;
pub mod report;
pub mod schema;
pub mod table;

pub use issue::{ISSUE_SEPARATOR, Issue, IssueList};
pub use reconciliation::FieldReconciliation;
pub use record::{NormalizedRecord, OutputBundle, UPLOAD_ISSUES_COLUMN};
pub use report::{
    IssueCount, IssueFrequency, MissingField, NO_ISSUES_LABEL, NullCount, PhoneClass,
    PhoneSummary, PipelineReport,
};
pub use schema::{CountryProfile, EnumFold, EnumRule, FieldSpec, FieldTag, Schema};
pub use table::RawTable;
