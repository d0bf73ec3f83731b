//! Batch reports surfaced alongside the output tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reconciliation::FieldReconciliation;

/// Label of the frequency bucket counting records without issues.
pub const NO_ISSUES_LABEL: &str = "No issues";

/// Outcome of phone normalization for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneClass {
    /// International form confirmed.
    Clean,
    /// Short enough to be a local number; prefixed but unconfirmed.
    Ambiguous,
    /// Empty or not classifiable.
    Missing,
}

impl PhoneClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneClass::Clean => "clean",
            PhoneClass::Ambiguous => "ambiguous",
            PhoneClass::Missing => "missing",
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, PhoneClass::Clean)
    }
}

impl fmt::Display for PhoneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema field absent from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    pub field: String,
    pub required: bool,
}

/// Null count for one required field across the output records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullCount {
    pub field: String,
    pub null_count: usize,
}

/// Phone classification tally for one phone field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneSummary {
    pub field: String,
    pub clean: usize,
    pub ambiguous: usize,
    pub missing: usize,
}

impl PhoneSummary {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, class: PhoneClass) {
        match class {
            PhoneClass::Clean => self.clean += 1,
            PhoneClass::Ambiguous => self.ambiguous += 1,
            PhoneClass::Missing => self.missing += 1,
        }
    }
}

/// Occurrences of one issue text across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCount {
    pub issue: String,
    pub count: usize,
}

/// Issue-frequency table plus the "no issues" bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFrequency {
    /// Sorted by count descending, then issue text.
    pub counts: Vec<IssueCount>,
    pub clean_records: usize,
}

impl IssueFrequency {
    pub fn count_of(&self, issue: &str) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.issue == issue)
            .map_or(0, |entry| entry.count)
    }

    pub fn total_issues(&self) -> usize {
        self.counts.iter().map(|entry| entry.count).sum()
    }
}

/// Everything the presentation layer needs besides the tables themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub schema: String,
    pub country: String,
    pub input_records: usize,
    pub reconciliation: FieldReconciliation,
    pub missing_fields: Vec<MissingField>,
    pub required_nulls: Vec<NullCount>,
    /// Records in which every contact field is null; `None` when the schema
    /// declares no contact fields.
    pub contact_nulls: Option<usize>,
    pub phone_summaries: Vec<PhoneSummary>,
    pub issue_frequency: IssueFrequency,
}

impl PipelineReport {
    pub fn has_missing_required(&self) -> bool {
        self.missing_fields.iter().any(|field| field.required)
    }
}
