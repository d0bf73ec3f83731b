//! Normalized output records and the two output views over them.

use serde::{Deserialize, Serialize};

use crate::issue::IssueList;

/// Name of the issues column appended to the full output table.
pub const UPLOAD_ISSUES_COLUMN: &str = "upload_issues";

/// One output row: a value per schema field (schema order) plus its issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub values: Vec<Option<String>>,
    pub issues: IssueList,
}

impl NormalizedRecord {
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|value| value.as_deref())
    }

    pub fn upload_issues(&self) -> String {
        self.issues.render()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// The normalized records of one run plus the schema column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBundle {
    pub fields: Vec<String>,
    pub records: Vec<NormalizedRecord>,
}

impl OutputBundle {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == name)
    }

    /// Header of the `full` view: schema fields followed by `upload_issues`.
    pub fn full_header(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(UPLOAD_ISSUES_COLUMN))
            .collect()
    }

    /// Rows of the `full` view; nulls render as empty strings.
    pub fn full_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records.iter().map(|record| {
            let mut row = clean_row(record);
            row.push(record.upload_issues());
            row
        })
    }

    /// Rows of the `clean` view: schema fields only.
    pub fn clean_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.records.iter().map(clean_row)
    }

    pub fn clean_record_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_clean()).count()
    }
}

fn clean_row(record: &NormalizedRecord) -> Vec<String> {
    record
        .values
        .iter()
        .map(|value| value.clone().unwrap_or_default())
        .collect()
}
