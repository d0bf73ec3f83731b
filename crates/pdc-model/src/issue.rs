//! Per-record data-quality issues.
//!
//! Issues are accumulated append-only while a record moves through the
//! normalization stages and are rendered into the `upload_issues` column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used between issue fragments in `upload_issues`.
pub const ISSUE_SEPARATOR: &str = ", ";

/// A single diagnostic attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The value could not be confidently normalized or is outside the allowed set.
    CheckField { field: String },
    /// A required field is null.
    FieldMissing { field: String },
}

impl Issue {
    pub fn check_field(field: impl Into<String>) -> Self {
        Issue::CheckField {
            field: field.into(),
        }
    }

    pub fn field_missing(field: impl Into<String>) -> Self {
        Issue::FieldMissing {
            field: field.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::CheckField { field } => write!(f, "check {field} field"),
            Issue::FieldMissing { field } => write!(f, "{field} missing"),
        }
    }
}

/// Ordered, append-only list of issues for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueList(Vec<Issue>);

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// The `upload_issues` cell: fragments joined by [`ISSUE_SEPARATOR`], empty when clean.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IssueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(ISSUE_SEPARATOR)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl Extend<Issue> for IssueList {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_display_matches_upload_text() {
        assert_eq!(Issue::check_field("mobile").to_string(), "check mobile field");
        assert_eq!(Issue::field_missing("email").to_string(), "email missing");
    }

    #[test]
    fn issue_list_renders_without_leading_separator() {
        let mut issues = IssueList::new();
        assert_eq!(issues.render(), "");
        issues.push(Issue::check_field("mobile"));
        issues.push(Issue::field_missing("email"));
        assert_eq!(issues.render(), "check mobile field, email missing");
        assert_eq!(issues.len(), 2);
    }
}
