//! Column reconciliation against a schema.

use std::collections::BTreeSet;

use pdc_model::{FieldReconciliation, Schema};

/// Partition `input_columns` into present, missing and unexpected field sets.
///
/// Matching is by exact name. Present and missing follow schema order;
/// unexpected columns follow input order, first occurrence only.
pub fn reconcile<S: AsRef<str>>(schema: &Schema, input_columns: &[S]) -> FieldReconciliation {
    let input: BTreeSet<&str> = input_columns.iter().map(AsRef::as_ref).collect();

    let (present_expected, missing_expected): (Vec<String>, Vec<String>) = schema
        .field_names()
        .map(str::to_string)
        .partition(|name| input.contains(name.as_str()));

    let mut seen = BTreeSet::new();
    let unexpected_present = input_columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|column| !schema.contains(column) && seen.insert(*column))
        .map(str::to_string)
        .collect();

    FieldReconciliation {
        present_expected,
        missing_expected,
        unexpected_present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_model::FieldSpec;

    fn schema() -> Schema {
        Schema::new(
            "t",
            vec![
                FieldSpec::new("patient_id"),
                FieldSpec::new("email"),
                FieldSpec::new("mobile"),
            ],
        )
    }

    #[test]
    fn partitions_columns() {
        let result = reconcile(&schema(), &["notes", "mobile", "patient_id", "notes", "Email"]);
        assert_eq!(result.present_expected, vec!["patient_id", "mobile"]);
        assert_eq!(result.missing_expected, vec!["email"]);
        assert_eq!(result.unexpected_present, vec!["notes", "Email"]);
        assert!(!result.is_exact());
    }

    #[test]
    fn exact_match() {
        let result = reconcile(&schema(), &["patient_id", "email", "mobile"]);
        assert!(result.is_exact());
        assert!(result.present_expected.iter().any(|name| name == "email"));
    }

    #[test]
    fn empty_input_misses_everything() {
        let result = reconcile::<&str>(&schema(), &[]);
        assert_eq!(result.missing_expected.len(), 3);
        assert!(result.present_expected.is_empty());
    }
}
