//! Required-field emptiness.

use pdc_model::{Issue, Schema};

/// Flag every required field whose value is null.
///
/// `values` holds one entry per schema field in schema order; fields
/// synthesized for missing columns are null and are flagged like any other.
pub fn check_required(schema: &Schema, values: &[Option<String>]) -> Vec<Issue> {
    schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_required())
        .filter(|(idx, _)| is_null(values.get(*idx)))
        .map(|(_, field)| Issue::field_missing(field.name.as_str()))
        .collect()
}

fn is_null(value: Option<&Option<String>>) -> bool {
    value
        .and_then(Option::as_deref)
        .is_none_or(|text| text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_model::{FieldSpec, FieldTag};

    #[test]
    fn flags_null_required_fields_in_schema_order() {
        let schema = Schema::new(
            "t",
            vec![
                FieldSpec::new("patient_id").with_tag(FieldTag::Required),
                FieldSpec::new("first_name"),
                FieldSpec::new("email").with_tag(FieldTag::Required),
                FieldSpec::new("mobile").with_tag(FieldTag::Required),
            ],
        );
        let values = vec![None, None, Some("  ".to_string()), Some("+6591234567".to_string())];
        let issues = check_required(&schema, &values);
        let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["patient_id missing", "email missing"]);
    }
}
