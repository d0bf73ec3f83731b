//! Allowed-value checks for enum fields.

use pdc_model::{FieldSpec, Issue};

/// Flag a value outside the field's allowed set.
///
/// A null value is never one of the allowed values, so it is flagged too.
/// Fields without an enum rule always pass.
pub fn check_enum(field: &FieldSpec, value: Option<&str>) -> Option<Issue> {
    let rule = field.enum_rule.as_ref()?;
    match value.map(str::trim) {
        Some(value) if rule.allows(value) => None,
        _ => Some(Issue::check_field(field.name.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_model::{EnumFold, EnumRule};

    fn gender() -> FieldSpec {
        FieldSpec::new("gender").with_enum(EnumRule::new(EnumFold::Prefix, &["Male", "Female"]))
    }

    #[test]
    fn flags_values_outside_allowed_set() {
        assert_eq!(
            check_enum(&gender(), Some("other")),
            Some(Issue::check_field("gender"))
        );
        assert_eq!(check_enum(&gender(), Some("Female")), None);
    }

    #[test]
    fn null_enum_values_are_flagged() {
        assert_eq!(check_enum(&gender(), None), Some(Issue::check_field("gender")));
        assert_eq!(
            check_enum(&gender(), Some("  ")),
            Some(Issue::check_field("gender"))
        );
    }

    #[test]
    fn fields_without_rule_pass() {
        assert_eq!(check_enum(&FieldSpec::new("notes"), Some("anything")), None);
        assert_eq!(check_enum(&FieldSpec::new("notes"), None), None);
    }
}
