//! Phone number normalization to `+<dialing code><subscriber>` form.

use pdc_model::{CountryProfile, PhoneClass};

/// Result of normalizing one phone cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneOutcome {
    pub value: Option<String>,
    pub class: PhoneClass,
}

impl PhoneOutcome {
    fn new(value: Option<String>, class: PhoneClass) -> Self {
        Self { value, class }
    }
}

/// Normalize a raw phone cell for `country`.
///
/// Rules, first match wins:
/// 1. the longest run of digits is kept (the first on ties); everything else separates runs
/// 2. no digits: `Missing`, null
/// 3. starts with the dialing code: `+digits`, `Clean`
/// 4. leading trunk zeros: zeros stripped and the code prefixed, `Clean`
///    (all zeros is `Missing`)
/// 5. no longer than a local number: code prefixed, `Ambiguous`
/// 6. otherwise: `Missing`, the bare digits kept
pub fn normalize_phone(raw: &str, country: &CountryProfile) -> PhoneOutcome {
    let digits = longest_digit_run(raw);
    if digits.is_empty() {
        return PhoneOutcome::new(None, PhoneClass::Missing);
    }

    let code = country.dialing_code.as_str();
    if digits.starts_with(code) {
        return PhoneOutcome::new(Some(format!("+{digits}")), PhoneClass::Clean);
    }

    if digits.starts_with('0') {
        let subscriber = digits.trim_start_matches('0');
        if subscriber.is_empty() {
            return PhoneOutcome::new(Some(digits.to_string()), PhoneClass::Missing);
        }
        return PhoneOutcome::new(Some(format!("+{code}{subscriber}")), PhoneClass::Clean);
    }

    if digits.len() <= country.local_digits {
        return PhoneOutcome::new(Some(format!("+{code}{digits}")), PhoneClass::Ambiguous);
    }

    PhoneOutcome::new(Some(digits.to_string()), PhoneClass::Missing)
}

fn longest_digit_run(raw: &str) -> &str {
    raw.split(|ch: char| !ch.is_ascii_digit())
        .fold("", |best, run| if run.len() > best.len() { run } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sg() -> CountryProfile {
        CountryProfile::new("sg", "65", 8)
    }

    #[test]
    fn longest_run_wins_ties_go_first() {
        assert_eq!(longest_digit_run("+65 9123-4567"), "9123");
        assert_eq!(longest_digit_run("ext 12 / 9123 4567 / 34"), "9123");
        assert_eq!(longest_digit_run("(65)91234567"), "91234567");
        assert_eq!(longest_digit_run("none"), "");
    }

    #[test]
    fn trunk_prefix_is_replaced() {
        let outcome = normalize_phone("091234567", &sg());
        assert_eq!(outcome.value.as_deref(), Some("+6591234567"));
        assert_eq!(outcome.class, PhoneClass::Clean);
    }

    #[test]
    fn local_number_is_ambiguous() {
        let outcome = normalize_phone("91234567", &sg());
        assert_eq!(outcome.value.as_deref(), Some("+6591234567"));
        assert_eq!(outcome.class, PhoneClass::Ambiguous);
    }

    #[test]
    fn international_number_is_clean() {
        let outcome = normalize_phone("+6591234567", &sg());
        assert_eq!(outcome.value.as_deref(), Some("+6591234567"));
        assert_eq!(outcome.class, PhoneClass::Clean);
    }

    #[test]
    fn unclassifiable_numbers_are_missing() {
        let outcome = normalize_phone("", &sg());
        assert_eq!(outcome, PhoneOutcome::new(None, PhoneClass::Missing));

        let outcome = normalize_phone("n/a", &sg());
        assert_eq!(outcome.value, None);

        let outcome = normalize_phone("0000", &sg());
        assert_eq!(outcome.value.as_deref(), Some("0000"));
        assert_eq!(outcome.class, PhoneClass::Missing);

        let outcome = normalize_phone("4412345678901", &sg());
        assert_eq!(outcome.value.as_deref(), Some("4412345678901"));
        assert_eq!(outcome.class, PhoneClass::Missing);
    }

    #[test]
    fn spreadsheet_float_keeps_integer_digits() {
        // A phone stored as a float renders as "91234567" upstream, but a
        // stray fractional part must not change the subscriber digits.
        let outcome = normalize_phone("91234567.0", &sg());
        assert_eq!(outcome.value.as_deref(), Some("+6591234567"));
    }
}
