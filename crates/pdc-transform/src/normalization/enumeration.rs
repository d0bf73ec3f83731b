//! Folding of free-text categorical values.

use pdc_model::{EnumFold, EnumRule};

/// Fold `raw` toward a canonical value of `rule`.
///
/// The result is not guaranteed to be allowed; callers check it with
/// [`EnumRule::allows`] and keep the value either way.
pub fn normalize_enum(raw: &str, rule: &EnumRule) -> String {
    let trimmed = raw.trim();
    match rule.fold {
        EnumFold::Exact => trimmed.to_string(),
        EnumFold::Title => title_case(trimmed),
        EnumFold::Prefix => fold_prefix(trimmed, rule),
    }
}

fn fold_prefix(value: &str, rule: &EnumRule) -> String {
    let lowered = value.to_lowercase();
    rule.values
        .iter()
        .find(|allowed| {
            allowed
                .chars()
                .next()
                .is_some_and(|first| lowered.starts_with(first.to_lowercase().collect::<String>().as_str()))
        })
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts after any non-alphabetic character, so `o'brien` becomes
/// `O'Brien` and `chinese-malay` becomes `Chinese-Malay`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
