//! Batch-level data-quality reports over finished records.

use std::collections::BTreeMap;

use tracing::debug;

use pdc_model::{
    FieldReconciliation, IssueCount, IssueFrequency, MissingField, NullCount, OutputBundle,
    Schema,
};

/// Schema fields absent from the input, flagged with whether they are required.
pub fn missing_fields(schema: &Schema, reconciliation: &FieldReconciliation) -> Vec<MissingField> {
    reconciliation
        .missing_expected
        .iter()
        .map(|name| MissingField {
            field: name.clone(),
            required: schema.field(name).is_some_and(|field| field.is_required()),
        })
        .collect()
}

/// Null count of every required field across the output records, schema order.
pub fn required_null_counts(schema: &Schema, bundle: &OutputBundle) -> Vec<NullCount> {
    schema
        .required_fields()
        .into_iter()
        .map(|name| NullCount {
            field: name.to_string(),
            null_count: bundle
                .field_index(name)
                .map_or(bundle.len(), |idx| null_count(bundle, idx)),
        })
        .collect()
}

/// Records in which every contact field is null.
///
/// Returns `None` when the schema declares no contact fields.
pub fn contact_null_count(schema: &Schema, bundle: &OutputBundle) -> Option<usize> {
    if schema.contact_fields.is_empty() {
        return None;
    }
    let indexes: Vec<Option<usize>> = schema
        .contact_fields
        .iter()
        .map(|name| bundle.field_index(name))
        .collect();
    let count = bundle
        .records
        .iter()
        .filter(|record| {
            indexes
                .iter()
                .all(|idx| idx.is_none_or(|idx| record.value(idx).is_none()))
        })
        .count();
    Some(count)
}

/// Occurrences of each issue text across all records plus the clean-record bucket.
pub fn issue_frequency(bundle: &OutputBundle) -> IssueFrequency {
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for record in &bundle.records {
        for issue in record.issues.iter() {
            *tally.entry(issue.to_string()).or_default() += 1;
        }
    }

    let mut counts: Vec<IssueCount> = tally
        .into_iter()
        .map(|(issue, count)| IssueCount { issue, count })
        .collect();
    // BTreeMap order already sorts by text; a stable sort keeps it within equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    let clean_records = bundle.clean_record_count();
    debug!(
        distinct = counts.len(),
        clean = clean_records,
        "issue frequency computed"
    );
    IssueFrequency {
        counts,
        clean_records,
    }
}

fn null_count(bundle: &OutputBundle, idx: usize) -> usize {
    bundle
        .records
        .iter()
        .filter(|record| record.value(idx).is_none())
        .count()
}
