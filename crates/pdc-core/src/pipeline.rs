//! Record pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Reconcile**: partition input columns against the schema
//! 2. **Project**: copy present fields, null missing ones, drop unexpected columns
//! 3. **Normalize**: date, phone and enum normalizers per tagged field
//! 4. **Validate**: fold per-record issues in stage order
//! 5. **Report**: null counts, phone classes and issue frequency
//!
//! Records are independent; the reports are folds over finished records.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, info_span, trace, warn};

use pdc_model::{
    CountryProfile, FieldReconciliation, FieldTag, Issue, NormalizedRecord, OutputBundle,
    PhoneSummary, PipelineReport, RawTable, Schema,
};
use pdc_transform::{DateOutcome, normalize_date, normalize_enum, normalize_phone, reconcile};
use pdc_validate::{
    IssueAccumulator, IssueStage, check_enum, check_required, contact_null_count,
    issue_frequency, missing_fields, required_null_counts,
};

use crate::redact::redact_value;

/// Normalized records plus the batch report.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub bundle: OutputBundle,
    pub report: PipelineReport,
}

/// Run the pipeline over a readable table.
pub fn run(table: &RawTable, schema: &Schema, country: &CountryProfile) -> PipelineOutput {
    let span = info_span!(
        "pipeline",
        schema = %schema.name,
        country = %country.name,
        records = table.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    // Stage 1: Reconcile
    let reconciliation = reconcile(schema, &table.columns);
    log_reconciliation(&reconciliation);

    // Stages 2-4: per record
    let source_columns: Vec<Option<usize>> = schema
        .fields
        .iter()
        .map(|field| table.column_index(&field.name))
        .collect();
    let mut phone_summaries: Vec<PhoneSummary> = schema
        .fields_with(FieldTag::Phone)
        .map(|field| PhoneSummary::new(field.name.as_str()))
        .collect();
    let records: Vec<NormalizedRecord> = (0..table.len())
        .map(|row| {
            let values = project_row(table, row, &source_columns);
            normalize_record(row, values, schema, country, &mut phone_summaries)
        })
        .collect();

    let bundle = OutputBundle {
        fields: schema.field_names().map(str::to_string).collect(),
        records,
    };

    // Stage 5: Report
    let report = PipelineReport {
        schema: schema.name.clone(),
        country: country.name.clone(),
        input_records: table.len(),
        missing_fields: missing_fields(schema, &reconciliation),
        required_nulls: required_null_counts(schema, &bundle),
        contact_nulls: contact_null_count(schema, &bundle),
        phone_summaries,
        issue_frequency: issue_frequency(&bundle),
        reconciliation,
    };

    info!(
        records = bundle.len(),
        clean = report.issue_frequency.clean_records,
        issues = report.issue_frequency.total_issues(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    PipelineOutput { bundle, report }
}

/// Read an upload from disk and run the pipeline over it.
///
/// The only failure is an unreadable upload; the pipeline itself never fails.
pub fn run_file(
    path: &Path,
    schema: &Schema,
    country: &CountryProfile,
) -> pdc_ingest::Result<PipelineOutput> {
    let table = pdc_ingest::read_table(path)?;
    Ok(run(&table, schema, country))
}

fn log_reconciliation(reconciliation: &FieldReconciliation) {
    if !reconciliation.missing_expected.is_empty() {
        warn!(
            fields = ?reconciliation.missing_expected,
            "expected fields missing from input"
        );
    }
    if !reconciliation.unexpected_present.is_empty() {
        info!(
            columns = ?reconciliation.unexpected_present,
            "dropping unexpected columns"
        );
    }
    debug!(
        present = reconciliation.present_expected.len(),
        missing = reconciliation.missing_expected.len(),
        unexpected = reconciliation.unexpected_present.len(),
        "reconciled columns"
    );
}

/// One value per schema field; missing columns and blank cells are null.
fn project_row(table: &RawTable, row: usize, source_columns: &[Option<usize>]) -> Vec<Option<String>> {
    source_columns
        .iter()
        .map(|column| column.and_then(|col| table.cell(row, col)).map(str::to_string))
        .collect()
}

fn normalize_record(
    row: usize,
    mut values: Vec<Option<String>>,
    schema: &Schema,
    country: &CountryProfile,
    phone_summaries: &mut [PhoneSummary],
) -> NormalizedRecord {
    let mut issues = IssueAccumulator::new();

    for (idx, field) in schema.fields.iter().enumerate() {
        if !field.has_tag(FieldTag::Date) {
            continue;
        }
        let outcome = normalize_date(values[idx].as_deref().unwrap_or_default());
        if let DateOutcome::Invalid(raw) = &outcome {
            trace!(row, field = %field.name, value = redact_value(raw), "date not recognized");
            issues.push(IssueStage::Date, Issue::check_field(field.name.as_str()));
        }
        values[idx] = outcome.into_value();
    }

    let phone_fields = schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.has_tag(FieldTag::Phone));
    for ((idx, field), summary) in phone_fields.zip(phone_summaries.iter_mut()) {
        let outcome = normalize_phone(values[idx].as_deref().unwrap_or_default(), country);
        summary.record(outcome.class);
        if !outcome.class.is_clean() {
            trace!(
                row,
                field = %field.name,
                class = %outcome.class,
                value = redact_value(values[idx].as_deref().unwrap_or_default()),
                "phone not confirmed"
            );
            issues.push(IssueStage::Phone, Issue::check_field(field.name.as_str()));
        }
        values[idx] = outcome.value;
    }

    for (idx, field) in schema.fields.iter().enumerate() {
        if let Some(rule) = &field.enum_rule {
            values[idx] = values[idx].as_deref().map(|raw| normalize_enum(raw, rule));
        }
    }

    issues.extend_stage(IssueStage::Required, check_required(schema, &values));

    for (idx, field) in schema.fields.iter().enumerate() {
        if let Some(issue) = check_enum(field, values[idx].as_deref()) {
            issues.push(IssueStage::Enum, issue);
        }
    }

    NormalizedRecord {
        values,
        issues: issues.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdc_model::{EnumFold, EnumRule, FieldSpec};

    fn schema() -> Schema {
        Schema::new(
            "mini",
            vec![
                FieldSpec::new("patient_id").with_tag(FieldTag::Required),
                FieldSpec::new("mobile")
                    .with_tag(FieldTag::Required)
                    .with_tag(FieldTag::Phone),
                FieldSpec::new("dob").with_tag(FieldTag::Date),
                FieldSpec::new("gender")
                    .with_enum(EnumRule::new(EnumFold::Prefix, &["Male", "Female"])),
            ],
        )
    }

    #[test]
    fn projects_schema_order_and_drops_extras() {
        let table = RawTable::from_rows(
            &["gender", "notes", "patient_id"],
            &[&["m", "drop me", "P1"]],
        );
        let output = run(&table, &schema(), &CountryProfile::new("sg", "65", 8));
        let record = &output.bundle.records[0];
        assert_eq!(
            record.values,
            vec![Some("P1".to_string()), None, None, Some("Male".to_string())]
        );
        assert_eq!(record.upload_issues(), "check mobile field, mobile missing");
        assert_eq!(output.report.reconciliation.unexpected_present, vec!["notes"]);
        assert_eq!(output.report.phone_summaries[0].missing, 1);
    }

    #[test]
    fn invalid_date_keeps_raw_text() {
        let table = RawTable::from_rows(
            &["patient_id", "mobile", "dob", "gender"],
            &[&["P1", "091234567", " soon ", "F"]],
        );
        let output = run(&table, &schema(), &CountryProfile::new("sg", "65", 8));
        let record = &output.bundle.records[0];
        assert_eq!(record.value(2), Some("soon"));
        assert_eq!(record.value(1), Some("+6591234567"));
        assert_eq!(record.upload_issues(), "check dob field");
    }

    #[test]
    fn blank_enum_value_is_flagged() {
        let schema = Schema::new(
            "ids",
            vec![
                FieldSpec::new("patient_id").with_tag(FieldTag::Required),
                FieldSpec::new("gender")
                    .with_enum(EnumRule::new(EnumFold::Prefix, &["Male", "Female"])),
            ],
        );
        let table = RawTable::from_rows(&["patient_id", "gender"], &[&["P1", ""]]);
        let output = run(&table, &schema, &CountryProfile::new("sg", "65", 8));
        let record = &output.bundle.records[0];
        assert_eq!(record.value(1), None);
        assert_eq!(record.upload_issues(), "check gender field");
        assert_eq!(output.report.issue_frequency.clean_records, 0);
    }

    #[test]
    fn header_only_table_yields_empty_bundle() {
        let table = RawTable::from_rows(&["patient_id"], &[]);
        let output = run(&table, &schema(), &CountryProfile::new("sg", "65", 8));
        assert!(output.bundle.is_empty());
        assert_eq!(output.report.input_records, 0);
        assert_eq!(output.report.issue_frequency.clean_records, 0);
    }
}
