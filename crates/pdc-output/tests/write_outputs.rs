use std::fs;

use pdc_model::{IssueList, NormalizedRecord, OutputBundle, PipelineReport};
use pdc_output::{OutputPaths, write_outputs, write_report_json};
use tempfile::tempdir;

fn bundle() -> OutputBundle {
    OutputBundle {
        fields: vec!["patient_id".into(), "email".into()],
        records: vec![NormalizedRecord {
            values: vec![Some("P1".into()), Some("mei@example.com".into())],
            issues: IssueList::new(),
        }],
    }
}

#[test]
fn writes_both_files_into_new_directory() {
    let dir = tempdir().expect("tempdir");
    let paths = OutputPaths::new(&dir.path().join("nested/out"), "batch");
    write_outputs(&bundle(), &paths).expect("write outputs");

    let full = fs::read_to_string(&paths.full).expect("read full");
    assert_eq!(full, "patient_id,email,upload_issues\nP1,mei@example.com,\n");

    let clean = fs::read_to_string(&paths.clean).expect("read clean");
    assert_eq!(clean, "P1,mei@example.com\n");
    assert!(
        paths
            .clean
            .file_name()
            .is_some_and(|name| name == "batch_for_upload.csv")
    );
}

#[test]
fn header_only_bundle_writes_header_and_empty_clean_file() {
    let dir = tempdir().expect("tempdir");
    let paths = OutputPaths::new(dir.path(), "empty");
    let bundle = OutputBundle {
        fields: vec!["patient_id".into()],
        records: Vec::new(),
    };
    write_outputs(&bundle, &paths).expect("write outputs");
    assert_eq!(
        fs::read_to_string(&paths.full).expect("read full"),
        "patient_id,upload_issues\n"
    );
    assert_eq!(fs::read_to_string(&paths.clean).expect("read clean"), "");
}

#[test]
fn report_json_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("report.json");
    let report = PipelineReport {
        schema: "saas".into(),
        country: "sg".into(),
        input_records: 3,
        contact_nulls: Some(1),
        ..PipelineReport::default()
    };
    write_report_json(&path, &report).expect("write report");

    let text = fs::read_to_string(&path).expect("read report");
    let parsed: PipelineReport = serde_json::from_str(&text).expect("parse report");
    assert_eq!(parsed, report);
}
