//! CSV report and remediation templates

use std::fs;

use chrono::DateTime;
use contrib_check::adapters::file::{RemediationTemplates, header};
use contrib_check::adapters::report::ReportSink;
use contrib_check::core::models::{Author, Commit, Violation, ViolationKind};
use contrib_check::core::ports::ViolationSink;
use tempfile::TempDir;

fn violation(hash: &str, name: &str, message: &str) -> Violation {
    Violation::new(
        "widgets",
        Commit::new(
            hash,
            Author::new(name, format!("{}@example.com", name.to_lowercase())),
            message,
            1,
            DateTime::parse_from_rfc3339("2023-05-04T12:00:00+02:00").unwrap(),
        ),
        ViolationKind::Dco,
    )
}

#[test]
fn test_report_rows_and_templates() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("out/widgets.csv");
    let templates = RemediationTemplates::new(dir.path().join("dco-signoffs"));
    let mut sink = ReportSink::create(&report, templates.clone()).unwrap();

    sink.report(&violation("aaaa", "Jane", "first, with \"quotes\"\n")).unwrap();
    sink.report(&violation("bbbb", "Jane", "second\n")).unwrap();
    sink.report(&violation("cccc", "Bob", "third\n")).unwrap();

    let csv = fs::read_to_string(&report).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0].iter().collect::<Vec<_>>(),
        vec![
            "widgets",
            "aaaa",
            "first, with \"quotes\"\n",
            "Jane",
            "jane@example.com",
            "2023-05-04T12:00:00+02:00",
            "dco",
            "The commit did not have a DCO Signoff",
        ]
    );
    assert!(csv.starts_with("\"widgets\",\"aaaa\","));

    let jane = fs::read_to_string(templates.path_for("widgets", "Jane")).unwrap();
    assert_eq!(
        jane,
        format!(
            "{}aaaa first, with \"quotes\"\n\nbbbb second\n\n",
            header("Jane", "jane@example.com")
        )
    );
    let bob = dir.path().join("dco-signoffs/widgets/Bob-widgets.txt");
    assert!(bob.exists());
}

#[test]
fn test_report_created_without_violations() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("widgets.csv");
    fs::write(&report, "stale").unwrap();

    let sink = ReportSink::create(&report, RemediationTemplates::new(dir.path().join("t"))).unwrap();
    drop(sink);

    assert_eq!(fs::read_to_string(&report).unwrap(), "");
    assert!(!dir.path().join("t").exists());
}

#[test]
fn test_clear_removes_previous_templates() {
    let dir = TempDir::new().unwrap();
    let templates = RemediationTemplates::new(dir.path().join("dco-signoffs"));
    templates
        .append("widgets", &violation("aaaa", "Jane", "first\n").commit)
        .unwrap();
    assert!(templates.root().exists());

    templates.clear().unwrap();
    templates.clear().unwrap();

    assert!(!templates.root().exists());
}
