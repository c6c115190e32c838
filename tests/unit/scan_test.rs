//! Whole-repository scans over in-memory histories

use contrib_check::core::models::{RemediationPolicy, Violation, ViolationKind};
use contrib_check::core::services::{ScanOptions, scan_repository};

use crate::common::fixtures::{CommitBuilder, hash, individual_remediation, third_party_remediation};
use crate::common::mocks::InMemoryHistory;

fn dirs() -> Vec<String> {
    vec!["dco-signoffs".to_string()]
}

fn scan(history: &InMemoryHistory) -> (usize, Vec<Violation>) {
    let mut violations = Vec::new();
    let summary = scan_repository(history, &dirs(), ScanOptions::default(), &mut violations).unwrap();
    assert_eq!(summary.violations, violations.len());
    (summary.commits_scanned, violations)
}

#[test]
fn test_unsigned_commit_is_reported() {
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("c0ffee1")).message("add feature").signed().build(),
            CommitBuilder::new(&hash("bad0001")).message("no signoff").build(),
        ],
    );

    let (scanned, violations) = scan(&history);

    assert_eq!(scanned, 2);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].repository, "repo");
    assert_eq!(violations[0].commit.hash, hash("bad0001"));
    assert_eq!(violations[0].kind, ViolationKind::Dco);
}

#[test]
fn test_merge_commit_without_signoff_passes() {
    let history = InMemoryHistory::new(
        "repo",
        vec![CommitBuilder::new(&hash("3e3e3e3")).message("has no signoff").merge().build()],
    );

    let (_, violations) = scan(&history);

    assert!(violations.is_empty());
}

#[test]
fn test_past_signoff_record_covers_commit() {
    let full = "11ac960e1070eacc2fe92ac9a3d1753400e1fd4b";
    let history = InMemoryHistory::new(
        "repo",
        vec![CommitBuilder::new(full).message("old work").build()],
    )
    .with_signoff(
        "dco-signoffs/Test User-repo.txt",
        &format!("I, Test User hereby sign-off-by all of my past commits\n\n{full} old work\n"),
    );

    let (_, violations) = scan(&history);

    assert!(violations.is_empty());
}

#[test]
fn test_signoff_outside_configured_dirs_is_ignored() {
    let full = "11ac960e1070eacc2fe92ac9a3d1753400e1fd4b";
    let history = InMemoryHistory::new(
        "repo",
        vec![CommitBuilder::new(full).message("old work").build()],
    )
    .with_signoff("docs/signoffs.txt", full);

    let (_, violations) = scan(&history);

    assert_eq!(violations.len(), 1);
}

#[test]
fn test_individual_remediation_covers_earlier_commits() {
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("fedcba9"))
                .message(&individual_remediation(
                    "Test User",
                    "test@example.com",
                    &["aaaaaaa", "bbbbbbb"],
                ))
                .build(),
            CommitBuilder::new(&hash("bbbbbbb")).message("second").build(),
            CommitBuilder::new(&hash("aaaaaaa")).message("first").build(),
        ],
    )
    .with_policy(RemediationPolicy {
        individual: true,
        third_party: false,
    });

    let (scanned, violations) = scan(&history);

    assert_eq!(scanned, 3);
    assert!(violations.is_empty());
}

#[test]
fn test_remediation_ignored_without_policy() {
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("fedcba9"))
                .message(&individual_remediation("Test User", "test@example.com", &["aaaaaaa"]))
                .build(),
            CommitBuilder::new(&hash("aaaaaaa")).message("first").build(),
        ],
    );

    let (_, violations) = scan(&history);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].commit.hash, hash("aaaaaaa"));
}

#[test]
fn test_remediation_by_someone_else_does_not_count() {
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("fedcba9"))
                .author("Mallory", "mallory@example.com")
                .message(&individual_remediation("Test User", "test@example.com", &["aaaaaaa"]))
                .build(),
            CommitBuilder::new(&hash("aaaaaaa")).message("first").build(),
        ],
    )
    .with_policy(RemediationPolicy::allow_all());

    let (_, violations) = scan(&history);

    assert_eq!(violations.len(), 1);
}

#[test]
fn test_third_party_remediation_needs_third_party_policy() {
    let commits = || {
        vec![
            CommitBuilder::new(&hash("fedcba9"))
                .author("Lead", "lead@example.com")
                .message(&third_party_remediation(
                    ("Test User", "test@example.com"),
                    ("Lead", "lead@example.com"),
                    &["aaaaaaa"],
                ))
                .build(),
            CommitBuilder::new(&hash("aaaaaaa")).message("first").build(),
        ]
    };

    let individual_only = InMemoryHistory::new("repo", commits()).with_policy(RemediationPolicy {
        individual: true,
        third_party: false,
    });
    assert_eq!(scan(&individual_only).1.len(), 1);

    let third_party = InMemoryHistory::new("repo", commits()).with_policy(RemediationPolicy {
        individual: false,
        third_party: true,
    });
    assert!(scan(&third_party).1.is_empty());
}

#[test]
fn test_unsigned_remediation_commit_is_itself_a_violation() {
    let message = "I, Test User <test@example.com>, hereby add my Signed-off-by to this commit: aaaaaaa";
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("fedcba9")).message(message).build(),
            CommitBuilder::new(&hash("aaaaaaa")).message("first").build(),
        ],
    )
    .with_policy(RemediationPolicy::allow_all());

    let (_, violations) = scan(&history);

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].commit.hash, hash("fedcba9"));
}

#[test]
fn test_empty_repository_is_skipped() {
    let history = InMemoryHistory::empty("empty");
    let mut violations = Vec::new();

    let summary =
        scan_repository(&history, &dirs(), ScanOptions::default(), &mut violations).unwrap();

    assert!(summary.skipped);
    assert_eq!(summary.repository, "empty");
    assert_eq!(summary.commits_scanned, 0);
    assert!(violations.is_empty());
}

#[test]
fn test_walk_error_propagates() {
    let history = InMemoryHistory::new(
        "repo",
        vec![
            CommitBuilder::new(&hash("bad0001")).message("no signoff").build(),
            CommitBuilder::new(&hash("bad0002")).message("no signoff").build(),
        ],
    )
    .broken_at(1);
    let mut violations = Vec::new();

    let result = scan_repository(&history, &dirs(), ScanOptions::default(), &mut violations);

    assert!(result.is_err());
    assert_eq!(violations.len(), 1);
}

#[test]
fn test_dco_disabled_reports_nothing() {
    let history = InMemoryHistory::new(
        "repo",
        vec![CommitBuilder::new(&hash("bad0001")).message("no signoff").build()],
    );
    let mut violations = Vec::new();

    let summary =
        scan_repository(&history, &dirs(), ScanOptions { dco: false }, &mut violations).unwrap();

    assert_eq!(summary.commits_scanned, 1);
    assert_eq!(summary.violations, 0);
    assert!(violations.is_empty());
}
