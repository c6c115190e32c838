//! Integration tests for the contrib-check CLI
//!
//! These tests build real git repositories in temporary directories and run
//! the binary against them, checking the CSV report and remediation
//! templates it leaves behind.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use common::git_repo::TempGitRepo;

/// Helper function to create a contrib-check command
fn contrib_check() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("contrib-check"))
}

/// Run a scan of `repo` from inside `workdir`
fn scan_repo(repo: &TempGitRepo, workdir: &Path) -> assert_cmd::assert::Assert {
    contrib_check()
        .args(["--repo", repo.path().to_str().unwrap()])
        .current_dir(workdir)
        .assert()
}

/// Rows of a CSV report
fn report_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_help() {
    contrib_check()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--org"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version() {
    contrib_check()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_target_is_required() {
    contrib_check().assert().failure();
}

#[test]
fn test_repo_and_org_are_exclusive() {
    contrib_check()
        .args(["--repo", ".", "--org", "testorg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unsigned_commit_is_reported() {
    let repo = TempGitRepo::new("widgets");
    let unsigned = repo.commit_file("a.txt", "a", "no signoff");
    repo.write_file("b.txt", "b");
    repo.stage("b.txt");
    repo.commit_signed("signed");
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path())
        .success()
        .stdout(predicate::str::contains("1 commit(s) missing a DCO signoff"));

    let rows = report_rows(&work.path().join("widgets.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "widgets");
    assert_eq!(rows[0][1], unsigned);
    assert_eq!(rows[0][3], "Test User");
    assert_eq!(rows[0][4], "test@example.com");
    assert_eq!(rows[0][6], "dco");
    assert_eq!(rows[0][7], "The commit did not have a DCO Signoff");

    let template = work.path().join("dco-signoffs/widgets/Test User-widgets.txt");
    let content = fs::read_to_string(template).unwrap();
    assert!(content.starts_with(
        "I, Test User hereby sign-off-by all of my past commits to this repo subject to the \
         Developer Certificate of Origin (DCO), Version 1.1. In the past I have used emails: test@example.com\n\n"
    ));
    assert!(content.contains(&format!("{unsigned} no signoff")));
}

#[test]
fn test_signed_history_with_merge_passes() {
    let repo = TempGitRepo::new("widgets");
    repo.write_file("a.txt", "a");
    repo.stage("a.txt");
    repo.commit_signed("first");
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.write_file("b.txt", "b");
    repo.stage("b.txt");
    repo.commit_signed("topic work");
    repo.git(&["checkout", "-q", "main"]);
    repo.write_file("c.txt", "c");
    repo.stage("c.txt");
    repo.commit_signed("main work");
    repo.git(&["merge", "-q", "--no-ff", "-m", "has no signoff", "topic"]);
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path())
        .success()
        .stdout(predicate::str::contains("All commits have a DCO signoff."));

    assert!(report_rows(&work.path().join("widgets.csv")).is_empty());
    assert!(!work.path().join("dco-signoffs").exists());
}

#[test]
fn test_past_signoff_file_covers_commit() {
    let repo = TempGitRepo::new("widgets");
    let old = repo.commit_file("a.txt", "a", "old work");
    repo.write_file(
        "dco-signoffs/Test User-widgets.txt",
        &format!("I, Test User hereby sign-off-by all of my past commits\n\n{old} old work\n"),
    );
    repo.stage("dco-signoffs");
    repo.commit_signed("Add past signoffs");
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path()).success();

    assert!(report_rows(&work.path().join("widgets.csv")).is_empty());
}

#[test]
fn test_remediation_commit_with_policy() {
    let repo = TempGitRepo::new("widgets");
    let old = repo.commit_file("a.txt", "a", "old work");
    repo.write_file(".github/dco.yml", "allowRemediationCommits:\n  individual: true\n");
    repo.stage(".github/dco.yml");
    repo.commit_signed("Allow remediation commits");
    let message = format!(
        "DCO Remediation Commit for Test User <test@example.com>\n\n\
         I, Test User <test@example.com>, hereby add my Signed-off-by to this commit: {}",
        &old[..7]
    );
    repo.git(&["commit", "-q", "-s", "--allow-empty", "-m", &message]);
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path()).success();

    assert!(report_rows(&work.path().join("widgets.csv")).is_empty());
}

#[test]
fn test_remediation_commit_without_policy() {
    let repo = TempGitRepo::new("widgets");
    let old = repo.commit_file("a.txt", "a", "old work");
    let message = format!(
        "I, Test User <test@example.com>, hereby add my Signed-off-by to this commit: {}",
        &old[..7]
    );
    repo.git(&["commit", "-q", "-s", "--allow-empty", "-m", &message]);
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path()).success();

    let rows = report_rows(&work.path().join("widgets.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], old);
}

#[test]
fn test_dco_check_can_be_disabled() {
    let repo = TempGitRepo::new("widgets");
    repo.commit_file("a.txt", "a", "no signoff");
    let work = TempDir::new().unwrap();

    contrib_check()
        .args(["--repo", repo.path().to_str().unwrap(), "--dco", "false"])
        .current_dir(work.path())
        .assert()
        .success();

    assert!(report_rows(&work.path().join("widgets.csv")).is_empty());
}

#[test]
fn test_output_dir() {
    let repo = TempGitRepo::new("widgets");
    repo.commit_file("a.txt", "a", "no signoff");
    let work = TempDir::new().unwrap();

    contrib_check()
        .args(["--repo", repo.path().to_str().unwrap(), "-o", "reports"])
        .current_dir(work.path())
        .assert()
        .success();

    assert_eq!(report_rows(&work.path().join("reports/widgets.csv")).len(), 1);
}

#[test]
fn test_empty_repo_is_skipped() {
    let repo = TempGitRepo::new("empty");
    let work = TempDir::new().unwrap();

    scan_repo(&repo, work.path())
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stderr(predicate::str::contains("invalid or empty repo empty"));
}

#[test]
fn test_directory_without_git_is_skipped() {
    let work = TempDir::new().unwrap();
    let plain = work.path().join("notgit");
    fs::create_dir_all(&plain).unwrap();

    contrib_check()
        .args(["--repo", plain.to_str().unwrap()])
        .current_dir(work.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stderr(predicate::str::contains("invalid or empty repo notgit"));

    assert!(report_rows(&work.path().join("notgit.csv")).is_empty());
}

#[test]
fn test_json_output() {
    let repo = TempGitRepo::new("widgets");
    repo.commit_file("a.txt", "a", "no signoff");
    let work = TempDir::new().unwrap();

    let output = contrib_check()
        .args(["--repo", repo.path().to_str().unwrap(), "--json"])
        .current_dir(work.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["total_violations"], 1);
    assert_eq!(json["repositories"][0]["repository"], "widgets");
    assert_eq!(json["repositories"][0]["commits_scanned"], 1);
}

#[test]
fn test_config_file_repo() {
    let repo = TempGitRepo::new("widgets");
    repo.commit_file("a.txt", "a", "no signoff");
    let work = TempDir::new().unwrap();
    fs::create_dir_all(work.path().join("signoffs-out/stale")).unwrap();
    fs::write(
        work.path().join("config.yml"),
        format!(
            "repo: {}\ndco:\n  prior_commits:\n    directory: signoffs-out\n",
            repo.path().display()
        ),
    )
    .unwrap();

    contrib_check()
        .args(["--config", "config.yml"])
        .current_dir(work.path())
        .assert()
        .success();

    assert!(!work.path().join("signoffs-out/stale").exists());
    assert!(work.path().join("signoffs-out/widgets/Test User-widgets.txt").exists());
    assert_eq!(report_rows(&work.path().join("widgets.csv")).len(), 1);
}

#[test]
fn test_config_with_repo_and_org_fails() {
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("config.yml"), "repo: .\norg:\n  name: testorg\n").unwrap();

    contrib_check()
        .args(["--config", "config.yml"])
        .current_dir(work.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn test_unknown_locator_fails() {
    let work = TempDir::new().unwrap();

    contrib_check()
        .args(["--repo", "/definitely/not/a/repo"])
        .current_dir(work.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a GitHub repository URL or local directory"));
}
