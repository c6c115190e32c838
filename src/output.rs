//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::core::services::ScanSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of scanning one repository
#[derive(Debug, Clone, Serialize)]
pub struct RepoResult {
    /// Scan counts
    #[serde(flatten)]
    pub summary: ScanSummary,
    /// Where the CSV report was written
    pub report_file: String,
}

/// Result of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// No repository had violations
    pub passed: bool,
    /// Violations across all repositories
    pub total_violations: usize,
    /// Per-repository results, in scan order
    pub repositories: Vec<RepoResult>,
    /// Wall-clock time of the run
    pub elapsed_ms: u128,
}

impl RunResult {
    /// Aggregate per-repository results
    #[must_use]
    pub fn new(repositories: Vec<RepoResult>, elapsed: Duration) -> Self {
        let total_violations = repositories.iter().map(|r| r.summary.violations).sum();
        Self {
            passed: total_violations == 0,
            total_violations,
            repositories,
            elapsed_ms: elapsed.as_millis(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.repositories.is_empty() {
            println!("No repositories to scan.");
            return;
        }

        for repo in &self.repositories {
            let s = &repo.summary;
            if s.skipped {
                println!("  {}: {}", s.repository, "skipped (invalid or empty repo)".yellow());
                continue;
            }
            let violations = format!("{} violation(s)", s.violations);
            let violations = if s.violations == 0 { violations.green() } else { violations.red() };
            println!(
                "  {}: {} commit(s), {} -> {}",
                s.repository, s.commits_scanned, violations, repo.report_file
            );
        }

        println!();
        if self.passed {
            println!("All commits have a DCO signoff.");
        } else {
            println!(
                "{} commit(s) missing a DCO signoff. See the CSV report(s) and remediation templates.",
                self.total_violations
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
