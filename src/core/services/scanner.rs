//! Repository scanner - evaluates a whole history in one pass
//!
//! Commits must arrive newest first. A remediation commit only vouches for
//! commits evaluated after it in the same pass, so walking history
//! oldest-first would silently stop remediations from counting.

use log::{debug, warn};
use serde::Serialize;

use crate::core::models::{Commit, ComplianceVerdict, Violation};
use crate::core::ports::{CommitHistory, ViolationSink};

use super::evaluator::{EvaluationContext, evaluate_commit};
use super::remediation::RemediationLedger;

/// Which checks a scan runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Run the DCO signoff check
    pub dco: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { dco: true }
    }
}

/// Outcome of scanning one repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Repository name
    pub repository: String,
    /// Number of commits walked
    pub commits_scanned: usize,
    /// Number of violations reported
    pub violations: usize,
    /// Repository was empty or unreadable and was skipped
    pub skipped: bool,
}

impl ScanSummary {
    /// Summary for a repository that is about to be scanned
    #[must_use]
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }

    /// Summary for a repository that could not be scanned
    #[must_use]
    pub fn skipped(repository: impl Into<String>) -> Self {
        Self {
            skipped: true,
            ..Self::new(repository)
        }
    }
}

/// State of a single repository scan
///
/// Owns the remediation ledger, so every repository starts from an empty one.
#[derive(Debug, Clone)]
pub struct RepositoryScan<'a> {
    ctx: EvaluationContext<'a>,
    ledger: RemediationLedger,
}

impl<'a> RepositoryScan<'a> {
    /// Start a scan with an empty remediation ledger
    #[must_use]
    pub const fn new(ctx: EvaluationContext<'a>) -> Self {
        Self {
            ctx,
            ledger: RemediationLedger::new(),
        }
    }

    /// Evaluate the next commit in history order
    pub fn evaluate(&mut self, commit: &Commit) -> ComplianceVerdict {
        evaluate_commit(commit, &self.ctx, &mut self.ledger)
    }

    /// Remediations accepted so far
    #[must_use]
    pub const fn ledger(&self) -> &RemediationLedger {
        &self.ledger
    }

    /// Lazily pair every commit with its verdict
    pub fn verdicts<I>(self, commits: I) -> Verdicts<'a, I::IntoIter>
    where
        I: IntoIterator<Item = Commit>,
    {
        Verdicts {
            scan: self,
            commits: commits.into_iter(),
        }
    }
}

/// Iterator of `(commit, verdict)` pairs, see [`RepositoryScan::verdicts`]
#[derive(Debug)]
pub struct Verdicts<'a, I> {
    scan: RepositoryScan<'a>,
    commits: I,
}

impl<I> Iterator for Verdicts<'_, I>
where
    I: Iterator<Item = Commit>,
{
    type Item = (Commit, ComplianceVerdict);

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.commits.next()?;
        let verdict = self.scan.evaluate(&commit);
        Some((commit, verdict))
    }
}

/// Scan a repository and send every violation to `sink`
///
/// An empty or unreadable repository is logged and reported as skipped
/// rather than failing the run. Errors while walking history propagate.
pub fn scan_repository(
    history: &dyn CommitHistory,
    signoff_dirs: &[String],
    options: ScanOptions,
    sink: &mut dyn ViolationSink,
) -> anyhow::Result<ScanSummary> {
    let name = history.name().to_string();

    let past_signoffs = match history.past_signoffs(signoff_dirs) {
        Ok(records) => records,
        Err(e) => {
            warn!("...invalid or empty repo {name} - skipping ({e})");
            return Ok(ScanSummary::skipped(name));
        },
    };
    let commits = match history.commits() {
        Ok(commits) => commits,
        Err(e) => {
            warn!("...invalid or empty repo {name} - skipping ({e})");
            return Ok(ScanSummary::skipped(name));
        },
    };

    let mut summary = ScanSummary::new(name.clone());

    if !options.dco {
        for commit in commits {
            commit?;
            summary.commits_scanned += 1;
        }
        return Ok(summary);
    }

    debug!("{name}: {} past signoff record(s)", past_signoffs.len());
    let ctx = EvaluationContext::new(&past_signoffs, history.remediation_policy());

    let mut failure = None;
    let commits = commits.map_while(|c| c.map_err(|e| failure = Some(e)).ok());

    for (commit, verdict) in RepositoryScan::new(ctx).verdicts(commits) {
        summary.commits_scanned += 1;
        if let ComplianceVerdict::NonCompliant { reason } = verdict {
            debug!("{name}: {} {reason}", commit.hash);
            sink.report(&Violation::new(name.as_str(), commit, reason))?;
            summary.violations += 1;
        }
    }

    if let Some(e) = failure {
        return Err(e);
    }
    Ok(summary)
}
