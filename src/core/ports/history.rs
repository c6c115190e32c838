//! Commit history port
//!
//! Defines the interface for reading a repository's history and the
//! repository-level context the compliance checks need.

use crate::core::models::{Commit, PastSignoffRecord, RemediationPolicy};

/// Fallible, lazily produced commits
pub type CommitIter<'a> = Box<dyn Iterator<Item = anyhow::Result<Commit>> + 'a>;

/// Read-only view of one repository
///
/// Implementations wrap a local or freshly cloned repository.
pub trait CommitHistory {
    /// Repository name used in reports
    fn name(&self) -> &str;

    /// All commits reachable from HEAD, newest first
    ///
    /// Fails when the repository is empty or unreadable.
    fn commits(&self) -> anyhow::Result<CommitIter<'_>>;

    /// Past signoff documents kept in the given top-level directories of HEAD
    fn past_signoffs(&self, dirs: &[String]) -> anyhow::Result<Vec<PastSignoffRecord>>;

    /// Remediation policy declared by the repository
    ///
    /// A missing or malformed policy file yields the default (nothing allowed).
    fn remediation_policy(&self) -> RemediationPolicy;
}
