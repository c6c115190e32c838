//! Commit model
//!
//! A read-only snapshot of a single commit, taken from repository history at
//! scan time. Carries only what the compliance checks and the reports need.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated hash used by remediation commits
pub const SHORT_HASH_LEN: usize = 7;

/// Commit author identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// Author name as recorded in the commit
    pub name: String,
    /// Author email as recorded in the commit
    pub email: String,
}

impl Author {
    /// Create a new author identity
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether the given name and email are exactly this author (case-sensitive)
    #[must_use]
    pub fn is(&self, name: &str, email: &str) -> bool {
        self.name == name && self.email == email
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// A commit read from history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full hex digest
    pub hash: String,
    /// Who authored the change
    pub author: Author,
    /// Full commit message
    pub message: String,
    /// Number of parents (more than one means a merge commit)
    pub parent_count: usize,
    /// When the change was authored
    pub authored_at: DateTime<FixedOffset>,
}

impl Commit {
    /// Create a new commit snapshot
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        author: Author,
        message: impl Into<String>,
        parent_count: usize,
        authored_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            hash: hash.into(),
            author,
            message: message.into(),
            parent_count,
            authored_at,
        }
    }

    /// Whether this is a merge commit
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent_count > 1
    }

    /// The 7-character abbreviation of the hash
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..SHORT_HASH_LEN).unwrap_or(&self.hash)
    }
}
