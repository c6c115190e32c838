//! Compliance verdicts and violations

use serde::{Deserialize, Serialize};

use super::Commit;

/// Category of a compliance failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// Commit has no DCO signoff of any kind
    Dco,
}

impl ViolationKind {
    /// Short code written to the report
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dco => "dco",
        }
    }

    /// Human-readable description written to the report
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dco => "The commit did not have a DCO Signoff",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dco => write!(f, "missing DCO signoff"),
        }
    }
}

/// Outcome of evaluating one commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceVerdict {
    /// Commit satisfies the policy
    Compliant,
    /// Commit fails the policy
    NonCompliant {
        /// Why it failed
        reason: ViolationKind,
    },
}

impl ComplianceVerdict {
    /// Whether the verdict is a pass
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }
}

/// A non-compliant commit, ready to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Repository the commit belongs to
    pub repository: String,
    /// The offending commit
    pub commit: Commit,
    /// What was wrong with it
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a new violation record
    #[must_use]
    pub fn new(repository: impl Into<String>, commit: Commit, kind: ViolationKind) -> Self {
        Self {
            repository: repository.into(),
            commit,
            kind,
        }
    }
}
