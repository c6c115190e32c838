//! Commit evaluator - one verdict per commit
//!
//! Rules, first match wins:
//! 1. Merge commits need no signoff
//! 2. `Signed-off-by:` in the message
//! 3. A past signoff record mentions the full hash
//! 4. An earlier-seen remediation commit attested the short-hash
//!
//! Anything else is a DCO violation.

use crate::core::models::{
    Commit, ComplianceVerdict, PastSignoffRecord, RemediationPolicy, ViolationKind,
};

use super::remediation::{RemediationLedger, is_remediation_commit};
use super::signoff::{has_direct_signoff, has_past_signoff, is_signoff_required};

/// Repository-level facts a commit is judged against
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationContext<'a> {
    /// Past signoff documents from the repository tree
    pub past_signoffs: &'a [PastSignoffRecord],
    /// Which remediation commits the repository accepts
    pub policy: RemediationPolicy,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new context
    #[must_use]
    pub const fn new(past_signoffs: &'a [PastSignoffRecord], policy: RemediationPolicy) -> Self {
        Self {
            past_signoffs,
            policy,
        }
    }
}

/// Whether a remediation commit already seen in this scan attested `commit`
#[must_use]
pub fn has_remediation(commit: &Commit, ledger: &RemediationLedger) -> bool {
    ledger.contains(commit.short_hash())
}

/// Decide compliance against the current ledger, without recording anything
#[must_use]
pub fn check_dco_signoff(
    commit: &Commit,
    ctx: &EvaluationContext<'_>,
    ledger: &RemediationLedger,
) -> ComplianceVerdict {
    if !is_signoff_required(commit)
        || has_direct_signoff(commit)
        || has_past_signoff(commit, ctx.past_signoffs)
        || has_remediation(commit, ledger)
    {
        ComplianceVerdict::Compliant
    } else {
        ComplianceVerdict::NonCompliant {
            reason: ViolationKind::Dco,
        }
    }
}

/// Evaluate a commit, first recording any remediation claims it carries
///
/// A commit can remediate others and still be non-compliant itself, so its
/// claims are collected regardless of the verdict.
pub fn evaluate_commit(
    commit: &Commit,
    ctx: &EvaluationContext<'_>,
    ledger: &mut RemediationLedger,
) -> ComplianceVerdict {
    is_remediation_commit(commit, ctx.policy, ledger);
    check_dco_signoff(commit, ctx, ledger)
}
