//! Signoff matcher - the three independent signoff rules
//!
//! Pure functions, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Commit, PastSignoffRecord};

// Anything after the token is accepted; name/email format is not validated.
static SIGNOFF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Signed-off-by: (.+)").expect("static regex"));

/// Merge commits are exempt from the signoff requirement
#[must_use]
pub const fn is_signoff_required(commit: &Commit) -> bool {
    !commit.is_merge()
}

/// Whether the message carries a `Signed-off-by:` line
#[must_use]
pub fn has_direct_signoff(commit: &Commit) -> bool {
    SIGNOFF_RE.is_match(&commit.message)
}

/// Whether any past signoff record mentions the commit's full hash
#[must_use]
pub fn has_past_signoff(commit: &Commit, records: &[PastSignoffRecord]) -> bool {
    records.iter().any(|r| r.mentions(&commit.hash))
}
