//! Remediation parser - retroactive signoffs carried by later commits
//!
//! A remediation commit attests signoff for earlier commits, one line per
//! attested commit:
//!
//! ```text
//! I, Jane Dev <jane@example.com>, hereby add my Signed-off-by to this commit: 41febb6
//! On behalf of Bob <bob@example.com>, I, Jane Dev <jane@example.com>, hereby add my Signed-off-by to this commit: 41febb7
//! ```
//!
//! Claims are only accepted when the attesting identity is the author of the
//! commit carrying them. Accepted short-hashes are collected in a
//! [`RemediationLedger`] owned by the current repository scan.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::models::{Author, Commit, RemediationClaim, RemediationPolicy};

static INDIVIDUAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^I, (.*) <(.*)>, hereby add my Signed-off-by to this commit: (.*?)[ \t\r]*$",
    )
    .expect("static regex")
});

static THIRD_PARTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^On behalf of (.*) <(.*)>, I, (.*) <(.*)>, hereby add my Signed-off-by to this commit: (.*?)[ \t\r]*$",
    )
    .expect("static regex")
});

/// Short-hashes attested by accepted remediation claims during one scan
///
/// Start a fresh ledger for every repository; claims never carry over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemediationLedger {
    short_hashes: Vec<String>,
}

impl RemediationLedger {
    /// Create an empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self {
            short_hashes: Vec::new(),
        }
    }

    /// Record an attested short-hash
    pub fn record(&mut self, short_hash: impl Into<String>) {
        self.short_hashes.push(short_hash.into());
    }

    /// Whether a short-hash has been attested
    #[must_use]
    pub fn contains(&self, short_hash: &str) -> bool {
        self.short_hashes.iter().any(|h| h == short_hash)
    }

    /// Number of recorded attestations
    #[must_use]
    pub fn len(&self) -> usize {
        self.short_hashes.len()
    }

    /// Whether nothing has been attested yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.short_hashes.is_empty()
    }

    /// Recorded short-hashes, in the order they were accepted
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.short_hashes.iter().map(String::as_str)
    }
}

/// Parse the remediation claims in a message that the policy enables
///
/// Claims are returned unvalidated; see [`RemediationClaim::is_made_by`].
#[must_use]
pub fn parse_claims(message: &str, policy: RemediationPolicy) -> Vec<RemediationClaim> {
    let mut claims = Vec::new();

    if policy.individual {
        claims.extend(INDIVIDUAL_RE.captures_iter(message).map(|c| RemediationClaim {
            claimant: Author::new(group(&c, 1), group(&c, 2)),
            on_behalf_of: None,
            short_hash: group(&c, 3),
        }));
    }

    if policy.third_party {
        claims.extend(THIRD_PARTY_RE.captures_iter(message).map(|c| RemediationClaim {
            claimant: Author::new(group(&c, 3), group(&c, 4)),
            on_behalf_of: Some(Author::new(group(&c, 1), group(&c, 2))),
            short_hash: group(&c, 5),
        }));
    }

    claims
}

/// Record the valid remediation claims carried by `commit`
///
/// Returns true if at least one claim was accepted. With neither kind of
/// remediation allowed the message is not inspected at all.
pub fn is_remediation_commit(
    commit: &Commit,
    policy: RemediationPolicy,
    ledger: &mut RemediationLedger,
) -> bool {
    if !policy.allows_any() {
        return false;
    }

    let mut accepted = false;
    for claim in parse_claims(&commit.message, policy) {
        if claim.is_made_by(&commit.author) {
            log::debug!(
                "{} remediates {} ({})",
                &commit.hash,
                claim.short_hash,
                if claim.is_third_party() { "third-party" } else { "individual" }
            );
            ledger.record(claim.short_hash);
            accepted = true;
        }
    }
    accepted
}

fn group(caps: &Captures<'_>, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}
