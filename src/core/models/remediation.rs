//! Remediation models
//!
//! - [`RemediationPolicy`] - which kinds of remediation commit a repository accepts
//! - [`RemediationClaim`] - one attestation line found in a commit message

use serde::{Deserialize, Serialize};

use super::Author;

/// Per-repository remediation settings
///
/// Read from `.github/dco.yml`. Both kinds are disallowed unless the repository
/// opts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemediationPolicy {
    /// Authors may attest their own earlier commits
    #[serde(default)]
    pub individual: bool,
    /// Authors may attest on behalf of someone else
    #[serde(default, rename = "thirdParty")]
    pub third_party: bool,
}

impl RemediationPolicy {
    /// Policy allowing both kinds of remediation
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            individual: true,
            third_party: true,
        }
    }

    /// Whether any remediation is allowed at all
    #[must_use]
    pub const fn allows_any(&self) -> bool {
        self.individual || self.third_party
    }
}

/// A remediation attestation parsed from a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationClaim {
    /// Identity making the attestation
    pub claimant: Author,
    /// Identity attested for, when this is a third-party remediation
    pub on_behalf_of: Option<Author>,
    /// Abbreviated hash of the commit being remediated
    pub short_hash: String,
}

impl RemediationClaim {
    /// Whether this claim was made on behalf of someone else
    #[must_use]
    pub const fn is_third_party(&self) -> bool {
        self.on_behalf_of.is_some()
    }

    /// A claim is valid only when made by the author of the commit carrying it
    #[must_use]
    pub fn is_made_by(&self, author: &Author) -> bool {
        author.is(&self.claimant.name, &self.claimant.email)
    }
}
