//! YAML adapter for the per-repository policy file
//!
//! Repositories opt into remediation commits with `.github/dco.yml`:
//!
//! ```yaml
//! allowRemediationCommits:
//!   individual: true
//!   thirdParty: false
//! ```

use serde::Deserialize;

use crate::core::models::RemediationPolicy;

/// Location of the policy file in the repository tree
pub const POLICY_FILE: &str = ".github/dco.yml";

#[derive(Debug, Default, Deserialize)]
struct PolicyFile {
    #[serde(default, rename = "allowRemediationCommits")]
    allow_remediation_commits: Option<RemediationPolicy>,
}

/// Parse the policy file content
///
/// An empty document allows nothing.
pub fn parse_policy(content: &[u8]) -> anyhow::Result<RemediationPolicy> {
    let text = std::str::from_utf8(content)?;
    if text.trim().is_empty() {
        return Ok(RemediationPolicy::default());
    }
    let file: Option<PolicyFile> = serde_yaml::from_str(text)?;
    Ok(file
        .and_then(|f| f.allow_remediation_commits)
        .unwrap_or_default())
}
