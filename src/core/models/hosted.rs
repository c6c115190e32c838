//! Hosted repository model
//!
//! What the hosting API tells us about a repository in an organization.

use serde::{Deserialize, Serialize};

/// A repository listed by the hosting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedRepository {
    /// Repository name (without owner)
    pub name: String,
    /// Browser URL, also used as the clone locator
    pub html_url: String,
    /// Whether the repository is archived
    #[serde(default)]
    pub archived: bool,
}

impl HostedRepository {
    /// Create a new hosted repository entry
    #[must_use]
    pub fn new(name: impl Into<String>, html_url: impl Into<String>, archived: bool) -> Self {
        Self {
            name: name.into(),
            html_url: html_url.into(),
            archived,
        }
    }
}
