//! Organization service - pick which repositories of an org to scan

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::core::models::HostedRepository;
use crate::core::ports::HostingApi;

static ORG_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?github\.com/").expect("static regex"));

/// Which repositories of an organization are in scope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepoFilter {
    /// Never scan these
    pub ignore_repos: Vec<String>,
    /// When non-empty, scan only these
    pub only_repos: Vec<String>,
    /// Leave archived repositories out
    pub skip_archived: bool,
}

impl Default for RepoFilter {
    fn default() -> Self {
        Self {
            ignore_repos: Vec::new(),
            only_repos: Vec::new(),
            skip_archived: true,
        }
    }
}

impl RepoFilter {
    /// Whether `repo` should be scanned
    #[must_use]
    pub fn allows(&self, repo: &HostedRepository) -> bool {
        if self.ignore_repos.contains(&repo.name) {
            return false;
        }
        if !self.only_repos.is_empty() && !self.only_repos.contains(&repo.name) {
            return false;
        }
        !(self.skip_archived && repo.archived)
    }
}

/// Reduce an organization URL to its bare name
///
/// `https://github.com/testorg` and `testorg` both give `testorg`.
#[must_use]
pub fn normalize_org_name(locator: &str) -> String {
    ORG_URL_PREFIX
        .replace(locator.trim(), "")
        .trim_end_matches('/')
        .to_string()
}

/// List an organization's repositories and keep those the filter allows
pub fn select_repos(
    api: &dyn HostingApi,
    org: &str,
    filter: &RepoFilter,
) -> anyhow::Result<Vec<HostedRepository>> {
    let repos = api.list_org_repos(org)?;
    let total = repos.len();
    let selected: Vec<_> = repos.into_iter().filter(|r| filter.allows(r)).collect();
    log::debug!("{org}: {} of {total} repositories selected", selected.len());
    Ok(selected)
}
