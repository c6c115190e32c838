//! Run configuration
//!
//! Loaded from the YAML file passed with `--config`:
//!
//! ```yaml
//! org:
//!   name: https://github.com/testorg
//!   type: github
//!   ignore_repos: [repo1]
//!   skip_archived: true
//! dco:
//!   prior_commits:
//!     directory: dco-signoffs
//!   signoff_dirs: [dco-signoffs]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Error;
use crate::core::services::RepoFilter;

/// Default directory for remediation templates and past signoff documents
pub const DEFAULT_SIGNOFF_DIR: &str = "dco-signoffs";

/// Default hosting type for organizations
pub const DEFAULT_ORG_TYPE: &str = "github";

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Single repository to scan (URL or local path)
    #[serde(default)]
    pub repo: Option<String>,

    /// Organization to scan
    #[serde(default)]
    pub org: Option<OrgConfig>,

    /// DCO check settings
    #[serde(default)]
    pub dco: DcoConfig,
}

/// Organization section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrgConfig {
    /// Organization name or URL
    pub name: String,

    /// Hosting type
    #[serde(default = "default_org_type", rename = "type")]
    pub org_type: String,

    /// Repository selection
    #[serde(flatten)]
    pub filter: RepoFilter,
}

fn default_org_type() -> String {
    DEFAULT_ORG_TYPE.to_string()
}

impl OrgConfig {
    /// Organization section with default settings
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_type: default_org_type(),
            filter: RepoFilter::default(),
        }
    }
}

/// DCO section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DcoConfig {
    /// Nested form of the template directory
    #[serde(default)]
    pub prior_commits: Option<PriorCommitsConfig>,

    /// Flat form of the template directory
    #[serde(default)]
    pub prior_commits_directory: Option<PathBuf>,

    /// Top-level directories of the repository holding past signoffs
    #[serde(default)]
    pub signoff_dirs: Option<Vec<String>>,
}

/// `dco.prior_commits` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PriorCommitsConfig {
    /// Where remediation templates are written
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl DcoConfig {
    /// Template directory when one was configured explicitly
    #[must_use]
    pub fn configured_prior_commits_dir(&self) -> Option<&Path> {
        self.prior_commits
            .as_ref()
            .and_then(|p| p.directory.as_deref())
            .or(self.prior_commits_directory.as_deref())
    }

    /// Template directory, falling back to the default
    #[must_use]
    pub fn prior_commits_dir(&self) -> PathBuf {
        self.configured_prior_commits_dir()
            .map_or_else(|| PathBuf::from(DEFAULT_SIGNOFF_DIR), Path::to_path_buf)
    }

    /// Directories searched for past signoffs, falling back to the default
    #[must_use]
    pub fn signoff_dirs(&self) -> Vec<String> {
        self.signoff_dirs
            .clone()
            .filter(|dirs| !dirs.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_SIGNOFF_DIR.to_string()])
    }
}

/// What a run scans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// One repository by URL or path
    Repo(String),
    /// Every selected repository of an organization
    Org(OrgConfig),
}

impl RunConfig {
    /// Parse a configuration document
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // An empty document is an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// The single repository or organization this configuration selects
    pub fn target(&self) -> anyhow::Result<ScanTarget> {
        match (&self.repo, &self.org) {
            (Some(repo), None) => Ok(ScanTarget::Repo(repo.clone())),
            (None, Some(org)) => Ok(ScanTarget::Org(org.clone())),
            (Some(_), Some(_)) => {
                Err(Error::Config("`repo` and `org` are mutually exclusive".to_string()).into())
            },
            (None, None) => {
                Err(Error::Config("one of `repo` or `org` is required".to_string()).into())
            },
        }
    }
}
