//! Repository locators
//!
//! A repository is named either by a GitHub URL (cloned for the scan) or by a
//! path to an existing local clone.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::Error;

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?github\.com/([^/]+)/([^/]+?)(?:\.git)?/?$")
        .expect("static regex")
});

/// Where a repository lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLocator {
    /// A repository hosted on GitHub
    Hosted {
        /// Owning user or organization
        owner: String,
        /// Repository name
        name: String,
        /// Clone URL
        url: String,
    },
    /// A local clone
    Local {
        /// Directory name of the clone
        name: String,
        /// Path to the clone
        path: PathBuf,
    },
}

impl RepoLocator {
    /// Parse a URL or filesystem path
    pub fn parse(locator: &str) -> anyhow::Result<Self> {
        let locator = locator.trim();

        if let Some(caps) = GITHUB_URL.captures(locator) {
            return Ok(Self::Hosted {
                owner: caps[1].to_string(),
                name: caps[2].to_string(),
                url: locator.to_string(),
            });
        }

        let path = Path::new(locator);
        if path.is_dir() {
            let canonical = path.canonicalize()?;
            let name = canonical
                .file_name()
                .map_or_else(|| "repo".to_string(), |n| n.to_string_lossy().to_string());
            return Ok(Self::Local {
                name,
                path: canonical,
            });
        }

        Err(Error::InvalidLocator(locator.to_string()).into())
    }

    /// Repository name used in reports and template paths
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Hosted { name, .. } | Self::Local { name, .. } => name,
        }
    }

    /// File name of this repository's CSV report
    #[must_use]
    pub fn report_file_name(&self) -> String {
        match self {
            Self::Hosted { owner, name, .. } => format!("{owner}-{name}.csv"),
            Self::Local { name, .. } => format!("{name}.csv"),
        }
    }
}
