//! Remediation template files
//!
//! For every author with unsigned commits, an attestation they can sign and
//! commit as a past signoff record:
//!
//! ```text
//! <dir>/<repo>/<author>-<repo>.txt
//! ```
//!
//! The header is written when the file is created, then one line per
//! violating commit is appended.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::core::models::Commit;

/// Writer for per-author remediation templates
#[derive(Debug, Clone)]
pub struct RemediationTemplates {
    root: PathBuf,
}

impl RemediationTemplates {
    /// Templates stored under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Base directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove every template from a previous run
    pub fn clear(&self) -> anyhow::Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }

    /// Template path for `author_name` in `repo`
    #[must_use]
    pub fn path_for(&self, repo: &str, author_name: &str) -> PathBuf {
        let repo = sanitize(repo);
        self.root
            .join(&repo)
            .join(format!("{}-{repo}.txt", sanitize(author_name)))
    }

    /// Add a violating commit to its author's template
    ///
    /// Returns the template path.
    pub fn append(&self, repo: &str, commit: &Commit) -> anyhow::Result<PathBuf> {
        let path = self.path_for(repo, &commit.author.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let is_new = !path.exists();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        if is_new {
            write!(file, "{}", header(&commit.author.name, &commit.author.email))?;
        }
        writeln!(file, "{} {}", commit.hash, commit.message)?;

        Ok(path)
    }
}

/// Attestation text opening every template
#[must_use]
pub fn header(name: &str, email: &str) -> String {
    format!(
        "I, {name} hereby sign-off-by all of my past commits to this repo subject to the \
         Developer Certificate of Origin (DCO), Version 1.1. In the past I have used emails: {email}\n\n"
    )
}

fn sanitize(component: &str) -> String {
    component.replace(['/', '\\'], "_")
}
