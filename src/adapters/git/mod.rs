//! Git integration adapter
//!
//! Implements `CommitHistory` on top of libgit2.
//!
//! - [`locator`] - Tell GitHub URLs from local paths

pub mod locator;

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use git2::{ObjectType, Repository, Sort};
use log::{debug, info};
use tempfile::TempDir;

use crate::adapters::yaml::{POLICY_FILE, parse_policy};
use crate::core::models::{Author, Commit, PastSignoffRecord, RemediationPolicy};
use crate::core::ports::{CommitHistory, CommitIter};

pub use locator::RepoLocator;

/// A repository opened for scanning
///
/// Hosted repositories are cloned into a temporary directory that is removed
/// when this value is dropped.
pub struct GitRepository {
    name: String,
    repo: Repository,
    _clone_dir: Option<TempDir>,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("name", &self.name)
            .field("path", &self.repo.path())
            .finish_non_exhaustive()
    }
}

impl GitRepository {
    /// Open a local clone, or clone a hosted repository
    pub fn open(locator: &RepoLocator) -> anyhow::Result<Self> {
        match locator {
            RepoLocator::Local { name, path } => Self::open_path(name, path),
            RepoLocator::Hosted { name, url, .. } => Self::clone_from(name, url),
        }
    }

    /// Open the repository at `path`
    pub fn open_path(name: &str, path: &Path) -> anyhow::Result<Self> {
        let repo = Repository::open(path)?;
        Ok(Self {
            name: name.to_string(),
            repo,
            _clone_dir: None,
        })
    }

    /// Clone `url` into a fresh temporary directory
    pub fn clone_from(name: &str, url: &str) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        info!("Cloning {url}...");
        debug!("clone location: {}", dir.path().display());
        let repo = Repository::clone(url, dir.path())?;
        Ok(Self {
            name: name.to_string(),
            repo,
            _clone_dir: Some(dir),
        })
    }

    fn head_tree(&self) -> anyhow::Result<git2::Tree<'_>> {
        Ok(self.repo.head()?.peel_to_tree()?)
    }

    fn read_policy(&self) -> anyhow::Result<RemediationPolicy> {
        let entry = self.head_tree()?.get_path(Path::new(POLICY_FILE))?;
        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        parse_policy(blob.content())
    }
}

impl CommitHistory for GitRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn commits(&self) -> anyhow::Result<CommitIter<'_>> {
        let mut walk = self.repo.revwalk()?;
        walk.push_head()?;
        walk.set_sorting(Sort::TIME)?;

        Ok(Box::new(walk.map(move |oid| {
            let commit = self.repo.find_commit(oid?)?;
            to_commit(&commit)
        })))
    }

    fn past_signoffs(&self, dirs: &[String]) -> anyhow::Result<Vec<PastSignoffRecord>> {
        let tree = self.head_tree()?;
        let mut records = Vec::new();

        for entry in &tree {
            let Some(dir) = entry.name() else { continue };
            if entry.kind() != Some(ObjectType::Tree) || !dirs.iter().any(|d| d == dir) {
                continue;
            }

            let subtree = entry.to_object(&self.repo)?.peel_to_tree()?;
            for file in &subtree {
                if file.kind() != Some(ObjectType::Blob) {
                    continue;
                }
                let blob = file.to_object(&self.repo)?.peel_to_blob()?;
                let path = format!("{dir}/{}", String::from_utf8_lossy(file.name_bytes()));
                records.push(PastSignoffRecord::new(path, blob.content()));
            }
        }

        Ok(records)
    }

    fn remediation_policy(&self) -> RemediationPolicy {
        self.read_policy().unwrap_or_else(|e| {
            debug!("{}: no usable {POLICY_FILE} ({e}), remediation commits not allowed", self.name);
            RemediationPolicy::default()
        })
    }
}

fn to_commit(commit: &git2::Commit<'_>) -> anyhow::Result<Commit> {
    let author = commit.author();
    let when = author.when();

    let offset = FixedOffset::east_opt(when.offset_minutes() * 60)
        .ok_or_else(|| anyhow::anyhow!("invalid timezone offset in {}", commit.id()))?;
    let authored_at: DateTime<FixedOffset> = DateTime::from_timestamp(when.seconds(), 0)
        .ok_or_else(|| anyhow::anyhow!("invalid timestamp in {}", commit.id()))?
        .with_timezone(&offset);

    Ok(Commit::new(
        commit.id().to_string(),
        Author::new(
            String::from_utf8_lossy(author.name_bytes()),
            String::from_utf8_lossy(author.email_bytes()),
        ),
        String::from_utf8_lossy(commit.message_bytes()),
        commit.parent_count(),
        authored_at,
    ))
}
