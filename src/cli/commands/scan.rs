//! Scan a repository or organization

use std::path::PathBuf;

use contrib_check::adapters::file::RemediationTemplates;
use contrib_check::config::{OrgConfig, RunConfig, ScanTarget};
use contrib_check::core::services::ScanOptions;
use contrib_check::output::OutputMode;
use contrib_check::runner::{self, RunSettings};

/// What the command line asked for
#[derive(Debug)]
pub struct ScanRequest {
    /// Configuration file, exclusive with `repo` and `org`
    pub config: Option<PathBuf>,
    /// Single repository
    pub repo: Option<String>,
    /// Organization
    pub org: Option<String>,
    /// Run the DCO check
    pub dco: bool,
    /// Directory for CSV reports
    pub output_dir: PathBuf,
}

/// Scan everything the request selects and render a summary
pub fn scan(request: ScanRequest, mode: OutputMode) -> anyhow::Result<()> {
    let config = match &request.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let target = match (request.repo, request.org) {
        (Some(repo), _) => ScanTarget::Repo(repo),
        (None, Some(org)) => ScanTarget::Org(OrgConfig::named(org)),
        (None, None) => config.target()?,
    };

    let templates = RemediationTemplates::new(config.dco.prior_commits_dir());
    if config.dco.configured_prior_commits_dir().is_some() {
        templates.clear()?;
    }

    let settings = RunSettings {
        options: ScanOptions { dco: request.dco },
        output_dir: request.output_dir,
        templates,
        signoff_dirs: config.dco.signoff_dirs(),
    };

    let result = runner::run(&target, &settings)?;
    result.render(mode);
    Ok(())
}
