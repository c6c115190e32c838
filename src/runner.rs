//! Run orchestration - from a scan target to per-repository reports
//!
//! Repositories are scanned one after the other; each gets its own CSV report
//! and its own remediation ledger.

use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use crate::Error;
use crate::adapters::file::RemediationTemplates;
use crate::adapters::git::{GitRepository, RepoLocator};
use crate::adapters::github::GithubClient;
use crate::adapters::report::ReportSink;
use crate::config::{DEFAULT_ORG_TYPE, OrgConfig, ScanTarget};
use crate::core::ports::HostingApi;
use crate::core::services::{
    ScanOptions, ScanSummary, normalize_org_name, scan_repository, select_repos,
};
use crate::output::{RepoResult, RunResult};

/// Everything a run needs besides its target
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Checks to run
    pub options: ScanOptions,
    /// Where CSV reports go
    pub output_dir: PathBuf,
    /// Where remediation templates go
    pub templates: RemediationTemplates,
    /// Repository directories holding past signoffs
    pub signoff_dirs: Vec<String>,
}

/// Scan one repository by URL or path
///
/// A repository that cannot be opened or cloned is skipped with an empty
/// report, so the rest of an organization still gets scanned.
pub fn scan_repo(locator: &str, settings: &RunSettings) -> anyhow::Result<RepoResult> {
    let locator = RepoLocator::parse(locator)?;
    let name = locator.name();
    info!("Searching repo {name}...");

    let report_path = settings.output_dir.join(locator.report_file_name());
    let mut sink = ReportSink::create(&report_path, settings.templates.clone())?;

    let summary = match GitRepository::open(&locator) {
        Ok(repo) => scan_repository(&repo, &settings.signoff_dirs, settings.options, &mut sink)?,
        Err(e) => {
            warn!("...invalid or empty repo {name} - skipping ({e})");
            ScanSummary::skipped(name)
        },
    };

    Ok(RepoResult {
        summary,
        report_file: sink.report_path().display().to_string(),
    })
}

/// Hosting API client for an organization
///
/// Fails for unsupported hosting types and, for GitHub, when no token is set.
pub fn hosting_api(org: &OrgConfig) -> anyhow::Result<Box<dyn HostingApi>> {
    if org.org_type != DEFAULT_ORG_TYPE {
        return Err(Error::UnsupportedOrgType(org.org_type.clone()).into());
    }
    Ok(Box::new(GithubClient::from_env()?))
}

/// Clone URLs of the organization's repositories in scope
pub fn org_locators(org: &OrgConfig, api: &dyn HostingApi) -> anyhow::Result<Vec<String>> {
    let name = normalize_org_name(&org.name);
    Ok(select_repos(api, &name, &org.filter)?
        .into_iter()
        .map(|r| r.html_url)
        .collect())
}

/// Scan every repository the target selects
pub fn run(target: &ScanTarget, settings: &RunSettings) -> anyhow::Result<RunResult> {
    let started = Instant::now();

    let locators = match target {
        ScanTarget::Repo(locator) => vec![locator.clone()],
        ScanTarget::Org(org) => {
            let api = hosting_api(org)?;
            org_locators(org, api.as_ref())?
        },
    };

    let mut repositories = Vec::with_capacity(locators.len());
    for locator in &locators {
        repositories.push(scan_repo(locator, settings)?);
    }

    let elapsed = started.elapsed();
    info!("This took {elapsed:?}");
    Ok(RunResult::new(repositories, elapsed))
}
