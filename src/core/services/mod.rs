//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies of their own; repositories,
//! reports and hosting APIs are reached through the port traits.
//!
//! - [`signoff`] - The three signoff rules
//! - [`remediation`] - Parse and record remediation commits
//! - [`evaluator`] - Combine the rules into a verdict
//! - [`scanner`] - Walk a repository's history
//! - [`org`] - Choose which repositories of an organization to scan

pub mod evaluator;
pub mod org;
pub mod remediation;
pub mod scanner;
pub mod signoff;

pub use evaluator::{EvaluationContext, check_dco_signoff, evaluate_commit, has_remediation};
pub use org::{RepoFilter, normalize_org_name, select_repos};
pub use remediation::{RemediationLedger, is_remediation_commit, parse_claims};
pub use scanner::{RepositoryScan, ScanOptions, ScanSummary, Verdicts, scan_repository};
pub use signoff::{has_direct_signoff, has_past_signoff, is_signoff_required};
