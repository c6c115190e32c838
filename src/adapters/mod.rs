//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Opening, cloning and walking repositories (`CommitHistory`)
//! - `yaml/` - The per-repository `.github/dco.yml` policy file
//! - `github/` - Organization listing over the GitHub API (`HostingApi`)
//! - `csv/` - Violation reports
//! - `file/` - Remediation templates
//! - `report` - Both of the above as a `ViolationSink`

pub mod csv;
pub mod file;
pub mod git;
pub mod github;
pub mod report;
pub mod yaml;
