//! Hosting API port
//!
//! Defines the interface for enumerating an organization's repositories.

use crate::core::models::HostedRepository;

/// Source-hosting service abstraction
#[cfg_attr(test, mockall::automock)]
pub trait HostingApi {
    /// Every repository owned by `org`, in listing order
    fn list_org_repos(&self, org: &str) -> anyhow::Result<Vec<HostedRepository>>;
}
