//! Domain models for contrib-check
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Commit`] - A read-only commit snapshot
//! - [`PastSignoffRecord`] - A bulk attestation document
//! - [`HostedRepository`] - A repository listed by the hosting API
//! - [`RemediationPolicy`] / [`RemediationClaim`] - Retroactive signoffs
//! - [`ComplianceVerdict`] / [`Violation`] - Evaluation results

mod commit;
mod hosted;
mod remediation;
mod signoff;
mod verdict;

pub use commit::{Author, Commit, SHORT_HASH_LEN};
pub use hosted::HostedRepository;
pub use remediation::{RemediationClaim, RemediationPolicy};
pub use signoff::PastSignoffRecord;
pub use verdict::{ComplianceVerdict, Violation, ViolationKind};
