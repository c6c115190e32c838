//! Violation sink port
//!
//! Where the scanner sends every non-compliant commit.

use crate::core::models::Violation;

/// Receiver for violations found during a scan
pub trait ViolationSink {
    /// Record one violation
    fn report(&mut self, violation: &Violation) -> anyhow::Result<()>;
}

impl ViolationSink for Vec<Violation> {
    fn report(&mut self, violation: &Violation) -> anyhow::Result<()> {
        self.push(violation.clone());
        Ok(())
    }
}
