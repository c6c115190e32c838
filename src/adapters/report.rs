//! Report sink - the CSV report plus remediation templates
//!
//! Implements `ViolationSink` for a single repository scan.

use std::path::Path;

use log::debug;

use crate::adapters::csv::CsvReportWriter;
use crate::adapters::file::RemediationTemplates;
use crate::core::models::{Violation, ViolationKind};
use crate::core::ports::ViolationSink;

/// Writes each violation to the CSV report and, for DCO violations, to the
/// author's remediation template
#[derive(Debug)]
pub struct ReportSink {
    csv: CsvReportWriter,
    templates: RemediationTemplates,
}

impl ReportSink {
    /// Start a fresh report at `report_path`
    pub fn create(report_path: &Path, templates: RemediationTemplates) -> anyhow::Result<Self> {
        Ok(Self {
            csv: CsvReportWriter::create(report_path)?,
            templates,
        })
    }

    /// CSV report location
    #[must_use]
    pub fn report_path(&self) -> &Path {
        self.csv.path()
    }
}

impl ViolationSink for ReportSink {
    fn report(&mut self, violation: &Violation) -> anyhow::Result<()> {
        self.csv.write(violation)?;
        if violation.kind == ViolationKind::Dco {
            let path = self.templates.append(&violation.repository, &violation.commit)?;
            debug!("{} added to {}", violation.commit.hash, path.display());
        }
        Ok(())
    }
}
