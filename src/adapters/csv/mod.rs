//! CSV report writer
//!
//! One file per repository, every field quoted, no header row:
//!
//! ```text
//! "repo","<hash>","<message>","<author>","<email>","<authored at>","dco","The commit did not have a DCO Signoff"
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::core::models::Violation;

/// Writer for one repository's violation report
#[derive(Debug)]
pub struct CsvReportWriter {
    path: PathBuf,
    writer: Writer<File>,
}

impl CsvReportWriter {
    /// Create (or truncate) the report at `path`
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_path(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer,
        })
    }

    /// Report location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one violation row
    pub fn write(&mut self, violation: &Violation) -> anyhow::Result<()> {
        let commit = &violation.commit;
        let authored_at = commit.authored_at.to_rfc3339();
        self.writer.write_record([
            violation.repository.as_str(),
            commit.hash.as_str(),
            commit.message.as_str(),
            commit.author.name.as_str(),
            commit.author.email.as_str(),
            authored_at.as_str(),
            violation.kind.code(),
            violation.kind.description(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
