//! Typed errors for failures callers need to tell apart
//!
//! Most functions return `anyhow::Result`; these variants travel inside it and
//! can be recovered with `downcast_ref::<Error>()`.

use thiserror::Error;

/// Errors raised by contrib-check
#[derive(Debug, Error)]
pub enum Error {
    /// Organization scanning needs an API token
    #[error(
        "Github token is not defined. Set GITHUB_TOKEN environment variable to a valid Github token"
    )]
    MissingToken,

    /// Only GitHub organizations can be enumerated
    #[error("unsupported organization type: {0} (supported: github)")]
    UnsupportedOrgType(String),

    /// The configuration file or command line is inconsistent
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Neither a GitHub URL nor an existing directory
    #[error("not a GitHub repository URL or local directory: {0}")]
    InvalidLocator(String),

    /// The hosting API rejected a request
    #[error("hosting API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Transient API failures persisted past the retry budget
    #[error("all {attempts} retries exhausted: {last_error}")]
    RetriesExhausted {
        /// Retries made
        attempts: u32,
        /// Last failure seen
        last_error: String,
    },
}
