//! contrib-check - Developer Certificate of Origin compliance scanning
//!
//! Scans a single repository or every repository of an organization for
//! commits without a DCO signoff, and writes CSV reports plus remediation
//! templates for the authors involved.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the contrib-check CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
