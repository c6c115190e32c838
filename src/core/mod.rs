//! Core domain logic for contrib-check
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Commit, PastSignoffRecord, RemediationPolicy, Violation)
//! - `services/` - Signoff rules, remediation parsing, evaluation, scanning
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
