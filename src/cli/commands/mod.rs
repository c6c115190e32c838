//! Command implementations

mod scan;

pub use scan::{ScanRequest, scan};
