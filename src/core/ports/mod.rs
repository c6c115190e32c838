//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the compliance logic and the
//! outside world (git repositories, report files, hosting APIs).
//!
//! Implementations live in the `adapters` module.

mod history;
mod hosting;
mod violation_sink;

pub use history::{CommitHistory, CommitIter};
pub use hosting::HostingApi;
#[cfg(test)]
pub use hosting::MockHostingApi;
pub use violation_sink::ViolationSink;
