//! shiplog git - repository access for the shiplog CI helpers
//!
//! Wraps git2 with the few operations the changelog and versioning
//! pipelines need: ancestor-range commit walks, head commit reads, and
//! commit counting.

mod commits;
mod repository;
mod types;

pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
