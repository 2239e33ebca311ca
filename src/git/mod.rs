//! Git operations module
//!
//! Provides read-only access to the repository:
//! - Local branch enumeration
//! - Protected-branch filtering and ordering

mod branches;

pub use branches::{BranchLister, RepoLister, filter_branches};
