//! gitshare - share a single commit on a throwaway branch
//!
//! Library behind the `git-share` and `git-unmerged` binaries. All
//! repository work is delegated to the `git` command-line program.

pub mod cli;
pub mod core;
pub mod git;
pub mod telemetry;
pub mod util;

pub use core::config::ShareConfig;
pub use core::share::{ShareError, ShareRequest, ShareSession, ShareWorkflow};
pub use git::{GitCli, GitError, VersionControl};
