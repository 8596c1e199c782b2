//! Git status operations

use super::{GitCli, GitError};

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Count pending changes (staged, modified and untracked) in the working tree.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn dirty_count(git: &GitCli) -> Result<usize, GitError> {
    let stdout = git.run_captured(&["status", "-s"])?;
    Ok(count_changes(&stdout))
}

/// Count the non-blank lines of short status output.
pub fn count_changes(short_status: &str) -> usize {
    short_status
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
}
