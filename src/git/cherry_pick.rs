//! Git cherry-pick operations

use super::{GitCli, GitError};
use std::path::Path;

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Cherry-pick a commit onto the checked-out branch.
///
/// Output streams to the terminal. On conflict git exits non-zero and
/// leaves the cherry-pick in progress for the user to resolve.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn cherry_pick(git: &GitCli, commit: &str) -> Result<(), GitError> {
    git.run_streamed(&["cherry-pick", commit])
}

/// Check if a cherry-pick is in progress
pub fn cherry_pick_in_progress(git: &GitCli) -> Result<bool, GitError> {
    let stdout = git.run_captured(&["rev-parse", "--git-path", "CHERRY_PICK_HEAD"])?;
    let path = Path::new(stdout.trim());
    let path = match git.workdir() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };
    Ok(path.exists())
}
