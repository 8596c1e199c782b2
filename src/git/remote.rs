//! Git remote and configuration operations

use super::{GitCli, GitError};

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Push a branch to a remote under its own name.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn push_branch(git: &GitCli, remote: &str, branch_name: &str) -> Result<(), GitError> {
    git.run_streamed(&["push", remote, branch_name])
}

/// Read a git config value, `None` when the key is unset.
pub fn config_value(git: &GitCli, key: &str) -> Result<Option<String>, GitError> {
    let output = git.run_output(&["config", "--get", key])?;
    match output.status.code() {
        Some(0) => {
            let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
            Ok(Some(value).filter(|v| !v.is_empty()))
        }
        Some(1) => Ok(None),
        code => Err(GitError::CommandFailed {
            command: format!("git config --get {}", key),
            code,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}
