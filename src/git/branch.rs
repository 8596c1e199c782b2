//! Git branch and reference operations

use super::{GitCli, GitError};

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// Get the abbreviated name of the checked-out branch.
///
/// A detached HEAD has no branch to come back to, so it is an error.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn current_branch(git: &GitCli) -> Result<String, GitError> {
    let stdout = git.run_captured(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    let name = stdout.trim();
    match name {
        "" => Err(GitError::InvalidOutput(
            "rev-parse returned no branch name".to_string(),
        )),
        "HEAD" => Err(GitError::DetachedHead),
        _ => Ok(name.to_string()),
    }
}

/// Check whether a fully qualified reference exists.
///
/// `rev-parse --verify --quiet` exits 1 without output when the
/// reference is missing; any other failure is reported as an error.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn ref_exists(git: &GitCli, reference: &str) -> Result<bool, GitError> {
    let output = git.run_output(&["rev-parse", "--verify", "--quiet", reference])?;
    match output.status.code() {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        code => Err(GitError::CommandFailed {
            command: format!("git rev-parse --verify --quiet {}", reference),
            code,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}

/// Resolve a revision expression to a full commit id.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn resolve_revision(git: &GitCli, revision: &str) -> Result<String, GitError> {
    let peeled = format!("{}^{{commit}}", revision);
    let stdout = git.run_captured(&["rev-parse", "--verify", &peeled])?;
    let id = stdout.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GitError::InvalidOutput(format!(
            "'{}' did not resolve to a commit id: {:?}",
            revision, id
        )));
    }
    Ok(id.to_string())
}

/// Create a local branch at `start_point` without upstream tracking.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn create_branch(git: &GitCli, branch_name: &str, start_point: &str) -> Result<(), GitError> {
    git.run_streamed(&["branch", branch_name, start_point, "--no-track"])
}

/// Quietly check out a branch.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn checkout(git: &GitCli, branch_name: &str) -> Result<(), GitError> {
    git.run_streamed(&["checkout", "-q", branch_name])
}

/// Force-delete a local branch.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn delete_branch(git: &GitCli, branch_name: &str) -> Result<(), GitError> {
    git.run_streamed(&["branch", "-D", branch_name])
}
