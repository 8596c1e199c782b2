//! Git log queries for commits not yet on the remote

use super::{GitCli, GitError};
use serde::Serialize;

#[cfg(feature = "telemetry")]
use tracing::instrument;

/// A commit on the local mainline that the remote mainline lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmergedCommit {
    /// Abbreviated commit id
    pub id: String,
    /// First line of the commit message
    pub subject: String,
}

impl UnmergedCommit {
    /// Parse one `<abbrev-id> <subject>` line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end();
        if line.trim().is_empty() {
            return None;
        }
        let (id, subject) = match line.split_once(' ') {
            Some((id, subject)) => (id, subject),
            None => (line, ""),
        };
        Some(Self {
            id: id.to_string(),
            subject: subject.to_string(),
        })
    }
}

fn exclusion(upstream: &str) -> String {
    format!("^{}", upstream)
}

/// Stream the unmerged commits of `local` relative to `upstream` to stdout.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn log_unmerged(git: &GitCli, local: &str, upstream: &str) -> Result<(), GitError> {
    let exclude = exclusion(upstream);
    git.run_streamed(&[
        "log",
        local,
        &exclude,
        "--no-merges",
        "--pretty=oneline",
        "--abbrev-commit",
    ])
}

/// Collect the unmerged commits of `local` relative to `upstream`, newest first.
#[cfg_attr(feature = "telemetry", instrument(skip(git)))]
pub fn unmerged_commits(
    git: &GitCli,
    local: &str,
    upstream: &str,
) -> Result<Vec<UnmergedCommit>, GitError> {
    let exclude = exclusion(upstream);
    let stdout = git.run_captured(&[
        "log",
        local,
        &exclude,
        "--no-merges",
        "--no-decorate",
        "--format=%h %s",
    ])?;
    Ok(stdout.lines().filter_map(UnmergedCommit::parse_line).collect())
}
