//! Unmerged command implementation
//!
//! Lists commits on the local mainline that the remote mainline lacks.

use crate::cli::context::ShareContext;
use crate::git::{UnmergedCommit, VersionControl};

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// git's own one-line log, streamed
    Log,
    /// JSON array of `{ id, subject }`
    Json,
    /// Just the number of commits
    Count,
}

impl ReportFormat {
    pub fn from_flags(json: bool, count: bool) -> Self {
        match (json, count) {
            (true, _) => ReportFormat::Json,
            (false, true) => ReportFormat::Count,
            (false, false) => ReportFormat::Log,
        }
    }
}

/// Run the unmerged command
pub fn run_unmerged(ctx: &ShareContext, format: ReportFormat) -> anyhow::Result<()> {
    let local = ctx.config.mainline.as_str();
    let upstream = ctx.config.upstream();

    match format {
        ReportFormat::Log => ctx.git.log_unmerged(local, &upstream)?,
        ReportFormat::Json => {
            let commits = ctx.git.unmerged_commits(local, &upstream)?;
            println!("{}", render_json(&commits)?);
        }
        ReportFormat::Count => {
            let commits = ctx.git.unmerged_commits(local, &upstream)?;
            println!("{}", commits.len());
        }
    }
    Ok(())
}

/// Render collected commits as a JSON array of `{ id, subject }`.
pub fn render_json(commits: &[UnmergedCommit]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(commits)?)
}
