//! Command-line arguments for both binaries

use clap::{Args, Parser};
use std::path::PathBuf;

/// Flags shared by `git-share` and `git-unmerged`
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Run as if started in <PATH>
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Remote to push to and compare against (default: git config share.remote, else origin)
    #[arg(long, env = "GIT_SHARE_REMOTE")]
    pub remote: Option<String>,

    /// Mainline branch (default: git config share.mainline, else master)
    #[arg(long, env = "GIT_SHARE_MAINLINE")]
    pub mainline: Option<String>,

    /// Git binary to run (default: git on PATH)
    #[arg(long = "git", env = "GIT_SHARE_GIT", value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Only print errors and git's own output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every git command
    #[arg(short, long)]
    pub verbose: bool,
}

/// Share a single commit on a throwaway branch
#[derive(Debug, Parser)]
#[command(name = "git-share")]
#[command(author, version, long_about = None)]
#[command(
    about = "Cherry-pick a commit onto a fresh branch from the mainline, push it, and clean up"
)]
pub struct ShareCli {
    /// Branch to create and push
    pub branch: String,

    /// Commit to cherry-pick (any revision expression, e.g. HEAD or a sha)
    pub revision: String,

    /// Show the git commands that would run without changing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// List local mainline commits the remote does not have yet
#[derive(Debug, Parser)]
#[command(name = "git-unmerged")]
#[command(author, version, long_about = None)]
#[command(about = "List commits on the local mainline that are not on the remote mainline")]
pub struct UnmergedCli {
    /// Output JSON
    #[arg(long, conflicts_with = "count")]
    pub json: bool,

    /// Only print the number of unmerged commits
    #[arg(long)]
    pub count: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}
