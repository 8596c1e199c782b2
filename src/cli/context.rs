//! Context passed to command handlers
//!
//! Bundles the git handle, resolved configuration and global CLI flags
//! into a single struct.

use super::args::GlobalArgs;
use crate::core::config::ShareConfig;
use crate::git::GitCli;
use anyhow::Context;

/// Context available to all command handlers.
///
/// Created once in `main()` after argument parsing, then passed by
/// reference to the command.
pub struct ShareContext {
    /// Handle on the git binary, bound to the target directory
    pub git: GitCli,
    /// Remote and mainline the command works against
    pub config: ShareConfig,
    /// Suppress non-essential output (`--quiet`)
    pub quiet: bool,
    /// Show verbose output (`--verbose`)
    pub verbose: bool,
}

impl ShareContext {
    /// Locate git and resolve configuration from the global flags.
    pub fn from_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let mut git = match &args.git {
            Some(program) => GitCli::with_program(program),
            None => GitCli::locate()?,
        };
        if let Some(dir) = &args.directory {
            git = git.in_dir(dir);
        }

        let config = ShareConfig::resolve(&git, args.remote.as_deref(), args.mainline.as_deref())
            .context("Failed to read share configuration")?;

        Ok(Self {
            git,
            config,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}
