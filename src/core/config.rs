//! Remote and mainline configuration
//!
//! Values come from, in order: command-line flag (or its environment
//! variable), repository git config (`share.remote`, `share.mainline`),
//! then the built-in defaults.

use crate::git::{GitError, VersionControl};

/// Remote used when nothing else is configured
pub const DEFAULT_REMOTE: &str = "origin";
/// Mainline branch used when nothing else is configured
pub const DEFAULT_MAINLINE: &str = "master";

/// Git config key overriding the remote
pub const REMOTE_CONFIG_KEY: &str = "share.remote";
/// Git config key overriding the mainline branch
pub const MAINLINE_CONFIG_KEY: &str = "share.mainline";

/// Which remote and mainline branch the tools operate against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Remote to push to and compare against
    pub remote: String,
    /// Mainline branch name, local and on the remote
    pub mainline: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE, DEFAULT_MAINLINE)
    }
}

impl ShareConfig {
    pub fn new(remote: impl Into<String>, mainline: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            mainline: mainline.into(),
        }
    }

    /// Resolve the configuration, falling back to git config and then
    /// the defaults for any value not given explicitly.
    pub fn resolve<V: VersionControl + ?Sized>(
        vcs: &V,
        remote: Option<&str>,
        mainline: Option<&str>,
    ) -> Result<Self, GitError> {
        let remote = pick(vcs, remote, REMOTE_CONFIG_KEY, DEFAULT_REMOTE)?;
        let mainline = pick(vcs, mainline, MAINLINE_CONFIG_KEY, DEFAULT_MAINLINE)?;
        Ok(Self { remote, mainline })
    }

    /// Short name of the remote mainline, e.g. `origin/master`.
    pub fn upstream(&self) -> String {
        format!("{}/{}", self.remote, self.mainline)
    }

    /// Fully qualified remote-tracking ref for a branch.
    pub fn remote_ref(&self, branch: &str) -> String {
        format!("refs/remotes/{}/{}", self.remote, branch)
    }
}

fn pick<V: VersionControl + ?Sized>(
    vcs: &V,
    explicit: Option<&str>,
    key: &str,
    default: &str,
) -> Result<String, GitError> {
    if let Some(value) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    Ok(vcs
        .config_value(key)?
        .unwrap_or_else(|| default.to_string()))
}
