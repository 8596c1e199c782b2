//! Version-control capability used by the share workflow

use super::{branch, cherry_pick, log, remote, status, GitCli, GitError, UnmergedCommit};

/// The repository operations the workflows need.
///
/// `GitCli` implements this over the `git` binary. Workflow tests use an
/// in-memory implementation instead.
pub trait VersionControl {
    /// Abbreviated name of the checked-out branch
    fn current_branch(&self) -> Result<String, GitError>;

    /// Number of pending changes in the working tree
    fn dirty_count(&self) -> Result<usize, GitError>;

    /// Whether a fully qualified reference exists
    fn ref_exists(&self, reference: &str) -> Result<bool, GitError>;

    /// Resolve a revision expression to a full commit id
    fn resolve_revision(&self, revision: &str) -> Result<String, GitError>;

    /// Create an untracked local branch at `start_point`
    fn create_branch(&self, branch_name: &str, start_point: &str) -> Result<(), GitError>;

    fn checkout(&self, branch_name: &str) -> Result<(), GitError>;

    fn cherry_pick(&self, commit: &str) -> Result<(), GitError>;

    /// Whether a cherry-pick is waiting for conflict resolution
    fn cherry_pick_in_progress(&self) -> Result<bool, GitError>;

    fn push(&self, remote: &str, branch_name: &str) -> Result<(), GitError>;

    /// Force-delete a local branch
    fn delete_branch(&self, branch_name: &str) -> Result<(), GitError>;

    /// Stream commits on `local` missing from `upstream` to stdout
    fn log_unmerged(&self, local: &str, upstream: &str) -> Result<(), GitError>;

    /// Collect commits on `local` missing from `upstream`
    fn unmerged_commits(&self, local: &str, upstream: &str)
        -> Result<Vec<UnmergedCommit>, GitError>;

    /// Read a config value, `None` when unset
    fn config_value(&self, key: &str) -> Result<Option<String>, GitError>;
}

impl VersionControl for GitCli {
    fn current_branch(&self) -> Result<String, GitError> {
        branch::current_branch(self)
    }

    fn dirty_count(&self) -> Result<usize, GitError> {
        status::dirty_count(self)
    }

    fn ref_exists(&self, reference: &str) -> Result<bool, GitError> {
        branch::ref_exists(self, reference)
    }

    fn resolve_revision(&self, revision: &str) -> Result<String, GitError> {
        branch::resolve_revision(self, revision)
    }

    fn create_branch(&self, branch_name: &str, start_point: &str) -> Result<(), GitError> {
        branch::create_branch(self, branch_name, start_point)
    }

    fn checkout(&self, branch_name: &str) -> Result<(), GitError> {
        branch::checkout(self, branch_name)
    }

    fn cherry_pick(&self, commit: &str) -> Result<(), GitError> {
        cherry_pick::cherry_pick(self, commit)
    }

    fn cherry_pick_in_progress(&self) -> Result<bool, GitError> {
        cherry_pick::cherry_pick_in_progress(self)
    }

    fn push(&self, remote: &str, branch_name: &str) -> Result<(), GitError> {
        remote::push_branch(self, remote, branch_name)
    }

    fn delete_branch(&self, branch_name: &str) -> Result<(), GitError> {
        branch::delete_branch(self, branch_name)
    }

    fn log_unmerged(&self, local: &str, upstream: &str) -> Result<(), GitError> {
        log::log_unmerged(self, local, upstream)
    }

    fn unmerged_commits(
        &self,
        local: &str,
        upstream: &str,
    ) -> Result<Vec<UnmergedCommit>, GitError> {
        log::unmerged_commits(self, local, upstream)
    }

    fn config_value(&self, key: &str) -> Result<Option<String>, GitError> {
        remote::config_value(self, key)
    }
}
