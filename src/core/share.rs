//! Share workflow
//!
//! Publishes a single commit on a throwaway branch:
//!
//! 1. check the working tree is clean and remember the current branch
//! 2. resolve the revision to a commit id
//! 3. create `<branch>` from the remote mainline unless the remote
//!    already has it
//! 4. check out `<branch>`
//! 5. cherry-pick the commit
//! 6. push `<branch>`
//! 7. check out the original branch again
//! 8. force-delete the local `<branch>`
//!
//! The first failing step ends the run. Earlier steps are not undone:
//! the repository stays exactly as the failing git command left it.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::config::ShareConfig;
use crate::git::{GitError, VersionControl};

/// One stage of the share workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Precondition,
    CaptureRevision,
    CreateBranch,
    Checkout,
    CherryPick,
    Push,
    Restore,
    Cleanup,
}

impl Step {
    /// Human readable name used in progress and error output
    pub fn label(&self) -> &'static str {
        match self {
            Step::Precondition => "precondition check",
            Step::CaptureRevision => "revision lookup",
            Step::CreateBranch => "branch creation",
            Step::Checkout => "checkout",
            Step::CherryPick => "cherry-pick",
            Step::Push => "push",
            Step::Restore => "restore",
            Step::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that end a share run
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Cannot continue: you have pending changes ({changes} changed paths)")]
    DirtyWorkingTree { changes: usize },

    #[error("{step} failed")]
    Step {
        step: Step,
        #[source]
        source: GitError,
    },
}

impl ShareError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// The step that failed, if the failure came from git.
    pub fn step(&self) -> Option<Step> {
        match self {
            ShareError::Step { step, .. } => Some(*step),
            ShareError::DirtyWorkingTree { .. } => None,
        }
    }
}

fn at(step: Step) -> impl FnOnce(GitError) -> ShareError {
    move |source| ShareError::Step { step, source }
}

/// What to share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Name of the throwaway branch, locally and on the remote
    pub branch: String,
    /// Revision expression naming the commit to share
    pub revision: String,
}

impl ShareRequest {
    pub fn new(branch: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            revision: revision.into(),
        }
    }
}

/// State carried between steps of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSession {
    /// Branch checked out when the run started
    pub original_branch: String,
    /// Full id of the commit being shared
    pub revision: String,
    /// Whether this run created the local branch
    pub branch_created: bool,
}

/// Receives narration as the workflow advances.
pub trait ShareProgress {
    /// A step is about to run.
    fn step(&mut self, step: Step, detail: &str);

    /// A step was not needed.
    fn skipped(&mut self, step: Step, reason: &str) {
        let _ = (step, reason);
    }
}

/// Progress sink that discards everything.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ShareProgress for SilentProgress {
    fn step(&mut self, _step: Step, _detail: &str) {}
}

/// A mutation step the workflow would perform, with its git command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: Step,
    pub command: String,
}

/// Result of a dry run: the session that would be used and the steps
/// that would run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePlan {
    pub session: ShareSession,
    pub steps: Vec<PlannedStep>,
}

/// Drives the share steps against a version-control backend.
pub struct ShareWorkflow<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    config: &'a ShareConfig,
}

impl<'a, V: VersionControl + ?Sized> ShareWorkflow<'a, V> {
    pub fn new(vcs: &'a V, config: &'a ShareConfig) -> Self {
        Self { vcs, config }
    }

    /// Record the current branch and refuse to go on with a dirty tree.
    ///
    /// Returns the branch to come back to.
    pub fn check_preconditions(&self) -> Result<String, ShareError> {
        let original = self
            .vcs
            .current_branch()
            .map_err(at(Step::Precondition))?;
        let changes = self.vcs.dirty_count().map_err(at(Step::Precondition))?;
        debug!(branch = %original, changes, "precondition check");
        if changes > 0 {
            return Err(ShareError::DirtyWorkingTree { changes });
        }
        Ok(original)
    }

    /// Resolve the revision before anything is checked out, so that
    /// expressions like `HEAD` refer to the starting point.
    pub fn capture_revision(&self, revision: &str) -> Result<String, ShareError> {
        let id = self
            .vcs
            .resolve_revision(revision)
            .map_err(at(Step::CaptureRevision))?;
        debug!(revision, %id, "resolved revision");
        Ok(id)
    }

    /// Whether the branch has to be created locally, i.e. the remote
    /// does not have it yet.
    pub fn needs_branch(&self, branch: &str) -> Result<bool, ShareError> {
        let exists = self
            .vcs
            .ref_exists(&self.config.remote_ref(branch))
            .map_err(at(Step::CreateBranch))?;
        Ok(!exists)
    }

    /// Create the branch from the remote mainline, without tracking.
    pub fn create_branch(&self, branch: &str) -> Result<(), ShareError> {
        self.vcs
            .create_branch(branch, &self.config.upstream())
            .map_err(at(Step::CreateBranch))
    }

    pub fn checkout_branch(&self, branch: &str) -> Result<(), ShareError> {
        self.vcs.checkout(branch).map_err(at(Step::Checkout))
    }

    pub fn apply(&self, revision: &str) -> Result<(), ShareError> {
        self.vcs.cherry_pick(revision).map_err(at(Step::CherryPick))
    }

    pub fn publish(&self, branch: &str) -> Result<(), ShareError> {
        self.vcs
            .push(&self.config.remote, branch)
            .map_err(at(Step::Push))
    }

    pub fn restore(&self, session: &ShareSession) -> Result<(), ShareError> {
        self.vcs
            .checkout(&session.original_branch)
            .map_err(at(Step::Restore))
    }

    pub fn cleanup(&self, branch: &str) -> Result<(), ShareError> {
        self.vcs.delete_branch(branch).map_err(at(Step::Cleanup))
    }

    /// Run the read-only steps and describe the mutations that would follow.
    pub fn plan(&self, request: &ShareRequest) -> Result<SharePlan, ShareError> {
        let original_branch = self.check_preconditions()?;
        let revision = self.capture_revision(&request.revision)?;
        let branch_created = self.needs_branch(&request.branch)?;

        let branch = &request.branch;
        let mut steps = Vec::new();
        if branch_created {
            steps.push(PlannedStep {
                step: Step::CreateBranch,
                command: format!("git branch {} {} --no-track", branch, self.config.upstream()),
            });
        }
        steps.extend([
            PlannedStep {
                step: Step::Checkout,
                command: format!("git checkout -q {}", branch),
            },
            PlannedStep {
                step: Step::CherryPick,
                command: format!("git cherry-pick {}", revision),
            },
            PlannedStep {
                step: Step::Push,
                command: format!("git push {} {}", self.config.remote, branch),
            },
            PlannedStep {
                step: Step::Restore,
                command: format!("git checkout -q {}", original_branch),
            },
            PlannedStep {
                step: Step::Cleanup,
                command: format!("git branch -D {}", branch),
            },
        ]);

        Ok(SharePlan {
            session: ShareSession {
                original_branch,
                revision,
                branch_created,
            },
            steps,
        })
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(
        &self,
        request: &ShareRequest,
        progress: &mut dyn ShareProgress,
    ) -> Result<ShareSession, ShareError> {
        let branch = request.branch.as_str();

        progress.step(Step::Precondition, "Checking working tree");
        let original_branch = self.check_preconditions()?;

        progress.step(
            Step::CaptureRevision,
            &format!("Resolving {}", request.revision),
        );
        let revision = self.capture_revision(&request.revision)?;

        let mut session = ShareSession {
            original_branch,
            revision,
            branch_created: false,
        };

        if self.needs_branch(branch)? {
            progress.step(
                Step::CreateBranch,
                &format!("Creating {} from {}", branch, self.config.upstream()),
            );
            self.create_branch(branch)?;
            session.branch_created = true;
        } else {
            debug!(branch, "remote branch exists, skipping creation");
            progress.skipped(
                Step::CreateBranch,
                &format!("{}/{} already exists", self.config.remote, branch),
            );
        }

        progress.step(Step::Checkout, &format!("Checking out {}", branch));
        self.checkout_branch(branch)?;

        progress.step(
            Step::CherryPick,
            &format!("Cherry-picking {}", short_id(&session.revision)),
        );
        self.apply(&session.revision)?;

        progress.step(
            Step::Push,
            &format!("Pushing {} to {}", branch, self.config.remote),
        );
        self.publish(branch)?;

        progress.step(
            Step::Restore,
            &format!("Returning to {}", session.original_branch),
        );
        self.restore(&session)?;

        progress.step(Step::Cleanup, &format!("Deleting local {}", branch));
        self.cleanup(branch)?;

        Ok(session)
    }
}

/// Abbreviate a commit id for display.
pub fn short_id(id: &str) -> &str {
    id.get(..7).unwrap_or(id)
}
