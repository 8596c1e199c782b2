//! Test fixtures for building a working clone with a local bare remote.
//!
//! `RepoBuilder` creates a temp directory holding `remote.git` (bare, on
//! `master`) and `clone/`, a clone of it with one pushed commit. The
//! remote is addressed through a `file://` URL so no network is needed.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_helpers;

/// A working clone of a bare remote, alive as long as the fixture.
pub struct RepoFixture {
    pub _temp: TempDir,
    pub repo: PathBuf,
    pub remote: PathBuf,
}

impl RepoFixture {
    /// `file://` URL of the bare remote.
    pub fn remote_url(&self) -> String {
        format!("file://{}", self.remote.display())
    }

    /// Path inside the working clone.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.repo.join(relative)
    }

    /// Commit a file on the currently checked-out branch without pushing.
    pub fn commit_local(&self, filename: &str, content: &str, message: &str) -> String {
        git_helpers::commit_file(&self.repo, filename, content, message)
    }

    /// `git-share` preconfigured to run in the clone with a clean environment.
    pub fn share_cmd(&self) -> assert_cmd::Command {
        self.bin("git-share")
    }

    /// `git-unmerged` preconfigured to run in the clone with a clean environment.
    pub fn unmerged_cmd(&self) -> assert_cmd::Command {
        self.bin("git-unmerged")
    }

    fn bin(&self, name: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin(name).unwrap();
        cmd.current_dir(&self.repo)
            .env_remove("GIT_SHARE_REMOTE")
            .env_remove("GIT_SHARE_MAINLINE")
            .env_remove("GIT_SHARE_GIT")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Builder for `RepoFixture`.
pub struct RepoBuilder {
    remote_name: String,
    local_commits: Vec<(String, String, String)>,
}

impl RepoBuilder {
    pub fn new() -> Self {
        Self {
            remote_name: "origin".to_string(),
            local_commits: Vec::new(),
        }
    }

    /// Name the clone's remote something other than `origin`.
    pub fn remote_name(mut self, name: &str) -> Self {
        self.remote_name = name.to_string();
        self
    }

    /// Add an unpushed commit on the local `master`.
    pub fn local_commit(mut self, filename: &str, content: &str, message: &str) -> Self {
        self.local_commits.push((
            filename.to_string(),
            content.to_string(),
            message.to_string(),
        ));
        self
    }

    pub fn build(self) -> RepoFixture {
        let temp = TempDir::new().unwrap();
        let remote = temp.path().join("remote.git");
        let repo = temp.path().join("clone");

        git_helpers::init_bare_repo(&remote);
        seed_remote(temp.path(), &remote);

        git_helpers::clone_repo(&format!("file://{}", remote.display()), &repo);
        if self.remote_name != "origin" {
            git_helpers::rename_remote(&repo, "origin", &self.remote_name);
        }

        for (filename, content, message) in &self.local_commits {
            git_helpers::commit_file(&repo, filename, content, message);
        }

        RepoFixture {
            _temp: temp,
            repo,
            remote,
        }
    }
}

impl Default for RepoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Push an initial README commit to `master` on the bare remote.
fn seed_remote(root: &Path, remote: &Path) {
    let staging = root.join("seed");
    git_helpers::init_repo(&staging);
    git_helpers::commit_file(&staging, "README.md", "# Test\n", "Initial commit");
    git_helpers::add_remote(&staging, "origin", &format!("file://{}", remote.display()));
    git_helpers::push_branch(&staging, "origin", "master");
}
