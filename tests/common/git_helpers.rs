//! Git helper utilities for integration tests.
//!
//! Provides functions to create bare repos, commit files, create branches,
//! and inspect refs -- all using the `git` CLI for offline testing.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Initialize a bare git repository at the given path.
pub fn init_bare_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    let status = Command::new("git")
        .args(["init", "--bare", "-b", "master"])
        .current_dir(path)
        .output()
        .expect("failed to init bare repo");
    assert!(
        status.status.success(),
        "git init --bare failed: {}",
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Initialize a non-bare git repository with user config.
pub fn init_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    git(path, &["init", "-b", "master"]);
    configure_identity(path);
}

/// Configure a commit identity (CI runners may not have global config).
pub fn configure_identity(path: &Path) {
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

/// Create a file, stage, and commit it. Returns the commit hash.
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> String {
    fs::write(repo_path.join(filename), content).unwrap();
    git(repo_path, &["add", filename]);
    git(repo_path, &["commit", "-m", message]);
    get_head_sha(repo_path)
}

/// Create and checkout a new branch.
pub fn create_branch(repo_path: &Path, branch_name: &str) {
    git(repo_path, &["checkout", "-b", branch_name]);
}

/// Checkout an existing branch or commit.
pub fn checkout(repo_path: &Path, target: &str) {
    git(repo_path, &["checkout", "-q", target]);
}

/// Push a branch to a remote.
pub fn push_branch(repo_path: &Path, remote: &str, branch: &str) {
    git(repo_path, &["push", remote, branch]);
}

/// Add a remote to a repository.
pub fn add_remote(repo_path: &Path, name: &str, url: &str) {
    git(repo_path, &["remote", "add", name, url]);
}

/// Rename a remote.
pub fn rename_remote(repo_path: &Path, old: &str, new: &str) {
    git(repo_path, &["remote", "rename", old, new]);
}

/// Set a repository config value.
pub fn set_config(repo_path: &Path, key: &str, value: &str) {
    git(repo_path, &["config", key, value]);
}

/// Get the current branch name.
pub fn current_branch(repo_path: &Path) -> String {
    git_output(repo_path, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Get HEAD sha.
pub fn get_head_sha(repo_path: &Path) -> String {
    git_output(repo_path, &["rev-parse", "HEAD"])
}

/// Resolve any revision to a full sha.
pub fn rev_parse(repo_path: &Path, revision: &str) -> String {
    git_output(repo_path, &["rev-parse", revision])
}

/// Commit subjects reachable from `revision`, newest first.
pub fn log_subjects(repo_path: &Path, revision: &str) -> Vec<String> {
    git_output(repo_path, &["log", "--format=%s", revision])
        .lines()
        .map(|s| s.to_string())
        .collect()
}

/// Check if a local branch exists.
pub fn branch_exists(repo_path: &Path, branch_name: &str) -> bool {
    ref_exists(repo_path, &format!("refs/heads/{}", branch_name))
}

/// Check if a fully qualified ref exists.
pub fn ref_exists(repo_path: &Path, reference: &str) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", reference])
        .current_dir(repo_path)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Check if a branch has upstream tracking configured.
pub fn has_upstream(repo_path: &Path, branch_name: &str) -> bool {
    !git_output_unchecked(
        repo_path,
        &["config", "--get", &format!("branch.{}.remote", branch_name)],
    )
    .is_empty()
}

/// Check if a cherry-pick is waiting for conflict resolution.
pub fn cherry_pick_in_progress(repo_path: &Path) -> bool {
    let path = git_output(repo_path, &["rev-parse", "--git-path", "CHERRY_PICK_HEAD"]);
    repo_path.join(path).exists()
}

/// Clone a repository from a URL (typically file://).
pub fn clone_repo(url: &str, dest: &Path) {
    let status = Command::new("git")
        .args(["clone", url, dest.to_str().unwrap()])
        .output()
        .expect("failed to clone repo");
    assert!(
        status.status.success(),
        "git clone failed: {}",
        String::from_utf8_lossy(&status.stderr)
    );
    configure_identity(dest);
}

/// Run a git command, panic on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Run a git command and return trimmed stdout.
fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run a git command and return trimmed stdout, ignoring the exit status.
fn git_output_unchecked(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
