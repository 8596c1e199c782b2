//! Custom test assertions for repository state.

use std::path::Path;

use super::git_helpers;

/// Assert that the working clone is on the expected branch.
pub fn assert_on_branch(repo_path: &Path, expected: &str) {
    let actual = git_helpers::current_branch(repo_path);
    assert_eq!(
        actual,
        expected,
        "expected {} to be on branch '{}', but was on '{}'",
        repo_path.display(),
        expected,
        actual
    );
}

/// Assert that a local branch exists.
pub fn assert_branch_exists(repo_path: &Path, branch: &str) {
    assert!(
        git_helpers::branch_exists(repo_path, branch),
        "expected branch '{}' to exist in {}",
        branch,
        repo_path.display()
    );
}

/// Assert that a local branch does NOT exist.
pub fn assert_branch_not_exists(repo_path: &Path, branch: &str) {
    assert!(
        !git_helpers::branch_exists(repo_path, branch),
        "expected branch '{}' to NOT exist in {}",
        branch,
        repo_path.display()
    );
}

/// Assert that the bare remote carries a branch.
pub fn assert_remote_has_branch(remote_path: &Path, branch: &str) {
    assert!(
        git_helpers::branch_exists(remote_path, branch),
        "expected remote {} to have branch '{}'",
        remote_path.display(),
        branch
    );
}

/// Assert that the bare remote does NOT carry a branch.
pub fn assert_remote_lacks_branch(remote_path: &Path, branch: &str) {
    assert!(
        !git_helpers::branch_exists(remote_path, branch),
        "expected remote {} to NOT have branch '{}'",
        remote_path.display(),
        branch
    );
}

/// Assert that `git status -s` reports nothing.
pub fn assert_clean(repo_path: &Path) {
    let output = std::process::Command::new("git")
        .args(["status", "-s"])
        .current_dir(repo_path)
        .output()
        .unwrap();
    let status = String::from_utf8_lossy(&output.stdout);
    assert!(
        status.trim().is_empty(),
        "expected a clean working tree in {}, got:\n{}",
        repo_path.display(),
        status
    );
}
