//! Command logging utilities for verbose output.

use std::process::Command;
use tracing::debug;

/// Log a command just before execution.
///
/// Emits a `tracing::debug!` event with the program name, arguments, and
/// working directory. Visible when running with `--verbose` (which sets
/// `gitshare=debug`) or via `RUST_LOG=gitshare::cmd=debug`.
pub fn log_cmd(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cwd = cmd
        .get_current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    debug!(
        target: "gitshare::cmd",
        %program,
        ?args,
        %cwd,
        "exec"
    );
}

/// Render a command as `git <args>` for error messages.
///
/// Uses the file name of the program rather than its full path so
/// messages stay short when git was located through `PATH`.
pub fn describe_cmd(cmd: &Command) -> String {
    let program = std::path::Path::new(cmd.get_program())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cmd.get_program().to_string_lossy().into_owned());
    let mut parts = vec![program];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_cmd_uses_file_name() {
        let mut cmd = Command::new("/usr/bin/git");
        cmd.args(["push", "origin", "feature-x"]);
        assert_eq!(describe_cmd(&cmd), "git push origin feature-x");
    }

    #[test]
    fn test_describe_cmd_without_args() {
        let cmd = Command::new("git");
        assert_eq!(describe_cmd(&cmd), "git");
    }
}
