//! Git operations wrapper
//!
//! Every operation shells out to the `git` binary. Mutating commands
//! stream their output straight to the terminal; queries capture it.

pub mod branch;
pub mod cherry_pick;
pub mod log;
pub mod remote;
pub mod status;
pub mod traits;

pub use log::UnmergedCommit;
pub use traits::VersionControl;

use crate::telemetry::{GitSpan, SpanExt};
use crate::util::{describe_cmd, log_cmd};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found: {0}")]
    NotInstalled(String),

    #[error("failed to run {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed ({status}){detail}", status = exit_label(.code), detail = stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    #[error("Unexpected git output: {0}")]
    InvalidOutput(String),
}

impl GitError {
    /// Captured stderr of the failed command, if any was collected.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            GitError::CommandFailed { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Handle on the `git` binary, optionally bound to a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Locate `git` on `PATH`.
    pub fn locate() -> Result<Self, GitError> {
        let program = which::which("git").map_err(|e| GitError::NotInstalled(e.to_string()))?;
        Ok(Self::with_program(program))
    }

    /// Use an explicit git binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run every command in `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// The working directory commands run in, if one was set.
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn traced<T>(
        &self,
        args: &[&str],
        run: impl FnOnce(&mut Command) -> Result<T, GitError>,
    ) -> Result<T, GitError> {
        let mut cmd = self.command(args);
        log_cmd(&cmd);

        let workdir = self
            .workdir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        let span = GitSpan::new(args.first().copied().unwrap_or("git"), &workdir);
        let _enter = span.enter();
        let start = Instant::now();

        let result = run(&mut cmd);

        span.record_success(result.is_ok());
        span.record_duration_ms(start.elapsed().as_secs_f64() * 1000.0);
        result
    }

    /// Run a command with stdout and stderr inherited from this process.
    ///
    /// The user sees git's own output as it happens. A non-zero exit is
    /// an error with an empty `stderr`, since git already printed it.
    pub fn run_streamed(&self, args: &[&str]) -> Result<(), GitError> {
        self.traced(args, |cmd| {
            let status = cmd.status().map_err(|source| GitError::Spawn {
                command: describe_cmd(cmd),
                source,
            })?;
            if status.success() {
                Ok(())
            } else {
                Err(GitError::CommandFailed {
                    command: describe_cmd(cmd),
                    code: status.code(),
                    stderr: String::new(),
                })
            }
        })
    }

    /// Run a command and return its stdout. A non-zero exit is an error
    /// carrying the trimmed stderr.
    pub fn run_captured(&self, args: &[&str]) -> Result<String, GitError> {
        self.traced(args, |cmd| {
            let output = spawn_output(cmd)?;
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            } else {
                Err(failure(cmd, &output))
            }
        })
    }

    /// Run a command and hand back the raw output regardless of exit
    /// status. Only a failure to spawn is an error.
    pub fn run_output(&self, args: &[&str]) -> Result<Output, GitError> {
        self.traced(args, spawn_output)
    }
}

fn spawn_output(cmd: &mut Command) -> Result<Output, GitError> {
    cmd.output().map_err(|source| GitError::Spawn {
        command: describe_cmd(cmd),
        source,
    })
}

fn failure(cmd: &Command, output: &Output) -> GitError {
    GitError::CommandFailed {
        command: describe_cmd(cmd),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
