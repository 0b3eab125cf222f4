//! Low-level git operations

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// One subprocess in the local bootstrap sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Init,
    Add,
    Commit,
    RemoteAdd,
    Push,
}

impl GitStep {
    /// All steps, in the order they run
    pub const SEQUENCE: [GitStep; 5] = [
        GitStep::Init,
        GitStep::Add,
        GitStep::Commit,
        GitStep::RemoteAdd,
        GitStep::Push,
    ];
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GitStep::Init => "init",
            GitStep::Add => "add",
            GitStep::Commit => "commit",
            GitStep::RemoteAdd => "remote add",
            GitStep::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum GitError {
    /// git ran and exited non-zero
    #[error("git {step} failed ({status}): {stderr}")]
    StepFailed {
        step: GitStep,
        status: String,
        stderr: String,
    },

    /// git could not be started at all
    #[error("could not start git {step}: {source}")]
    Spawn {
        step: GitStep,
        #[source]
        source: std::io::Error,
    },
}

impl GitError {
    pub fn step(&self) -> GitStep {
        match self {
            GitError::StepFailed { step, .. } | GitError::Spawn { step, .. } => *step,
        }
    }
}

/// Runs git commands. Swapped for a recorder in tests.
pub trait GitRunner {
    /// Run `git <args>` as `step`. Non-zero exit is an error.
    fn run(&self, step: GitStep, args: &[&str]) -> Result<(), GitError>;
}

/// Runs the system `git` binary inside a fixed directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    dir: PathBuf,
}

impl SystemGit {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, step: GitStep, args: &[&str]) -> Result<(), GitError> {
        tracing::debug!(%step, dir = %self.dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|source| GitError::Spawn { step, source })?;

        if !output.status.success() {
            return Err(GitError::StepFailed {
                step,
                status: describe_status(output.status),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "killed by signal".to_string(),
    }
}

/// Check that a `git` binary is on PATH
pub fn is_git_available() -> bool {
    which::which("git").is_ok()
}
