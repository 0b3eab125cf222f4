//! Git repository bootstrap for generated projects
//!
//! Handles:
//! - Running git subprocesses in the project directory
//! - Building the push remote (optionally with an embedded token)
//! - The init/add/commit/remote/push sequence, fail-fast, no rollback

mod operations;
mod publish;

pub use operations::{is_git_available, GitError, GitRunner, GitStep, SystemGit};
pub use publish::{authenticated_url, initialize_and_push};
