//! Forge abstraction for remote repository creation.
//!
//! "Do X": Create an empty repository on a forge and hand back its URL.
//!
//! # Design
//!
//! - **RepoCreator**: one HTTP call, typed error. Knows nothing about policy.
//! - **create_remote**: the skip/diagnostic policy around it. A missing token
//!   is a deliberate skip, a failed call is reported and swallowed. Neither
//!   retries.
//!
//! # Example
//!
//! ```no_run
//! use ml_bootstrap::forge::{create_remote, GitHubCreator, RepoDescriptor, Visibility};
//!
//! let creator = GitHubCreator::new("https://api.github.com/user/repos")?;
//! let repo = RepoDescriptor::new("demo", "x", Visibility::Public);
//! let mut out = std::io::stdout();
//! if let Some(remote) = create_remote(&creator, &repo, Some("ghp_..."), &mut out) {
//!     println!("{}", remote.url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod types;

pub mod github;

pub use github::GitHubCreator;
pub use types::*;

use std::io::Write;

/// Message printed when no token is available.
pub const NO_TOKEN_MESSAGE: &str = "Токен GitHub не предоставлен. Пропускаем создание репозитория.";

/// Create operations on a forge platform.
pub trait RepoCreator {
    /// Create an empty repository owned by the token's principal.
    fn create_repo(&self, repo: &RepoDescriptor, token: &str) -> Result<RemoteRepo, ForgeError>;
}

/// Create `repo` on the forge, or explain why not.
///
/// Returns `None` without touching `creator` when `token` is absent or empty.
/// Any creator error is written to `out` and also yields `None`.
pub fn create_remote(
    creator: &dyn RepoCreator,
    repo: &RepoDescriptor,
    token: Option<&str>,
    out: &mut dyn Write,
) -> Option<RemoteRepo> {
    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            let _ = writeln!(out, "{}", NO_TOKEN_MESSAGE);
            return None;
        }
    };

    tracing::debug!(name = %repo.name, private = repo.visibility.is_private(), "creating remote repository");

    match creator.create_repo(repo, token) {
        Ok(remote) => Some(remote),
        Err(e) => {
            tracing::debug!(error = ?e, "remote creation failed");
            let _ = writeln!(out, "Ошибка при создании репозитория в GitHub: {}", e);
            if let Some(body) = e.response_body() {
                let _ = writeln!(out, "Ответ сервера: {}", body);
            }
            None
        }
    }
}
