//! First commit and push of a freshly generated project

use super::operations::{GitError, GitRunner, GitStep};
use crate::config::GitSettings;

/// Remote URL with the token placed in its authority component.
///
/// `https://github.com/u/demo` becomes `https://<token>@github.com/u/demo`.
/// Without a token, or for non-https URLs, the URL is returned unchanged.
///
/// The result ends up in `.git/config` in plaintext.
pub fn authenticated_url(url: &str, token: Option<&str>) -> String {
    match (token.map(str::trim), url.strip_prefix("https://")) {
        (Some(token), Some(rest)) if !token.is_empty() => format!("https://{}@{}", token, rest),
        _ => url.to_string(),
    }
}

/// Initialize git in the project, commit everything and push to `url`.
///
/// Runs init, add, commit, remote add, push in that order and stops at the
/// first failure. Steps already done are not undone, so a failed run can
/// leave a partially initialized repository behind.
pub fn initialize_and_push(
    git: &dyn GitRunner,
    url: &str,
    token: Option<&str>,
    settings: &GitSettings,
) -> Result<(), GitError> {
    let remote_url = authenticated_url(url, token);
    if remote_url != url {
        tracing::warn!(
            remote = %settings.remote,
            "token embedded in remote URL; it is stored in plaintext in .git/config"
        );
    }

    git.run(GitStep::Init, &["init"])?;
    git.run(GitStep::Add, &["add", "."])?;
    git.run(GitStep::Commit, &["commit", "-m", &settings.commit_message])?;
    git.run(GitStep::RemoteAdd, &["remote", "add", &settings.remote, &remote_url])?;
    git.run(GitStep::Push, &["push", "-u", &settings.remote, &settings.branch])?;

    Ok(())
}
