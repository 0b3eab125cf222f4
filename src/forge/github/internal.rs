//! Internal implementation for GitHub RepoCreator.
//!
//! Contains the REST call and JSON parsing.
//! Not exposed in public interface.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::forge::{CreateRepoRequest, ForgeError, RemoteRepo, RepoDescriptor};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

// ============================================================================
// API JSON types (internal, match GitHub response format)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CreatedRepo {
    #[serde(default)]
    html_url: Option<String>,
}

// ============================================================================
// Request
// ============================================================================

/// POST the repository-creation request. Single attempt.
pub(super) fn post_create_repo(
    client: &Client,
    api_url: &str,
    repo: &RepoDescriptor,
    token: &str,
) -> Result<RemoteRepo, ForgeError> {
    let response = client
        .post(api_url)
        .bearer_auth(token)
        .header(ACCEPT, GITHUB_MEDIA_TYPE)
        .json(&CreateRepoRequest::from(repo))
        .send()?;

    let status = response.status();
    tracing::debug!(%status, url = api_url, "repository creation response");

    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ForgeError::Api {
            status: status.to_string(),
            body,
        });
    }

    let created: CreatedRepo = response.json()?;
    parse_created(created)
}

fn parse_created(created: CreatedRepo) -> Result<RemoteRepo, ForgeError> {
    match created.html_url {
        Some(url) if !url.is_empty() => Ok(RemoteRepo { url }),
        _ => Err(ForgeError::MissingUrl),
    }
}
