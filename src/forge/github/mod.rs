//! GitHub RepoCreator implementation.
//!
//! "Do X": Create an empty repository under the authenticated user.
//!
//! Talks to the REST API directly with a blocking reqwest client.
//! All HTTP interaction hidden in internal.rs.

mod internal;

use anyhow::{Context, Result};

use super::{ForgeError, RemoteRepo, RepoCreator, RepoDescriptor};

/// GitHub implementation of RepoCreator.
pub struct GitHubCreator {
    api_url: String,
    client: reqwest::blocking::Client,
}

impl GitHubCreator {
    /// Build a creator posting to `api_url` (normally `https://api.github.com/user/repos`).
    ///
    /// No timeout is configured beyond the client's default.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ml-bootstrap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_url: api_url.into(),
            client,
        })
    }
}

impl RepoCreator for GitHubCreator {
    fn create_repo(&self, repo: &RepoDescriptor, token: &str) -> Result<RemoteRepo, ForgeError> {
        internal::post_create_repo(&self.client, &self.api_url, repo, token)
    }
}
