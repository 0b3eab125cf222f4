//! Domain types for remote repository creation.

use serde::Serialize;
use thiserror::Error;

/// Whether a hosted repository is publicly readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// What to create on the forge. Built once from operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

impl RepoDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            visibility,
        }
    }
}

/// A repository the forge has just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Browsable URL (`html_url`), also used as the push remote
    pub url: String,
}

/// JSON body of the repository-creation request.
#[derive(Debug, Serialize)]
pub struct CreateRepoRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub private: bool,
    /// Always false: content arrives with the first push
    pub auto_init: bool,
}

impl<'a> From<&'a RepoDescriptor> for CreateRepoRequest<'a> {
    fn from(repo: &'a RepoDescriptor) -> Self {
        Self {
            name: &repo.name,
            description: &repo.description,
            private: repo.visibility.is_private(),
            auto_init: false,
        }
    }
}

/// Failure creating a remote repository.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status}")]
    Api { status: String, body: String },

    #[error("response has no html_url field")]
    MissingUrl,
}

impl ForgeError {
    /// Response body returned by the provider, when there was one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ForgeError::Api { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
