//! Internal implementation for config module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// =============================================================================
// Settings Types
// =============================================================================

/// Bootstrap settings. All sections are optional with defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub template: TemplateContext,
    #[serde(default)]
    pub github: GitHubSection,
    #[serde(default)]
    pub git: GitSettings,
}

/// Variables the template engine rendered the project with
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateContext {
    /// Human readable project name
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Directory and repository name
    #[serde(default = "default_repo_name")]
    pub repo_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub email: String,
    /// Minimum Python version of the generated package
    #[serde(default = "default_python_version")]
    pub python_version: String,
}

fn default_project_name() -> String {
    "ML Project".to_string()
}
fn default_repo_name() -> String {
    "ml-project".to_string()
}
fn default_python_version() -> String {
    "3.9".to_string()
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            repo_name: default_repo_name(),
            description: String::new(),
            author_name: String::new(),
            email: String::new(),
            python_version: default_python_version(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubSection {
    /// Repository creation endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.github.com/user/repos".to_string()
}

impl Default for GitHubSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Parameters of the local init/commit/push sequence
#[derive(Debug, Clone, Deserialize)]
pub struct GitSettings {
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Branch pushed upstream. `HEAD` pushes whatever branch `git init` created.
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_remote() -> String {
    "origin".to_string()
}
fn default_branch() -> String {
    "HEAD".to_string()
}
fn default_commit_message() -> String {
    "Initial commit from cookiecutter template".to_string()
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            commit_message: default_commit_message(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

pub fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

pub fn parse(text: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(text)?;
    Ok(settings)
}
