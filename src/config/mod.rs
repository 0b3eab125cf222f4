//! Config module - Template variables and bootstrap settings
//!
//! The template engine renders the project first and then hands over the
//! variables it used. They arrive here as a [`TemplateContext`] instead of
//! placeholders baked into source text.
//!
//! Everything else the hook needs (API endpoint, remote name, branch, commit
//! message) lives in [`Settings`], which can be overridden from a TOML file:
//!
//! ```toml
//! [template]
//! project_name = "Churn Model"
//! repo_name = "churn-model"
//! description = "Customer churn prediction"
//!
//! [github]
//! api_url = "https://api.github.com/user/repos"
//!
//! [git]
//! branch = "main"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ml_bootstrap::config::Settings;
//! use std::path::Path;
//!
//! let settings = Settings::load_or_default(Some(Path::new("bootstrap.toml")))?;
//! println!("Repository: {}", settings.template.repo_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use internal::{GitHubSection, GitSettings, Settings, TemplateContext};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = ".ml-bootstrap.toml";

impl Settings {
    /// Load settings from `path` if given, else from [`DEFAULT_CONFIG_FILE`]
    /// in the current directory, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => internal::load(p),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    internal::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
