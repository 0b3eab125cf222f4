//! Where the generated project lives.
//!
//! The template engine writes the project into `<repo_name>/` and then runs
//! the hook either from the parent directory or from inside the project.
//! Both layouts resolve to the same directory here.
//!
//! ```text
//! parent/                 <- cwd, case 1
//! └── churn-model/        <- cwd, case 2
//!     ├── setup.py
//!     └── src/data/make_dataset.py
//! ```

use std::path::{Path, PathBuf};

/// Expand `~` in a user-supplied path
pub fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Locate the generated project relative to `base`.
///
/// Tries `base/<repo_name>` first, then `base` itself when its last
/// component is `repo_name`. Returns `None` when neither exists.
pub fn resolve_project_dir(base: &Path, repo_name: &str) -> Option<PathBuf> {
    let nested = base.join(repo_name);
    if nested.is_dir() {
        return Some(nested);
    }

    let is_inside = base
        .file_name()
        .map(|name| name == repo_name)
        .unwrap_or(false);
    if is_inside && base.is_dir() {
        return Some(base.to_path_buf());
    }

    None
}
