pub mod create;
pub mod hook;
pub mod push;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ml_bootstrap::config::Settings;
use ml_bootstrap::paths;

use crate::TemplateArgs;

/// Settings file plus command-line overrides
pub fn load_settings(config: Option<&Path>, args: &TemplateArgs) -> Result<Settings> {
    let config = config.map(|p| paths::expand(&p.to_string_lossy()));
    let mut settings = Settings::load_or_default(config.as_deref())?;

    let ctx = &mut settings.template;
    let overrides = [
        (&mut ctx.project_name, &args.project_name),
        (&mut ctx.repo_name, &args.repo_name),
        (&mut ctx.description, &args.description),
        (&mut ctx.author_name, &args.author_name),
        (&mut ctx.email, &args.email),
        (&mut ctx.python_version, &args.python_version),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v.clone();
        }
    }

    tracing::debug!(repo = %settings.template.repo_name, "settings loaded");
    Ok(settings)
}

/// `--project-dir` if given, else the directory named after the repository
pub fn project_dir(args: &TemplateArgs, settings: &Settings) -> Result<Option<PathBuf>> {
    if let Some(dir) = &args.project_dir {
        let dir = paths::expand(dir);
        return Ok(dir.is_dir().then_some(dir));
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(paths::resolve_project_dir(&cwd, &settings.template.repo_name))
}

/// Message for a project directory that does not exist
pub fn missing_dir_message(args: &TemplateArgs, settings: &Settings) -> String {
    let shown = args
        .project_dir
        .clone()
        .unwrap_or_else(|| settings.template.repo_name.clone());
    format!("Директория проекта {} не найдена!", shown)
}
