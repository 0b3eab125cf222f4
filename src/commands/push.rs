//! Push the generated project to an existing repository

use anyhow::{bail, Context, Result};
use std::path::Path;

use ml_bootstrap::git::{initialize_and_push, is_git_available, SystemGit};

use super::{load_settings, missing_dir_message, project_dir};
use crate::TemplateArgs;

pub fn execute(
    config: Option<&Path>,
    args: &TemplateArgs,
    url: &str,
    token: Option<&str>,
) -> Result<()> {
    let settings = load_settings(config, args)?;

    let Some(dir) = project_dir(args, &settings)? else {
        bail!("{}", missing_dir_message(args, &settings));
    };

    if !is_git_available() {
        bail!("git not found on PATH");
    }

    let git = SystemGit::new(&dir);
    initialize_and_push(&git, url, token, &settings.git).context("Ошибка при работе с git")?;

    println!("Репозиторий успешно инициализирован и код загружен в GitHub.");
    Ok(())
}
