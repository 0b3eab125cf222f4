//! Create the GitHub repository without touching the local project

use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;

use ml_bootstrap::config::Settings;
use ml_bootstrap::forge::{
    create_remote, GitHubCreator, RepoCreator, RepoDescriptor, Visibility, NO_TOKEN_MESSAGE,
};

use super::load_settings;
use crate::TemplateArgs;

pub fn execute(
    config: Option<&Path>,
    args: &TemplateArgs,
    private: bool,
    token: Option<&str>,
) -> Result<()> {
    let settings = load_settings(config, args)?;
    let creator = GitHubCreator::new(&settings.github.api_url)?;

    create(&creator, &settings, private, token, &mut io::stdout())
}

/// A missing or blank token is a skip, not a failure
fn create(
    creator: &dyn RepoCreator,
    settings: &Settings,
    private: bool,
    token: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        writeln!(out, "{}", NO_TOKEN_MESSAGE)?;
        return Ok(());
    };

    let ctx = &settings.template;
    let visibility = if private {
        Visibility::Private
    } else {
        Visibility::Public
    };
    let repo = RepoDescriptor::new(&ctx.repo_name, &ctx.description, visibility);

    writeln!(out, "Создание репозитория в GitHub...")?;
    match create_remote(creator, &repo, Some(token), out) {
        Some(remote) => {
            writeln!(out, "Репозиторий успешно создан: {}", remote.url)?;
            Ok(())
        }
        None => bail!("Не удалось создать репозиторий в GitHub."),
    }
}
