//! Post-generation hook
//!
//! Called by the template engine after it has written the project to disk.
//! Every failure ends in a printed line and a zero exit status, since a failing
//! hook makes the engine discard the generated project.

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use ml_bootstrap::bootstrap::{write_banner, Bootstrap, Outcome};
use ml_bootstrap::forge::GitHubCreator;
use ml_bootstrap::git::{is_git_available, SystemGit};
use ml_bootstrap::prompt::ConsolePrompter;

use super::{load_settings, missing_dir_message, project_dir};
use crate::TemplateArgs;

pub fn execute(config: Option<&Path>, args: &TemplateArgs) -> Result<()> {
    execute_to(config, args, &mut io::stdout())
}

fn execute_to(config: Option<&Path>, args: &TemplateArgs, out: &mut dyn Write) -> Result<()> {
    if let Err(e) = run(config, args, out) {
        writeln!(out, "Неожиданная ошибка: {:#}", e)?;
    }
    Ok(())
}

fn run(config: Option<&Path>, args: &TemplateArgs, out: &mut dyn Write) -> Result<()> {
    let settings = load_settings(config, args)?;
    write_banner(out, &settings.template)?;

    let Some(dir) = project_dir(args, &settings)? else {
        writeln!(out, "{}", missing_dir_message(args, &settings))?;
        return Ok(());
    };

    if !is_git_available() {
        tracing::warn!("git not found on PATH; local bootstrap will fail");
    }

    let mut prompter = ConsolePrompter;
    let creator = GitHubCreator::new(&settings.github.api_url)?;
    let git = SystemGit::new(&dir);

    let outcome = Bootstrap::new(&mut prompter, &creator, &git, out).run(&settings)?;

    match &outcome {
        Outcome::PushFailed { url, step } => {
            tracing::debug!(%url, %step, dir = %dir.display(), "local bootstrap incomplete")
        }
        other => tracing::debug!(outcome = ?other, "hook finished"),
    }

    Ok(())
}
