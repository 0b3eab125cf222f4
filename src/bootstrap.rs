//! Post-generation flow: ask, create the GitHub repository, push.
//!
//! ```text
//! start -> consent? --no--> Declined
//!            |yes
//!          token? --empty--> NoToken
//!            |
//!          private?
//!            |
//!          create remote --fail--> RemoteFailed
//!            |
//!          init/add/commit/remote/push --fail--> PushFailed
//!            |
//!          Pushed
//! ```
//!
//! Every branch ends the run. Nothing is retried.

use anyhow::Result;
use std::io::{self, Write};

use crate::config::{Settings, TemplateContext};
use crate::forge::{create_remote, RepoCreator, RepoDescriptor, Visibility, NO_TOKEN_MESSAGE};
use crate::git::{initialize_and_push, GitError, GitRunner, GitStep};
use crate::prompt::{is_affirmative, Prompter};

pub const CONSENT_PROMPT: &str = "Хотите создать репозиторий в GitHub? (y/N): ";
pub const TOKEN_PROMPT: &str = "Введите ваш GitHub токен (или оставьте пустым для пропуска): ";
pub const VISIBILITY_PROMPT: &str = "Сделать репозиторий приватным? (y/N): ";

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Operator did not want a GitHub repository
    Declined,
    /// No token entered
    NoToken,
    /// The API call failed; nothing was done locally
    RemoteFailed,
    /// Repository created and code pushed
    Pushed { url: String },
    /// Repository created, local bootstrap stopped at `step`
    PushFailed { url: String, step: GitStep },
}

/// First line of every hook run, printed before the project directory is looked up
pub fn write_banner(out: &mut dyn Write, ctx: &TemplateContext) -> io::Result<()> {
    writeln!(out, "Настройка проекта '{}'...", ctx.project_name)
}

/// One run of the hook, wired to its collaborators.
pub struct Bootstrap<'a> {
    prompter: &'a mut dyn Prompter,
    creator: &'a dyn RepoCreator,
    git: &'a dyn GitRunner,
    out: &'a mut dyn Write,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        prompter: &'a mut dyn Prompter,
        creator: &'a dyn RepoCreator,
        git: &'a dyn GitRunner,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            prompter,
            creator,
            git,
            out,
        }
    }

    /// Drive the flow to completion.
    ///
    /// Failures of the API or of git are reported on `out` and folded into
    /// the [`Outcome`]. `Err` is reserved for console I/O problems.
    pub fn run(self, settings: &Settings) -> Result<Outcome> {
        let ctx = &settings.template;

        let consent = self.prompter.ask(CONSENT_PROMPT)?;
        if !is_affirmative(&consent) {
            writeln!(self.out, "Создание репозитория в GitHub пропущено.")?;
            return Ok(Outcome::Declined);
        }

        let token = self.prompter.ask_secret(TOKEN_PROMPT)?;
        if token.is_empty() {
            writeln!(self.out, "{}", NO_TOKEN_MESSAGE)?;
            return Ok(Outcome::NoToken);
        }

        let visibility = if is_affirmative(&self.prompter.ask(VISIBILITY_PROMPT)?) {
            Visibility::Private
        } else {
            Visibility::Public
        };

        let repo = RepoDescriptor::new(&ctx.repo_name, &ctx.description, visibility);

        writeln!(self.out, "Создание репозитория в GitHub...")?;
        let remote = match create_remote(self.creator, &repo, Some(token.as_str()), self.out) {
            Some(remote) => remote,
            None => {
                writeln!(self.out, "Не удалось создать репозиторий в GitHub.")?;
                return Ok(Outcome::RemoteFailed);
            }
        };
        writeln!(self.out, "Репозиторий успешно создан: {}", remote.url)?;

        match initialize_and_push(self.git, &remote.url, Some(token.as_str()), &settings.git) {
            Ok(()) => {
                writeln!(
                    self.out,
                    "Репозиторий успешно инициализирован и код загружен в GitHub."
                )?;
                Ok(Outcome::Pushed { url: remote.url })
            }
            Err(e) => {
                let step = e.step();
                match &e {
                    GitError::StepFailed { .. } => {
                        writeln!(self.out, "Ошибка при работе с git: {}", e)?
                    }
                    GitError::Spawn { .. } => writeln!(self.out, "Неожиданная ошибка: {}", e)?,
                }
                Ok(Outcome::PushFailed {
                    url: remote.url,
                    step,
                })
            }
        }
    }
}
