//! Operator prompts
//!
//! The hook asks three questions: consent, token, visibility. They go through
//! [`Prompter`] so the flow can run against canned answers.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Answers accepted as "yes" (English and Russian)
pub const AFFIRMATIVE: [&str; 4] = ["y", "yes", "д", "да"];

/// True when `answer` is one of [`AFFIRMATIVE`], ignoring case and surrounding space.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Source of operator answers.
pub trait Prompter {
    /// Ask a question and return the trimmed answer. End of input is an empty answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Like [`Prompter::ask`], without echoing the answer when possible.
    fn ask_secret(&mut self, question: &str) -> Result<String> {
        self.ask(question)
    }
}

/// Interactive prompts on stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;

        Ok(line.trim().to_string())
    }

    fn ask_secret(&mut self, question: &str) -> Result<String> {
        let term = console::Term::stdout();
        if !term.is_term() {
            return self.ask(question);
        }

        term.write_str(question)?;
        let line = term
            .read_secure_line()
            .context("Failed to read token from terminal")?;

        Ok(line.trim().to_string())
    }
}

/// Canned answers, handed out in order. Runs dry into empty answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .unwrap_or_default())
    }
}
