// ABOUTME: Confirmation and notification contract used by mutating operations
// ABOUTME: Terminal implementation uses dialoguer; --yes skips confirmation

use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Outcome message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Asks the user before destructive actions and reports outcomes.
pub trait Prompter {
    fn confirm(&self, message: &str) -> Result<bool>;
    fn notify(&self, notice: Notice);
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }

    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(msg) => println!("✓ {}", msg),
            Notice::Error(msg) => eprintln!("✗ {}", msg),
        }
    }
}

/// Answers every confirmation with yes. Used for `--yes` and non-interactive runs.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }

    fn notify(&self, notice: Notice) {
        TerminalPrompter.notify(notice)
    }
}
