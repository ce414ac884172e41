// ABOUTME: Command implementations for the jobtrends CLI
// ABOUTME: Each command fetches through RemoteClient and renders to stdout

pub mod analytics;
pub mod dashboard;
pub mod jobs;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub use analytics::{summary, trends};
pub use dashboard::{dashboard, health};
pub use jobs::{create, delete, edit, list, show, DraftArgs, ListArgs};

/// Spinner shown while a request is in flight. Hidden when `quiet`.
pub(crate) fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
