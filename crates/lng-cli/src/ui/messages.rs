//! Status lines printed around the build steps, on stderr.

use owo_colors::OwoColorize;
use std::fmt::Display;

fn line(marker: impl Display, message: impl Display) {
    eprintln!("{} {}", marker, message);
}

/// Final outcome of a command, e.g. `✓ Build complete in 1.2s`.
pub fn success(message: &str) {
    line("✓".green().bold(), message);
}

/// Side effects worth reporting, such as new `.gitignore` entries.
pub fn info(message: &str) {
    line("ℹ".blue().bold(), message);
}

/// Something the app should fix that did not stop the command.
pub fn warning(message: &str) {
    line("⚠".yellow().bold(), message.yellow());
}
