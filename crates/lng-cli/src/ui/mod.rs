//! Terminal output: spinners, status lines and the build summary.
//!
//! Everything here writes to stderr so stdout stays usable for command
//! results such as `lng resolve`.
//!
//! # Examples
//!
//! ```no_run
//! use lng_cli::ui;
//!
//! ui::init_colors();
//!
//! let spinner = ui::Spinner::new("Copying static folder");
//! spinner.finish("Copied static folder");
//!
//! ui::success("Build complete");
//! ui::warning("No .gitignore found");
//! ```

mod format;
mod messages;
mod spinner;

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{info, success, warning};
pub use spinner::Spinner;

/// Check if color output should be enabled.
///
/// `NO_COLOR` disables colors and takes precedence over `FORCE_COLOR`.
/// Otherwise colors follow whether stderr is a terminal.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Apply the color decision to spinner styling.
///
/// Should be called early in `main`.
pub fn init_colors() {
    console::set_colors_enabled_stderr(should_use_color());
}
