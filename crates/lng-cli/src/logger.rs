//! Logging setup for the lng CLI.
//!
//! Events come from `tracing` in both `lng-build` and this crate. The
//! subscriber installed here decides how much of that reaches the terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use lng_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting build");
//! debug!(target = "es5", "running bundler");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "lng=debug,lng_build=debug,lng_cli=debug";
/// Filter used with `--quiet`.
pub const QUIET_FILTER: &str = "lng=error,lng_build=error,lng_cli=error";
/// Filter used when neither flag nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "lng=info,lng_build=info,lng_cli=info";

/// Build the filter for the given verbosity flags.
///
/// The level is picked in this order:
/// 1. `--verbose`: DEBUG for lng crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for lng crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at startup, before anything logs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize the logger with a custom filter.
///
/// # Example
///
/// ```rust,no_run
/// use lng_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("lng_build=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // The global subscriber can only be installed once per process, so
    // these only exercise filter construction.

    #[test]
    fn test_verbose_filter_wins_over_quiet() {
        let filter = build_filter(true, true);
        assert!(filter.to_string().contains("lng_build=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("lng=error"));
    }

    #[test]
    #[serial]
    fn test_rust_log_is_respected() {
        std::env::set_var("RUST_LOG", "lng_cli=trace");
        let filter = build_filter(false, false);
        std::env::remove_var("RUST_LOG");
        assert!(filter.to_string().contains("lng_cli=trace"));
    }

    #[test]
    #[serial]
    fn test_default_filter() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(false, false);
        assert!(filter.to_string().contains("lng_build=info"));
    }
}
