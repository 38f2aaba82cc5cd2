//! Conversion of CLI errors into `miette` reports.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert a [`CliError`] into a report for `main`.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a [`BuildError`] into a report, keeping the hint on its own line.
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::BundlerFailed { target, stderr } => miette::miette!(
            help = "Rerun with --verbose to see the bundler command line",
            "Error while creating {} bundle:\n{}",
            target,
            stderr
        ),
        BuildError::InstallFailed { dependency, stderr } => miette::miette!(
            help = "Run the install manually and retry the build",
            "Failed to install {}:\n{}",
            dependency,
            stderr
        ),
        BuildError::ResolutionFailed {
            module,
            importer,
            hint,
        } => miette::miette!(
            help = hint,
            "Unable to import: {}\nimporter: {}",
            module,
            importer
        ),
        BuildError::MissingFile { path, hint } => {
            miette::miette!(help = hint, "\"{}\" not found", path.display())
        }
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_report() {
        let report = build_error_to_miette(BuildError::MissingFile {
            path: PathBuf::from("settings.json"),
            hint: "Create it".to_string(),
        });
        assert_eq!(report.to_string(), "\"settings.json\" not found");
    }

    #[test]
    fn test_bundler_report_keeps_stderr() {
        let report = cli_error_to_miette(CliError::Build(BuildError::BundlerFailed {
            target: "ES6".to_string(),
            stderr: "[!] Error: Could not resolve entry module".to_string(),
        }));
        let msg = report.to_string();
        assert!(msg.starts_with("Error while creating ES6 bundle:"));
        assert!(msg.contains("Could not resolve entry module"));
    }

    #[test]
    fn test_other_errors_use_display() {
        let report = cli_error_to_miette(CliError::InvalidArgument("--es6 and --es5".into()));
        assert_eq!(report.to_string(), "Invalid argument: --es6 and --es5");
    }
}
