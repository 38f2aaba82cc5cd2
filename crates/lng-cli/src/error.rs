//! Error handling for the lng CLI.
//!
//! Commands return [`CliError`]. Library failures from `lng-build` are
//! sorted into [`BuildError`] variants that carry a hint, configuration
//! problems into [`ConfigError`]. `main` turns whatever comes out into a
//! `miette` report.
//!
//! # Example
//!
//! ```rust,no_run
//! use lng_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Pass --config <FILE> to use another location")
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::{build_error_to_miette, cli_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures of a build step
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with `--config` doesn't exist
    #[error("Config file not found: {}\n\nHint: Create lng.config.json in the project root or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Config file fails JSON schema validation
    #[error("Schema validation failed:\n{errors}\n\nHint: Run 'lng check' after fixing the listed fields")]
    ValidationFailed {
        /// Formatted validation error messages
        errors: String,
    },

    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField { field: String, hint: String },

    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

/// Build step errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A file the app must provide is missing
    #[error("\"{}\" not found\n\nHint: {hint}", .path.display())]
    MissingFile { path: PathBuf, hint: String },

    /// A project JSON file could not be parsed
    #[error("Invalid JSON in {}: {error}", .path.display())]
    InvalidJson { path: PathBuf, error: String },

    /// The bundler exited with an error
    #[error("Error while creating {target} bundle: {stderr}\n\nHint: Rerun with --verbose to see the bundler command line")]
    BundlerFailed { target: String, stderr: String },

    /// Installing the relocated SDK failed
    #[error("Failed to install {dependency}: {stderr}\n\nHint: Run the install manually and retry the build")]
    InstallFailed { dependency: String, stderr: String },

    /// An aliased import did not resolve to a file
    #[error("Unable to import: {module}\nimporter: {importer}\n\nHint: {hint}")]
    ResolutionFailed {
        module: String,
        importer: String,
        hint: String,
    },

    /// Filesystem failure inside a build step
    #[error("{0}")]
    Filesystem(String),
}

impl From<lng_build::Error> for CliError {
    fn from(err: lng_build::Error) -> Self {
        use lng_build::Error;

        let build = match err {
            Error::NotFound(path) => BuildError::MissingFile {
                hint: missing_file_hint(&path),
                path,
            },
            Error::Runtime(lng_build::RuntimeError::FileNotFound(path)) => {
                BuildError::MissingFile {
                    hint: missing_file_hint(&path),
                    path,
                }
            }
            Error::Json { path, source } => BuildError::InvalidJson {
                path,
                error: source.to_string(),
            },
            Error::Bundler { target, stderr } => BuildError::BundlerFailed {
                target: target.to_string(),
                stderr,
            },
            Error::Install { dependency, stderr } => {
                BuildError::InstallFailed { dependency, stderr }
            }
            Error::Unresolved { path, importer } => BuildError::ResolutionFailed {
                module: path,
                importer,
                hint: "Check the alias entries in lng.config.json".to_string(),
            },
            Error::InvalidPattern { pattern, source } => {
                return ConfigError::InvalidValue {
                    field: "alias".to_string(),
                    value: pattern,
                    hint: source.to_string(),
                }
                .into();
            }
            Error::Runtime(e) => BuildError::Filesystem(e.to_string()),
            Error::Io(e) => return CliError::Io(e),
        };
        build.into()
    }
}

fn missing_file_hint(path: &std::path::Path) -> String {
    match path.file_name().and_then(|n| n.to_str()) {
        Some("metadata.json") => "Every app needs a metadata.json with an identifier".to_string(),
        Some("settings.json") => "Create settings.json with appSettings and platformSettings".to_string(),
        Some("package.json") => "Run the command from the app root or pass --cwd".to_string(),
        _ => "Check that the file exists relative to the project root".to_string(),
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}
