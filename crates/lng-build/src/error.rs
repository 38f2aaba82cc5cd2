//! Error types for lng-build.

use crate::bundle::BundleTarget;
use crate::runtime::RuntimeError;
use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the build helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required project file does not exist.
    #[error("\"{}\" not found", .0.display())]
    NotFound(PathBuf),

    /// A JSON document could not be parsed.
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The bundler exited unsuccessfully or could not be started.
    #[error("Error while creating {target} bundle: {stderr}")]
    Bundler { target: BundleTarget, stderr: String },

    /// The package manager failed to install a dependency.
    #[error("Unable to install {dependency}: {stderr}")]
    Install { dependency: String, stderr: String },

    /// An aliased import did not resolve to a file.
    #[error("Unable to import: {path}\nimporter: {importer}")]
    Unresolved { path: String, importer: String },

    /// An alias pattern is not a valid regular expression.
    #[error("Invalid alias pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Filesystem error from the runtime.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// I/O error outside the runtime (child process spawning).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a missing-file soft failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Runtime(e) => e.is_not_found(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_quotes_file() {
        let err = Error::NotFound(PathBuf::from("metadata.json"));
        assert_eq!(err.to_string(), "\"metadata.json\" not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_runtime_not_found_is_soft() {
        let err: Error = RuntimeError::FileNotFound(PathBuf::from("settings.json")).into();
        assert!(err.is_not_found());

        let err: Error = RuntimeError::Io("disk on fire".into()).into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unresolved_mentions_importer() {
        let err = Error::Unresolved {
            path: "@/components/Button".to_string(),
            importer: "src/App.js".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unable to import: @/components/Button"));
        assert!(msg.contains("importer: src/App.js"));
    }
}
