use lng_build::AliasEntry;
use std::path::{Component, Path, PathBuf};

use crate::config::LngConfig;
use crate::error::{ConfigError, Result};

impl LngConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(ConfigError::MissingField {
                field: "targets".to_string(),
                hint: "List at least one of \"es6\" or \"es5\"".to_string(),
            }
            .into());
        }

        if self.build_folder.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "build_folder".to_string(),
                value: String::new(),
                hint: "The build folder is removed before each build, it cannot be empty".to_string(),
            }
            .into());
        }

        if self.package_manager.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "package_manager".to_string(),
                hint: "Use \"npm\" unless the app is managed by another tool".to_string(),
            }
            .into());
        }

        self.alias_entries()?;
        Ok(())
    }

    /// Reject a build folder that is `root` or one of its ancestors.
    ///
    /// The build folder is removed before each build, so such a folder
    /// would take the app with it.
    pub fn validate_build_folder(&self, root: &Path) -> Result<()> {
        let root = root.canonicalize().unwrap_or_else(|_| normalize(root));
        let joined = root.join(&self.build_folder);
        let folder = joined.canonicalize().unwrap_or_else(|_| normalize(&joined));

        if root.starts_with(&folder) {
            return Err(ConfigError::InvalidValue {
                field: "build_folder".to_string(),
                value: self.build_folder.display().to_string(),
                hint: "The build folder is removed before each build, it cannot be the project root or contain it".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Compile the configured aliases.
    pub fn alias_entries(&self) -> Result<Vec<AliasEntry>> {
        self.alias
            .iter()
            .map(|alias| alias.to_entry().map_err(Into::into))
            .collect()
    }
}

/// Lexically resolve `.` and `..` components.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Validate raw config file content against the generated JSON schema.
///
/// Returns every violation, formatted one per line.
pub fn validate_against_schema(instance: &serde_json::Value) -> Result<()> {
    let schema = LngConfig::json_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::ValidationFailed {
        errors: format!("invalid schema: {}", e),
    })?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("  - {}", e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            errors: errors.join("\n"),
        }
        .into())
    }
}
