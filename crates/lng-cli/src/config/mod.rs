//! Configuration with multi-source loading.
//!
//! Merges defaults, `lng.config.json`, `LNG_*` environment variables and
//! CLI flags. Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use conversions::CliOverrides;
pub use defaults::*;
pub use types::*;
pub use validation::validate_against_schema;

/// Build configuration, loaded from lng.config.json, `LNG_*` and CLI args.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LngConfig {
    /// Output folder, relative to the project root
    #[serde(default = "default_build_folder")]
    pub build_folder: PathBuf,

    /// Entry module handed to the bundler
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Bundles to create
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// Generate source maps
    #[serde(default = "default_sourcemaps")]
    pub sourcemaps: bool,

    /// Bundler executable, a bare name is looked up on PATH
    #[serde(default = "default_bundler")]
    pub bundler: PathBuf,

    /// Directory holding the per-target bundler configs
    #[serde(default = "default_bundler_config_dir")]
    pub bundler_config_dir: PathBuf,

    /// Package manager used to reinstall the SDK
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    /// Copy `src` into the build folder
    #[serde(default)]
    pub copy_src: bool,

    /// Import aliases, first matching filter wins. Only `lng resolve`
    /// applies them; the build leaves import resolution to the bundler's
    /// own config.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<AliasConfig>,

    /// Working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Whether any source set `build_folder`
    #[serde(skip)]
    pub build_folder_set: bool,
}

impl LngConfig {
    /// Generate JSON Schema for lng.config.json.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(LngConfig)).unwrap_or_default()
    }

    /// Build folder as it should appear in `.gitignore`.
    ///
    /// `None` while the folder is left at its default, so the stock `dist`
    /// and `build` entries are kept. A folder set explicitly replaces both,
    /// even when it is `build`.
    pub fn gitignore_folder(&self) -> Option<String> {
        let folder = validation::normalize(&self.build_folder);
        (self.build_folder_set || folder != Path::new(DEFAULT_BUILD_FOLDER))
            .then(|| folder.to_string_lossy().into_owned())
    }

    /// Example lng.config.json content.
    pub fn example_config() -> String {
        serde_json::to_string_pretty(&Self {
            alias: vec![AliasConfig {
                filter: "^@/".to_string(),
                find: "^@".to_string(),
                replace: "./src".to_string(),
            }],
            ..Self::default_config()
        })
        .unwrap_or_default()
    }
}
