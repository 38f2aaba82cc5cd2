use std::path::PathBuf;

use crate::config::types::Target;

/// Config file looked up in the project root.
pub const CONFIG_FILE: &str = "lng.config.json";
/// Prefix of environment overrides, e.g. `LNG_BUILD_FOLDER`.
pub const ENV_PREFIX: &str = "LNG_";

pub const DEFAULT_BUILD_FOLDER: &str = "build";
pub const DEFAULT_BUNDLER_CONFIG_DIR: &str = "configs";

pub fn default_build_folder() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_FOLDER)
}

pub fn default_entry() -> PathBuf {
    PathBuf::from("src/index.js")
}

pub fn default_targets() -> Vec<Target> {
    vec![Target::Es6, Target::Es5]
}

pub fn default_sourcemaps() -> bool {
    true
}

pub fn default_bundler() -> PathBuf {
    PathBuf::from("node_modules/.bin/rollup")
}

pub fn default_bundler_config_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BUNDLER_CONFIG_DIR)
}

pub fn default_package_manager() -> String {
    "npm".to_string()
}
