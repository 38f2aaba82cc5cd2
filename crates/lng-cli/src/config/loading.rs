use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::{Path, PathBuf};

use crate::config::{
    default_build_folder, default_bundler, default_bundler_config_dir, default_entry,
    default_package_manager, default_sourcemaps, default_targets, CliOverrides, LngConfig,
    CONFIG_FILE, ENV_PREFIX,
};
use crate::error::{ConfigError, Result};

/// Keys accepted from `LNG_*` variables. Other `LNG_` variables belong to
/// the app (`LNG_SETTINGS_ENV`, ...) and are not configuration.
const ENV_KEYS: [&str; 7] = [
    "build_folder",
    "entry",
    "targets",
    "sourcemaps",
    "bundler",
    "bundler_config_dir",
    "package_manager",
];

impl LngConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `config_path` is resolved against `root`. An explicit path must
    /// exist; without one, `lng.config.json` in `root` is used if present.
    pub fn load(root: &Path, config_path: Option<&Path>, overrides: &CliOverrides) -> Result<Self> {
        let mut sources = Figment::new();

        if let Some(path) = Self::config_file(root, config_path)? {
            tracing::debug!(path = %path.display(), "loading config file");
            sources = sources.merge(Json::file(path));
        }

        sources = sources.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| ENV_KEYS.iter().any(|k| key.as_str().eq_ignore_ascii_case(k))),
        );

        sources = sources.merge(Serialized::defaults(overrides));
        let build_folder_set = sources.contains("build_folder");

        let mut config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default_config()))
            .merge(sources)
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: format!("Check {} syntax and field types", CONFIG_FILE),
            })?;
        config.build_folder_set = build_folder_set;
        Ok(config)
    }

    /// Locate the config file to merge, if any.
    pub fn config_file(root: &Path, config_path: Option<&Path>) -> Result<Option<PathBuf>> {
        match config_path {
            Some(path) => {
                let path = crate::commands::utils::resolve_path(path, root);
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path).into())
                }
            }
            None => {
                let path = root.join(CONFIG_FILE);
                Ok(path.is_file().then_some(path))
            }
        }
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        Self {
            build_folder: default_build_folder(),
            entry: default_entry(),
            targets: default_targets(),
            sourcemaps: default_sourcemaps(),
            bundler: default_bundler(),
            bundler_config_dir: default_bundler_config_dir(),
            package_manager: default_package_manager(),
            copy_src: false,
            alias: Vec::new(),
            cwd: None,
            build_folder_set: false,
        }
    }
}
