#[cfg(test)]
mod tests {
    use crate::cli::BuildArgs;
    use crate::config::*;
    use serial_test::serial;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn clear_env() {
        for key in ["LNG_BUILD_FOLDER", "LNG_SOURCEMAPS", "LNG_TARGETS", "LNG_SETTINGS_ENV"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        clear_env();
        let dir = TempDir::new().unwrap();

        let config = LngConfig::load(dir.path(), None, &CliOverrides::default()).unwrap();

        assert_eq!(config.build_folder, PathBuf::from("build"));
        assert_eq!(config.entry, PathBuf::from("src/index.js"));
        assert_eq!(config.targets, vec![Target::Es6, Target::Es5]);
        assert!(config.sourcemaps);
        assert_eq!(config.bundler, PathBuf::from("node_modules/.bin/rollup"));
        assert_eq!(config.bundler_config_dir, PathBuf::from("configs"));
        assert_eq!(config.package_manager, "npm");
        assert!(!config.copy_src);
        assert!(config.alias.is_empty());
    }

    #[test]
    #[serial]
    fn test_config_file_env_and_cli_priority() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("lng.config.json"),
            r#"{
                "build_folder": "from-file",
                "sourcemaps": false,
                "alias": [{ "filter": "^@/", "find": "^@", "replace": "./src" }]
            }"#,
        )
        .unwrap();

        let config = LngConfig::load(dir.path(), None, &CliOverrides::default()).unwrap();
        assert_eq!(config.build_folder, PathBuf::from("from-file"));
        assert!(!config.sourcemaps);
        assert_eq!(config.alias.len(), 1);

        std::env::set_var("LNG_BUILD_FOLDER", "from-env");
        let config = LngConfig::load(dir.path(), None, &CliOverrides::default()).unwrap();
        assert_eq!(config.build_folder, PathBuf::from("from-env"));

        let overrides = CliOverrides {
            build_folder: Some(PathBuf::from("from-cli")),
            ..CliOverrides::default()
        };
        let config = LngConfig::load(dir.path(), None, &overrides).unwrap();
        assert_eq!(config.build_folder, PathBuf::from("from-cli"));
        // untouched by the CLI layer
        assert!(!config.sourcemaps);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unrelated_lng_variables_are_ignored() {
        clear_env();
        std::env::set_var("LNG_SETTINGS_ENV", "dev");
        let dir = TempDir::new().unwrap();

        let result = LngConfig::load(dir.path(), None, &CliOverrides::default());

        clear_env();
        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn test_explicit_config_must_exist() {
        clear_env();
        let dir = TempDir::new().unwrap();

        let err = LngConfig::load(
            dir.path(),
            Some(Path::new("custom.json")),
            &CliOverrides::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Config file not found"));
        assert!(err.to_string().contains("custom.json"));
    }

    #[test]
    #[serial]
    fn test_unknown_field_is_rejected() {
        clear_env();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lng.config.json"), r#"{ "outDir": "dist" }"#).unwrap();

        assert!(LngConfig::load(dir.path(), None, &CliOverrides::default()).is_err());
    }

    #[test]
    fn test_overrides_from_build_args() {
        let args = BuildArgs {
            es5: true,
            no_sourcemaps: true,
            out_dir: Some(PathBuf::from("dist")),
            ..BuildArgs::default()
        };
        let overrides = CliOverrides::from(&args);
        assert_eq!(overrides.targets, Some(vec![Target::Es5]));
        assert_eq!(overrides.sourcemaps, Some(false));
        assert_eq!(overrides.copy_src, None);
        assert_eq!(overrides.build_folder, Some(PathBuf::from("dist")));

        let json = serde_json::to_value(CliOverrides::from(&BuildArgs::default())).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_validation() {
        assert!(LngConfig::default_config().validate().is_ok());

        assert!(LngConfig {
            targets: vec![],
            ..LngConfig::default_config()
        }
        .validate()
        .is_err());

        assert!(LngConfig {
            build_folder: PathBuf::new(),
            ..LngConfig::default_config()
        }
        .validate()
        .is_err());

        assert!(LngConfig {
            alias: vec![AliasConfig {
                filter: "(".to_string(),
                find: "x".to_string(),
                replace: "y".to_string(),
            }],
            ..LngConfig::default_config()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_build_folder_cannot_hold_the_project() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app");
        fs::create_dir_all(&root).unwrap();

        for folder in [".", "..", "./", "src/..", "/"] {
            let config = LngConfig {
                build_folder: PathBuf::from(folder),
                ..LngConfig::default_config()
            };
            let err = config.validate_build_folder(&root).unwrap_err();
            assert!(
                err.to_string().contains("build_folder"),
                "{folder} accepted: {err}"
            );
        }

        for folder in ["build", "./out", "dist/app", "../app-build"] {
            let config = LngConfig {
                build_folder: PathBuf::from(folder),
                ..LngConfig::default_config()
            };
            assert!(config.validate_build_folder(&root).is_ok(), "{folder} rejected");
        }
    }

    #[test]
    fn test_gitignore_folder() {
        assert_eq!(LngConfig::default_config().gitignore_folder(), None);

        let config = LngConfig {
            build_folder: PathBuf::from("out"),
            ..LngConfig::default_config()
        };
        assert_eq!(config.gitignore_folder().as_deref(), Some("out"));

        let config = LngConfig {
            build_folder: PathBuf::from("./build/"),
            ..LngConfig::default_config()
        };
        assert_eq!(config.gitignore_folder(), None);

        let config = LngConfig {
            build_folder: PathBuf::from("./out"),
            ..LngConfig::default_config()
        };
        assert_eq!(config.gitignore_folder().as_deref(), Some("out"));
    }

    #[test]
    #[serial]
    fn test_explicit_default_build_folder_replaces_stock_entries() {
        clear_env();
        let dir = TempDir::new().unwrap();

        let config = LngConfig::load(dir.path(), None, &CliOverrides::default()).unwrap();
        assert!(!config.build_folder_set);
        assert_eq!(config.gitignore_folder(), None);

        std::env::set_var("LNG_BUILD_FOLDER", "build");
        let config = LngConfig::load(dir.path(), None, &CliOverrides::default());
        clear_env();

        let config = config.unwrap();
        assert!(config.build_folder_set);
        assert_eq!(config.gitignore_folder().as_deref(), Some("build"));
    }

    #[test]
    fn test_schema_validation() {
        let example: serde_json::Value =
            serde_json::from_str(&LngConfig::example_config()).unwrap();
        assert!(validate_against_schema(&example).is_ok());

        let bad = serde_json::json!({ "targets": ["es2020"], "sourcemaps": "yes" });
        let err = validate_against_schema(&bad).unwrap_err().to_string();
        assert!(err.contains("Schema validation failed"));
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let json = serde_json::to_value(LngConfig::default_config()).unwrap();
        assert!(json.get("build_folder").is_some());
        assert!(json.get("bundler_config_dir").is_some());
        assert_eq!(json["targets"], serde_json::json!(["es6", "es5"]));
        assert!(json.get("alias").is_none());
        assert!(json.get("cwd").is_none());
    }
}
