//! Shared helpers for command implementations.

use crate::config::{CliOverrides, LngConfig};
use crate::error::{CliError, Result};
use crate::ui;
use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd`. Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Walk up from `start_dir` to the nearest directory containing a
/// `package.json`.
pub fn find_package_json(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find(|dir| dir.join("package.json").is_file())
        .map(Path::to_path_buf)
}

/// Resolve the app root.
///
/// Resolution priority:
/// 1. Explicit `--cwd` flag, which must be an existing directory
/// 2. Nearest package.json walking up from the process cwd
/// 3. The process cwd, with a warning
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let current_dir = get_cwd()?;

    if let Some(cwd_path) = explicit_cwd {
        let absolute = resolve_path(cwd_path, &current_dir);
        if !absolute.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Specified --cwd is not a directory: {}",
                absolute.display()
            )));
        }
        tracing::debug!(root = %absolute.display(), "project root from --cwd");
        return Ok(absolute);
    }

    if let Some(package_root) = find_package_json(&current_dir) {
        tracing::debug!(root = %package_root.display(), "project root from package.json");
        return Ok(package_root);
    }

    ui::warning(&format!(
        "No package.json found. Using current directory: {}",
        current_dir.display()
    ));
    Ok(current_dir)
}

/// Resolve the project root and load its configuration.
pub fn load_project_config(
    explicit_cwd: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<(PathBuf, LngConfig)> {
    let root = resolve_project_root(explicit_cwd)?;
    load_config_at(root, explicit_cwd.is_none(), config_path, overrides)
}

/// Load and validate the configuration found at `root`.
///
/// With `follow_config_cwd`, a `cwd` set in the config moves the root
/// relative to where the file was found.
pub fn load_config_at(
    root: PathBuf,
    follow_config_cwd: bool,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<(PathBuf, LngConfig)> {
    let config = LngConfig::load(&root, config_path, overrides)?;
    config.validate()?;

    let root = match &config.cwd {
        Some(cwd) if follow_config_cwd => resolve_path(cwd, &root),
        _ => root,
    };
    config.validate_build_folder(&root)?;
    Ok((root, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/apps/demo");
        assert_eq!(
            resolve_path(Path::new("build"), cwd),
            PathBuf::from("/apps/demo/build")
        );
        assert_eq!(
            resolve_path(Path::new("/tmp/out"), cwd),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_find_package_json_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let nested = dir.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_package_json(&nested), Some(dir.path().to_path_buf()));
    }

    #[test]
    #[serial]
    fn test_config_cwd_moves_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("lng.config.json"), r#"{ "cwd": "app" }"#).unwrap();

        let (root, _) = load_config_at(
            dir.path().to_path_buf(),
            true,
            None,
            &CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(root, dir.path().join("app"));

        let (root, _) = load_config_at(
            dir.path().to_path_buf(),
            false,
            None,
            &CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(root, dir.path().to_path_buf());
    }

    #[test]
    fn test_explicit_cwd_must_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        assert!(resolve_project_root(Some(&file)).is_err());
        assert_eq!(
            resolve_project_root(Some(dir.path())).unwrap(),
            dir.path().to_path_buf()
        );
    }
}
