//! Check command implementation.
//!
//! Validates configuration and project files without building.

use lng_build::{dependency, metadata, Bundler, Project, Sdk};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::{validate_against_schema, CliOverrides, LngConfig, Target};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Validate lng.config.json against its schema, then load and validate
///    the merged configuration
/// 2. Read metadata.json and settings.json
/// 3. Detect the SDK and look for a legacy SDK reference
/// 4. Look for the bundler and its per-target configs
///
/// Problems the build tolerates are reported as warnings.
///
/// # Errors
///
/// Returns errors for invalid configuration or unreadable project files.
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let root = utils::resolve_project_root(args.cwd.as_deref())?;
    if let Some(path) = LngConfig::config_file(&root, args.config.as_deref())? {
        let content = std::fs::read_to_string(&path).with_path(&path)?;
        let raw: serde_json::Value = serde_json::from_str(&content)
            .with_hint(format!("{} is not valid JSON", path.display()))?;
        validate_against_schema(&raw)?;
    }

    let (root, config) = utils::load_config_at(
        root,
        args.cwd.is_none(),
        args.config.as_deref(),
        &CliOverrides::default(),
    )?;
    ui::success("Configuration is valid");

    let project = Project::native(&root);
    let warnings = check_project(&project, &config).await?;

    if warnings == 0 {
        ui::success("Project is ready to build");
    } else {
        ui::warning(&format!("Project can be built with {} warning(s)", warnings));
    }
    Ok(())
}

/// Report on project files. Returns the number of warnings printed.
pub async fn check_project(project: &Project, config: &LngConfig) -> Result<usize> {
    let mut warnings = 0;

    match metadata::read_metadata(project).await {
        Ok(meta) => {
            ui::success(&format!(
                "metadata.json: {} {} (bundle name {})",
                meta.identifier.as_deref().unwrap_or("<no identifier>"),
                meta.version.as_deref().unwrap_or("<no version>"),
                metadata::safe_app_id(&meta)
            ));
        }
        Err(e) if e.is_not_found() => {
            ui::warning("metadata.json not found");
            warnings += 1;
        }
        Err(e) => return Err(e.into()),
    }

    match metadata::read_settings(project).await {
        Ok(settings) => ui::success(&format!(
            "settings.json: {} app setting(s), {} platform setting(s)",
            settings.app_settings.len(),
            settings.platform_settings.len()
        )),
        Err(e) if e.is_not_found() => {
            ui::warning("settings.json not found");
            warnings += 1;
        }
        Err(e) => return Err(e.into()),
    }

    match project.package_json().await {
        Ok(package_json) => {
            let sdk = Sdk::detect(&package_json);
            ui::success(&format!("SDK: {}", sdk));
            if dependency::has_legacy_sdk_reference(&package_json) {
                ui::warning(&format!(
                    "{} still points at the old organisation and will be reinstalled on build",
                    sdk
                ));
                warnings += 1;
            }
            if !project.runtime().exists(&project.support_dir().await?) {
                ui::warning(&format!(
                    "{} is not installed, run `{} install`",
                    sdk, config.package_manager
                ));
                warnings += 1;
            }
        }
        Err(e) if e.is_not_found() => {
            ui::warning("package.json not found");
            warnings += 1;
        }
        Err(e) => return Err(e.into()),
    }

    let bundler = Bundler::new(&config.bundler, &config.bundler_config_dir);
    let program = bundler.program(project);
    if program.components().count() > 1 && !project.runtime().exists(&program) {
        ui::warning(&format!("Bundler not found: {}", program.display()));
        warnings += 1;
    }

    for target in &config.targets {
        let target = lng_build::BundleTarget::from(*target);
        let config_file = project
            .path(&config.bundler_config_dir)
            .join(target.config_file());
        if !project.runtime().exists(&config_file) {
            ui::warning(&format!(
                "{} bundler config not found: {}",
                target,
                config_file.display()
            ));
            warnings += 1;
        }
    }

    if config.targets.contains(&Target::Es5) {
        if let Ok(dir) = project.polyfills_dir().await {
            if !project.runtime().exists(&dir) {
                ui::warning("SDK polyfills folder not found, the ES5 build will fail");
                warnings += 1;
            }
        }
    }

    Ok(warnings)
}
