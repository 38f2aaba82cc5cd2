//! Build command implementation.
//!
//! Runs the build steps in order, each behind its own spinner:
//!
//! 1. remove and recreate the build folder
//! 2. copy SDK support files
//! 3. copy `static`, optionally `src`, `settings.json` and `metadata.json`
//!    (a missing source only warns)
//! 4. run the bundler once per target
//! 5. concatenate polyfills when an ES5 bundle was made
//! 6. update `.gitignore` and move a legacy SDK dependency

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use lng_build::{
    assets, dependency, gitignore, metadata, polyfills, BundleOptions, BundleTarget, Bundler,
    CopyOutcome, Metadata, Project,
};

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::{CliOverrides, LngConfig, Target};
use crate::error::Result;
use crate::ui::{self, Spinner};

/// Execute the build command.
///
/// # Errors
///
/// Configuration errors, filesystem failures and bundler or installer
/// failures abort the build.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start = Instant::now();

    let overrides = CliOverrides::from(&args);
    let (root, config) =
        utils::load_project_config(args.cwd.as_deref(), args.config.as_deref(), &overrides)?;
    let project = Project::native(&root);
    let folder = project.path(&config.build_folder);

    tracing::info!(root = %root.display(), folder = %folder.display(), "building app");
    let written = run(&project, &config, &folder).await?;

    let entries = file_sizes(&written).await;
    ui::print_build_summary(&folder, &entries, start.elapsed());
    ui::success(&format!("Build complete in {}", ui::format_duration(start.elapsed())));
    Ok(())
}

/// Run every build step for `project` into `folder`.
///
/// Returns the bundle and polyfill files that were written.
pub async fn run(project: &Project, config: &LngConfig, folder: &Path) -> Result<Vec<PathBuf>> {
    step("Removing old build folder", assets::remove_folder(project, folder)).await?;
    step("Creating build folder", assets::ensure_folder_exists(project, folder)).await?;
    step("Copying support files", assets::copy_support_files(project, folder)).await?;
    optional_copy("static folder", assets::copy_static_folder(project, folder)).await?;
    if config.copy_src {
        optional_copy("src folder", assets::copy_src_folder(project, folder)).await?;
    }

    optional_copy(metadata::SETTINGS_FILE, assets::copy_settings(project, folder)).await?;
    optional_copy(metadata::METADATA_FILE, assets::copy_metadata(project, folder)).await?;

    let metadata = read_metadata(project).await?;
    let bundler = Bundler::new(&config.bundler, &config.bundler_config_dir)
        .with_entry(&config.entry);
    let options = BundleOptions {
        sourcemaps: config.sourcemaps,
    };

    let mut written = Vec::new();
    for target in &config.targets {
        let target = BundleTarget::from(*target);
        let output = step(
            &format!("Creating {} bundle", target),
            bundler.bundle(project, folder, &metadata, target, options),
        )
        .await?;
        written.push(output.file);
    }

    if config.targets.contains(&Target::Es5) {
        let file = step(
            "Bundling polyfills",
            polyfills::bundle_polyfills(project, folder),
        )
        .await?;
        written.push(file);
    }

    let added = gitignore::ensure_gitignore(project, config.gitignore_folder().as_deref()).await;
    if !added.is_empty() {
        ui::info(&format!("Added {} to .gitignore", added.join(", ")));
    }

    let installed = step(
        "Checking SDK dependency",
        dependency::ensure_correct_sdk_dependency(project, &config.package_manager),
    )
    .await?;
    if let Some(dependency) = installed {
        ui::success(&format!("Installed {}", dependency));
    }

    Ok(written)
}

/// Run one step behind a spinner.
async fn step<T>(message: &str, fut: impl Future<Output = lng_build::Result<T>>) -> Result<T> {
    let spinner = Spinner::new(message);
    match fut.await {
        Ok(value) => {
            spinner.finish(message);
            Ok(value)
        }
        Err(e) => {
            spinner.fail(&e.to_string());
            tracing::error!(error = %e, "{} failed", message);
            Err(e.into())
        }
    }
}

/// Copy of something the app may leave out. Absence fails the spinner only.
async fn optional_copy(
    name: &str,
    fut: impl Future<Output = lng_build::Result<CopyOutcome>>,
) -> Result<CopyOutcome> {
    let message = format!("Copying {}", name);
    let spinner = Spinner::new(&message);
    match fut.await {
        Ok(CopyOutcome::Copied) => {
            spinner.finish(&message);
            Ok(CopyOutcome::Copied)
        }
        Ok(CopyOutcome::Missing) => {
            spinner.fail(&format!("{} not found", name));
            tracing::warn!(source = name, "optional copy source missing, continuing");
            Ok(CopyOutcome::Missing)
        }
        Err(e) => {
            spinner.fail(&e.to_string());
            Err(e.into())
        }
    }
}

/// Read `metadata.json` for the bundle name. A missing file falls back to
/// empty metadata.
async fn read_metadata(project: &Project) -> Result<Metadata> {
    match metadata::read_metadata(project).await {
        Ok(metadata) => Ok(metadata),
        Err(e) if e.is_not_found() => {
            tracing::warn!("metadata.json not found, bundling without an app identifier");
            Ok(Metadata::default())
        }
        Err(e) => Err(e.into()),
    }
}

async fn file_sizes(files: &[PathBuf]) -> Vec<(String, u64)> {
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let size = tokio::fs::metadata(file).await.map(|m| m.len()).unwrap_or(0);
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push((name, size));
    }
    entries
}
