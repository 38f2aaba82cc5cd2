//! Moving the SDK dependency off the old GitHub organisation.
//!
//! Apps created before the SDK moved still depend on
//! `github:WebPlatformForEmbedded/Lightning-SDK`. When such a reference is
//! found, the same revision is installed from the `rdkcentral`
//! organisation instead.

use regex::Regex;
use std::sync::LazyLock;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::manifest::{PackageJson, PackageLock};
use crate::project::{LEGACY_SDK, Project};

const LEGACY_REPOSITORY: &str = "webplatformforembedded/lightning-sdk";
const NEW_ORGANISATION: &str = "rdkcentral";

static LEGACY_ORGANISATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)WebPlatformForEmbedded").expect("static pattern is valid")
});

/// Whether `package.json` points the legacy SDK at the old organisation.
pub fn has_legacy_sdk_reference(package_json: &PackageJson) -> bool {
    package_json
        .dependencies
        .get(LEGACY_SDK)
        .is_some_and(|spec| spec.to_lowercase().contains(LEGACY_REPOSITORY))
}

/// Compute the dependency to install in place of the legacy reference.
///
/// A reference already pinned with `#<hash>` is reused; otherwise the
/// revision comes from `package-lock.json`. `None` when nothing needs to
/// move or no revision is known.
pub fn legacy_sdk_replacement(
    package_json: &PackageJson,
    package_lock: Option<&PackageLock>,
) -> Option<String> {
    if !has_legacy_sdk_reference(package_json) {
        return None;
    }

    let declared = package_json.dependencies.get(LEGACY_SDK)?;
    let locked = if declared.contains('#') {
        declared.as_str()
    } else {
        package_lock?.locked_version(LEGACY_SDK)?
    };

    let replacement = LEGACY_ORGANISATION
        .replace_all(locked, NEW_ORGANISATION)
        .into_owned();
    (!replacement.is_empty()).then_some(replacement)
}

/// Install the relocated SDK when the app still references the old one.
///
/// Returns the installed dependency, or `None` when nothing had to change.
pub async fn ensure_correct_sdk_dependency(
    project: &Project,
    package_manager: &str,
) -> Result<Option<String>> {
    let package_json_path = project.path("package.json");
    if !project.runtime().exists(&package_json_path) {
        return Ok(None);
    }
    let package_json = PackageJson::load(project.runtime(), &package_json_path).await?;
    if !has_legacy_sdk_reference(&package_json) {
        return Ok(None);
    }

    let pinned = package_json
        .dependencies
        .get(LEGACY_SDK)
        .is_some_and(|spec| spec.contains('#'));
    let lock_path = project.path("package-lock.json");
    let package_lock = if !pinned && project.runtime().exists(&lock_path) {
        Some(PackageLock::load(project.runtime(), &lock_path).await?)
    } else {
        None
    };

    let Some(dependency) = legacy_sdk_replacement(&package_json, package_lock.as_ref()) else {
        debug!("legacy SDK reference found but no locked revision to move");
        return Ok(None);
    };

    info!(%dependency, "moving SDK dependency to the {} organisation", NEW_ORGANISATION);
    let output = Command::new(package_manager)
        .arg("install")
        .arg(&dependency)
        .current_dir(project.root())
        .output()
        .await
        .map_err(|e| Error::Install {
            dependency: dependency.clone(),
            stderr: format!("failed to run {}: {}", package_manager, e),
        })?;

    if !output.status.success() {
        return Err(Error::Install {
            dependency,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(Some(dependency))
}
