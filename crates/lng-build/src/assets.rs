//! Copying static assets, sources and project documents into a build folder.
//!
//! All copies overwrite their destination, so running a step twice leaves
//! the same tree behind.

use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::metadata::{METADATA_FILE, SETTINGS_FILE};
use crate::project::Project;

/// What happened to an optional copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Source absent; nothing was copied.
    Missing,
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// Remove a folder and its contents. A missing folder is fine.
pub async fn remove_folder(project: &Project, folder: &Path) -> Result<()> {
    debug!(folder = %folder.display(), "removing folder");
    project.runtime().remove_dir_all(folder).await?;
    Ok(())
}

/// Create a folder (and parents) if it does not exist yet.
pub async fn ensure_folder_exists(project: &Project, folder: &Path) -> Result<()> {
    debug!(folder = %folder.display(), "ensuring folder exists");
    project.runtime().create_dir(folder, true).await?;
    Ok(())
}

/// Copy the contents of the SDK's `support` folder into `folder`.
pub async fn copy_support_files(project: &Project, folder: &Path) -> Result<()> {
    let support = project.support_dir().await?;
    debug!(from = %support.display(), to = %folder.display(), "copying support files");
    project.runtime().copy_dir(&support, folder).await?;
    Ok(())
}

/// Copy `./static` to `<folder>/static` when present.
pub async fn copy_static_folder(project: &Project, folder: &Path) -> Result<CopyOutcome> {
    copy_project_dir(project, "static", folder).await
}

/// Copy `./src` to `<folder>/src` when present.
pub async fn copy_src_folder(project: &Project, folder: &Path) -> Result<CopyOutcome> {
    copy_project_dir(project, "src", folder).await
}

async fn copy_project_dir(project: &Project, name: &str, folder: &Path) -> Result<CopyOutcome> {
    let from = project.path(name);
    if !project.runtime().exists(&from) {
        debug!(folder = name, "optional folder missing, skipping copy");
        return Ok(CopyOutcome::Missing);
    }

    let to = folder.join(name);
    debug!(from = %from.display(), to = %to.display(), "copying folder");
    project.runtime().copy_dir(&from, &to).await?;
    Ok(CopyOutcome::Copied)
}

/// Copy `settings.json` into `folder` when present.
pub async fn copy_settings(project: &Project, folder: &Path) -> Result<CopyOutcome> {
    copy_optional_file(project, SETTINGS_FILE, folder).await
}

/// Copy `metadata.json` into `folder` when present.
pub async fn copy_metadata(project: &Project, folder: &Path) -> Result<CopyOutcome> {
    copy_optional_file(project, METADATA_FILE, folder).await
}

async fn copy_optional_file(
    project: &Project,
    file_name: &str,
    folder: &Path,
) -> Result<CopyOutcome> {
    let from = project.path(file_name);
    if !project.runtime().exists(&from) {
        debug!(file = file_name, "optional file missing, skipping copy");
        return Ok(CopyOutcome::Missing);
    }

    project
        .runtime()
        .copy_file(&from, &folder.join(file_name))
        .await?;
    Ok(CopyOutcome::Copied)
}
