//! Concatenating the SDK polyfills into a single file.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::project::Project;

pub const POLYFILLS_FILE: &str = "polyfills.js";

/// Concatenate every file in the SDK's `support/polyfills` folder, in file
/// name order, into `<folder>/polyfills.js`.
pub async fn bundle_polyfills(project: &Project, folder: &Path) -> Result<PathBuf> {
    let polyfills_dir = project.polyfills_dir().await?;
    let runtime = project.runtime();

    let mut parts = Vec::new();
    for name in runtime.read_dir(&polyfills_dir).await? {
        let path = polyfills_dir.join(&name);
        if !runtime.metadata(&path).await?.is_file {
            continue;
        }
        debug!(polyfill = %name, "adding polyfill");
        parts.push(runtime.read_file(&path).await?);
    }

    let output = folder.join(POLYFILLS_FILE);
    runtime.write_file(&output, &parts.join(&b'\n')).await?;
    Ok(output)
}
