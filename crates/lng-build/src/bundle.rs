//! Invoking the external JavaScript bundler.
//!
//! The app is bundled twice: an ES6 bundle for modern runtimes and an ES5
//! bundle for older ones. Each run passes the target's config file, the app
//! entry, the output file and a global name derived from the app identifier.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::metadata::{Metadata, safe_app_id};
use crate::project::Project;

/// Bundle variant to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleTarget {
    Es6,
    Es5,
}

impl BundleTarget {
    /// Bundler configuration file for this target.
    pub fn config_file(&self) -> &'static str {
        match self {
            BundleTarget::Es6 => "rollup.es6.config.js",
            BundleTarget::Es5 => "rollup.es5.config.js",
        }
    }

    /// File name of the produced bundle.
    pub fn output_file(&self) -> &'static str {
        match self {
            BundleTarget::Es6 => "appBundle.js",
            BundleTarget::Es5 => "appBundle.es5.js",
        }
    }
}

impl fmt::Display for BundleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleTarget::Es6 => f.write_str("ES6"),
            BundleTarget::Es5 => f.write_str("ES5"),
        }
    }
}

/// Per-run bundler switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleOptions {
    pub sourcemaps: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self { sourcemaps: true }
    }
}

/// A bundle written by the bundler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOutput {
    pub target: BundleTarget,
    pub file: PathBuf,
}

/// External bundler executable plus the location of its target configs.
#[derive(Debug, Clone)]
pub struct Bundler {
    executable: PathBuf,
    config_dir: PathBuf,
    entry: PathBuf,
}

impl Bundler {
    pub fn new(executable: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            config_dir: config_dir.into(),
            entry: PathBuf::from("src/index.js"),
        }
    }

    /// Override the app entry (relative to the project root).
    pub fn with_entry(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Program to spawn. Bare names go through `PATH`.
    pub fn program(&self, project: &Project) -> PathBuf {
        if self.executable.components().count() == 1 && !self.executable.is_absolute() {
            self.executable.clone()
        } else {
            project.path(&self.executable)
        }
    }

    /// Command-line arguments for one bundler run.
    pub fn args(
        &self,
        project: &Project,
        folder: &Path,
        metadata: &Metadata,
        target: BundleTarget,
        options: BundleOptions,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-c".into(),
            project.path(&self.config_dir).join(target.config_file()).into(),
            "--input".into(),
            project.path(&self.entry).into(),
            "--file".into(),
            folder.join(target.output_file()).into(),
            "--name".into(),
            safe_app_id(metadata).into(),
        ];

        if !options.sourcemaps {
            args.push("--no-sourcemap".into());
        }

        args
    }

    /// Run the bundler for `target`, writing into `folder`.
    ///
    /// A bundler that cannot be started or exits unsuccessfully yields
    /// [`Error::Bundler`] carrying its stderr.
    pub async fn bundle(
        &self,
        project: &Project,
        folder: &Path,
        metadata: &Metadata,
        target: BundleTarget,
        options: BundleOptions,
    ) -> Result<BundleOutput> {
        let program = self.program(project);
        let args = self.args(project, folder, metadata, target, options);
        debug!(program = %program.display(), ?args, "spawning bundler");

        let output = Command::new(&program)
            .args(&args)
            .current_dir(project.root())
            .output()
            .await
            .map_err(|e| Error::Bundler {
                target,
                stderr: format!("failed to run {}: {}", program.display(), e),
            })?;

        if !output.status.success() {
            return Err(Error::Bundler {
                target,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let file = folder.join(target.output_file());
        info!(%target, file = %file.display(), "bundle written");
        Ok(BundleOutput { target, file })
    }
}
