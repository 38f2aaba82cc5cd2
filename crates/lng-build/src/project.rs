//! Project layout and SDK detection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;
use crate::manifest::PackageJson;
use crate::metadata::read_metadata;
use crate::runtime::{NativeRuntime, Runtime};

/// npm name of the current SDK.
pub const LIGHTNING_SDK: &str = "@lightningjs/sdk";
/// npm name of the SDK published under the old organisation.
pub const LEGACY_SDK: &str = "wpe-lightning-sdk";

/// Which SDK package the app depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sdk {
    /// `@lightningjs/sdk`
    Lightning,
    /// `wpe-lightning-sdk`
    Legacy,
}

impl Sdk {
    /// Pick the SDK from the app's dependencies.
    pub fn detect(package_json: &PackageJson) -> Self {
        if package_json.depends_on(LIGHTNING_SDK) {
            Sdk::Lightning
        } else {
            Sdk::Legacy
        }
    }

    pub fn package_name(&self) -> &'static str {
        match self {
            Sdk::Lightning => LIGHTNING_SDK,
            Sdk::Legacy => LEGACY_SDK,
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package_name())
    }
}

/// Version of the build tooling.
pub fn cli_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// An app project rooted at a directory, accessed through a [`Runtime`].
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    runtime: Arc<dyn Runtime>,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, runtime: Arc<dyn Runtime>) -> Self {
        Self {
            root: root.into(),
            runtime,
        }
    }

    /// Project on the native filesystem.
    pub fn native(root: impl Into<PathBuf>) -> Self {
        Self::new(root, Arc::new(NativeRuntime))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn runtime(&self) -> &dyn Runtime {
        self.runtime.as_ref()
    }

    pub fn runtime_arc(&self) -> Arc<dyn Runtime> {
        Arc::clone(&self.runtime)
    }

    /// Resolve `path` against the project root. Absolute paths are kept.
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub async fn package_json(&self) -> Result<PackageJson> {
        PackageJson::load(self.runtime(), &self.path("package.json")).await
    }

    /// Detect the SDK flavour from `package.json`.
    pub async fn sdk(&self) -> Result<Sdk> {
        Ok(Sdk::detect(&self.package_json().await?))
    }

    /// `node_modules/<sdk>` inside the project.
    pub async fn sdk_dir(&self) -> Result<PathBuf> {
        let sdk = self.sdk().await?;
        Ok(self.path("node_modules").join(sdk.package_name()))
    }

    pub async fn support_dir(&self) -> Result<PathBuf> {
        Ok(self.sdk_dir().await?.join("support"))
    }

    pub async fn polyfills_dir(&self) -> Result<PathBuf> {
        Ok(self.support_dir().await?.join("polyfills"))
    }

    /// Version declared in `metadata.json`.
    pub async fn app_version(&self) -> Result<Option<String>> {
        Ok(read_metadata(self).await?.version)
    }

    /// Version of the installed SDK package.
    pub async fn sdk_version(&self) -> Result<Option<String>> {
        let path = self.sdk_dir().await?.join("package.json");
        Ok(PackageJson::load(self.runtime(), &path).await?.version)
    }
}
