//! `package.json` and `package-lock.json` parsing.
//!
//! Only the fields the build needs are modelled; everything else in the
//! documents is ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::metadata::read_json_at;
use crate::runtime::Runtime;

/// Parsed package.json structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,
    /// Package version
    #[serde(default)]
    pub version: Option<String>,
    /// Production dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Load a package.json from `path`.
    pub async fn load(runtime: &dyn Runtime, path: &Path) -> Result<Self> {
        read_json_at(runtime, path).await
    }

    /// Whether `name` is listed in `dependencies`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }
}

/// A single locked dependency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LockedDependency {
    #[serde(default)]
    pub version: Option<String>,
}

/// Parsed package-lock.json structure (lockfile v1 `dependencies` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageLock {
    #[serde(default)]
    pub dependencies: BTreeMap<String, LockedDependency>,
}

impl PackageLock {
    /// Load a package-lock.json from `path`.
    pub async fn load(runtime: &dyn Runtime, path: &Path) -> Result<Self> {
        read_json_at(runtime, path).await
    }

    /// Locked version of `name`, if any.
    pub fn locked_version(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name)?.version.as_deref()
    }
}
