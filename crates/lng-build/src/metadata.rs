//! App metadata and settings documents.
//!
//! `metadata.json` describes the app (identifier, version, ...) and
//! `settings.json` holds its runtime configuration. Both are read-only here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::project::Project;
use crate::runtime::Runtime;

pub const METADATA_FILE: &str = "metadata.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Contents of `metadata.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Reverse-domain app identifier, e.g. `com.example.myapp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Every other key, kept as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contents of `settings.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, rename = "appSettings")]
    pub app_settings: Map<String, Value>,
    #[serde(default, rename = "platformSettings")]
    pub platform_settings: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Read and parse a JSON document at an absolute path.
///
/// A missing file is reported as [`Error::NotFound`] so callers can treat it
/// as a soft failure.
pub async fn read_json_at<T: DeserializeOwned>(runtime: &dyn Runtime, path: &Path) -> Result<T> {
    let bytes = runtime.read_file(path).await.map_err(|e| {
        if e.is_not_found() {
            Error::NotFound(path.to_path_buf())
        } else {
            e.into()
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON document from the project root.
pub async fn read_json<T: DeserializeOwned>(project: &Project, file_name: &str) -> Result<T> {
    read_json_at(project.runtime(), &project.path(file_name))
        .await
        .map_err(|e| match e {
            Error::NotFound(_) => Error::NotFound(file_name.into()),
            other => other,
        })
}

pub async fn read_metadata(project: &Project) -> Result<Metadata> {
    read_json(project, METADATA_FILE).await
}

pub async fn read_settings(project: &Project) -> Result<Settings> {
    read_json(project, SETTINGS_FILE).await
}

/// Derive the bundle's global name from the app identifier.
///
/// `com.example.my-app` becomes `APP_com_example_my_app`; without an
/// identifier the name is plain `APP`.
pub fn safe_app_id(metadata: &Metadata) -> String {
    match metadata.identifier.as_deref() {
        Some(id) if !id.is_empty() => format!("APP_{}", id.replace(['.', '-'], "_")),
        _ => "APP".to_string(),
    }
}

/// Keep only the variables meant for the app (`APP_` prefix).
pub fn env_app_vars<I, K, V>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, _)| k.starts_with("APP_"))
        .collect()
}
