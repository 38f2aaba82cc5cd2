//! Keeping the app's `.gitignore` aware of build output folders.

use tracing::debug;

use crate::project::Project;

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Entries every app's `.gitignore` should carry.
///
/// `build_folder` (from `LNG_BUILD_FOLDER`) replaces both the default
/// `dist` and `build` entries.
pub fn required_entries(build_folder: Option<&str>) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    for entry in [
        build_folder.unwrap_or("dist"),
        "releases",
        ".tmp",
        build_folder.unwrap_or("build"),
    ] {
        if !entries.iter().any(|e| e == entry) {
            entries.push(entry.to_string());
        }
    }
    entries
}

/// Entries from `required` not present as a line of `content`.
pub fn missing_entries(content: &str, required: &[String]) -> Vec<String> {
    let lines: Vec<&str> = content.split(EOL).collect();
    required
        .iter()
        .filter(|entry| !lines.contains(&entry.as_str()))
        .cloned()
        .collect()
}

/// Append missing build entries to `.gitignore`.
///
/// Returns the entries that were added. Apps without a readable
/// `.gitignore` are left alone.
pub async fn ensure_gitignore(project: &Project, build_folder: Option<&str>) -> Vec<String> {
    let path = project.path(".gitignore");
    let runtime = project.runtime();

    let content = match runtime.read_file(&path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            debug!(error = %e, "no usable .gitignore, moving on");
            return Vec::new();
        }
    };

    let missing = missing_entries(&content, &required_entries(build_folder));
    if missing.is_empty() {
        return missing;
    }

    let addition = format!("{EOL}{}{EOL}", missing.join(EOL));
    if let Err(e) = runtime.append_file(&path, addition.as_bytes()).await {
        debug!(error = %e, "could not update .gitignore");
        return Vec::new();
    }
    missing
}
