//! Info command implementation.

use std::collections::BTreeMap;

use lng_build::{cli_version, metadata, Project};
use owo_colors::OwoColorize;

use crate::cli::InfoArgs;
use crate::commands::utils;
use crate::error::Result;

/// Versions and app variables of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub app_version: Option<String>,
    pub sdk: Option<String>,
    pub sdk_version: Option<String>,
    pub cli_version: &'static str,
    pub app_vars: BTreeMap<String, String>,
}

/// Execute the info command.
pub async fn execute(args: InfoArgs) -> Result<()> {
    let root = utils::resolve_project_root(args.cwd.as_deref())?;
    let info = collect(&Project::native(&root), std::env::vars()).await;

    println!("{:<12} {}", "App".bold(), display(&info.app_version));
    println!(
        "{:<12} {} {}",
        "SDK".bold(),
        info.sdk.as_deref().unwrap_or("-"),
        display(&info.sdk_version)
    );
    println!("{:<12} {}", "lng".bold(), info.cli_version);

    if !info.app_vars.is_empty() {
        println!("\n{}", "Environment".bold());
        for (key, value) in &info.app_vars {
            println!("  {}={}", key, value);
        }
    }
    Ok(())
}

/// Gather project information. Missing files leave the matching field
/// empty.
pub async fn collect<I>(project: &Project, vars: I) -> ProjectInfo
where
    I: IntoIterator<Item = (String, String)>,
{
    let app_version = project.app_version().await.ok().flatten();
    let sdk = project.sdk().await.ok().map(|sdk| sdk.to_string());
    let sdk_version = project.sdk_version().await.ok().flatten();

    ProjectInfo {
        app_version,
        sdk,
        sdk_version,
        cli_version: cli_version(),
        app_vars: metadata::env_app_vars(vars),
    }
}

fn display(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
