//! Resolve command implementation.
//!
//! Runs the configured alias plugin on a single import and prints the file
//! it resolves to on stdout.

use std::path::PathBuf;

use lng_build::{AliasPlugin, PluginRegistry, Project, ResolveArgs as PluginArgs};

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::config::{CliOverrides, LngConfig};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the resolve command.
///
/// # Errors
///
/// Fails when no alias matches the import, or when the rewritten path
/// does not exist.
pub async fn execute(args: ResolveArgs) -> Result<()> {
    let (root, config) = utils::load_project_config(
        args.cwd.as_deref(),
        args.config.as_deref(),
        &CliOverrides::default(),
    )?;
    let project = Project::native(&root);

    match resolve(&project, &config, &args.import, &args.importer).await? {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => {
            ui::warning(&format!("No alias matches '{}'", args.import));
            Err(CliError::InvalidArgument(format!(
                "'{}' is not an aliased import",
                args.import
            )))
        }
    }
}

/// Build the plugin registry for `config`.
pub fn registry(project: &Project, config: &LngConfig) -> Result<PluginRegistry> {
    let mut registry = PluginRegistry::new();
    if !config.alias.is_empty() {
        registry.add(
            AliasPlugin::new(config.alias_entries()?, project.runtime_arc())
                .with_root(project.root()),
        );
    }
    Ok(registry)
}

/// Resolve `import` through the configured aliases.
pub async fn resolve(
    project: &Project,
    config: &LngConfig,
    import: &str,
    importer: &str,
) -> Result<Option<PathBuf>> {
    let registry = registry(project, config)?;
    tracing::debug!(plugins = ?registry.names(), import, "resolving import");

    let resolved = registry
        .resolve(&PluginArgs {
            path: import,
            importer,
        })
        .await?;
    Ok(resolved.map(|id| id.path))
}
