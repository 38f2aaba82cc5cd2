use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available lng subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the app into the build folder
    ///
    /// Copies support files, static assets, settings and metadata, then
    /// creates the ES6 and/or ES5 bundles with the configured bundler.
    Build(BuildArgs),

    /// Validate configuration and project files
    ///
    /// Loads lng.config.json, checks metadata.json and settings.json and
    /// reports which SDK the app uses, without writing anything.
    Check(CheckArgs),

    /// Resolve an import through the configured aliases
    ///
    /// Prints the file the alias plugin picks for IMPORT.
    Resolve(ResolveArgs),

    /// Show app, SDK and CLI versions
    Info(InfoArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Path to lng.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build folder, relative to the project root
    ///
    /// Overrides `build_folder` from the config file and LNG_BUILD_FOLDER.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Only create the ES6 bundle
    #[arg(long, conflicts_with = "es5")]
    pub es6: bool,

    /// Only create the ES5 bundle (plus polyfills)
    #[arg(long)]
    pub es5: bool,

    /// Do not generate source maps
    #[arg(long)]
    pub no_sourcemaps: bool,

    /// Also copy the src folder into the build folder
    #[arg(long)]
    pub copy_src: bool,

    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to lng.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Import specifier, e.g. `@/components/Button`
    #[arg(value_name = "IMPORT")]
    pub import: String,

    /// Module containing the import, used in error messages
    #[arg(long, value_name = "FILE", default_value = "<cli>")]
    pub importer: String,

    /// Path to lng.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    /// Project root (defaults to the nearest directory with a package.json)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
