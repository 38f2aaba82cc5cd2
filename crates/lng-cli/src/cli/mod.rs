//! Command-line interface definition.
//!
//! - `lng build` - copy assets and create the app bundles
//! - `lng check` - validate configuration and project files without building
//! - `lng resolve` - run the alias plugin on one import
//! - `lng info` - print app, SDK and CLI versions

mod commands;
mod tests;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, InfoArgs, ResolveArgs};

/// lng - build helper for Lightning apps
#[derive(Parser, Debug)]
#[command(
    name = "lng",
    version,
    about = "Build helper for Lightning apps",
    long_about = "Copies static assets, settings and metadata into the build folder,\n\
                  runs the bundler for ES6 and ES5 targets, concatenates the SDK polyfills\n\
                  and keeps .gitignore and the SDK dependency up to date."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
