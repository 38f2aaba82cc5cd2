//! lng - build helper for Lightning apps.
//!
//! Parses arguments, initializes logging and dispatches to the command
//! implementations.

use clap::Parser;
use lng_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args).await,
        cli::Command::Info(info_args) => commands::info_execute(info_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
