//! lng CLI - build helper for Lightning apps.
//!
//! This crate wraps `lng-build` in a command-line interface: it loads the
//! project configuration, drives the build pipeline step by step with
//! spinners, and reports failures as `miette` diagnostics.
//!
//! # Architecture
//!
//! - [`error`] - CLI error hierarchy with actionable hints
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - spinners, status lines and summaries
//! - `commands` - `build`, `check`, `resolve` and `info`
//! - `config` - `lng.config.json` / `LNG_*` / CLI flag merging
//!
//! # Example
//!
//! ```rust
//! use lng_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
