//! Command implementations for the lng CLI.
//!
//! - [`build`] - copy assets and create the bundles
//! - [`check`] - validate configuration and project files
//! - [`resolve`] - run the alias plugin on one import
//! - [`info`] - print versions and app variables
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod build;
pub mod check;
pub mod info;
pub mod resolve;
pub mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use info::execute as info_execute;
pub use resolve::execute as resolve_execute;
