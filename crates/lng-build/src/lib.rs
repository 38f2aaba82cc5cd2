//! # lng-build
//!
//! Build helpers for Lightning apps. Each helper performs one step of an app
//! build: copying assets and project documents, running the external bundler
//! for the ES6 and ES5 targets, concatenating SDK polyfills, and keeping
//! `.gitignore` and the SDK dependency up to date.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lng_build::{assets, bundle, metadata, polyfills, Project};
//!
//! # #[tokio::main]
//! # async fn main() -> lng_build::Result<()> {
//! let project = Project::native("./my-app");
//! let build = project.path("build");
//!
//! assets::remove_folder(&project, &build).await?;
//! assets::ensure_folder_exists(&project, &build).await?;
//! assets::copy_support_files(&project, &build).await?;
//! assets::copy_static_folder(&project, &build).await?;
//!
//! let metadata = metadata::read_metadata(&project).await?;
//! let bundler = bundle::Bundler::new("node_modules/.bin/rollup", "configs");
//! bundler
//!     .bundle(&project, &build, &metadata, bundle::BundleTarget::Es6, Default::default())
//!     .await?;
//! polyfills::bundle_polyfills(&project, &build).await?;
//! # Ok(()) }
//! ```
//!
//! All filesystem access goes through [`runtime::Runtime`]; the crate only
//! emits `tracing` events and leaves subscriber setup to the caller.

pub mod alias;
pub mod assets;
pub mod bundle;
pub mod dependency;
pub mod error;
pub mod gitignore;
pub mod manifest;
pub mod metadata;
pub mod plugin;
pub mod polyfills;
pub mod project;
pub mod runtime;

pub use alias::{AliasEntry, AliasPlugin};
pub use assets::CopyOutcome;
pub use bundle::{BundleOptions, BundleOutput, BundleTarget, Bundler};
pub use error::{Error, Result};
pub use metadata::{Metadata, Settings};
pub use plugin::{BuildPlugin, PluginRegistry, ResolveArgs, ResolvedId};
pub use project::{Project, Sdk, cli_version};
pub use runtime::{NativeRuntime, Runtime, RuntimeError};
