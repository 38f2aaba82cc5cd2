use serde::Serialize;
use std::path::PathBuf;

use crate::cli::BuildArgs;
use crate::config::types::Target;

/// Config values given on the command line.
///
/// Only flags that were actually passed are serialized, so merging this on
/// top of the other sources leaves everything else alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_folder: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcemaps: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_src: Option<bool>,
}

impl From<&BuildArgs> for CliOverrides {
    fn from(args: &BuildArgs) -> Self {
        let targets = if args.es6 {
            Some(vec![Target::Es6])
        } else if args.es5 {
            Some(vec![Target::Es5])
        } else {
            None
        };

        Self {
            build_folder: args.out_dir.clone(),
            targets,
            sourcemaps: args.no_sourcemaps.then_some(false),
            copy_src: args.copy_src.then_some(true),
        }
    }
}
