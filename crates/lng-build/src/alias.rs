//! Import alias plugin.
//!
//! Rewrites import specifiers matching a configured filter, then probes the
//! filesystem so extensionless and directory imports land on a real file:
//!
//! ```text
//! @/components/Button  --rewrite-->  src/components/Button
//!                      --probe---->  src/components/Button.js
//!                                    src/components/Button.mjs
//!                                    src/components/Button.ts
//! ```
//!
//! Directories are probed for `index.js`, `index.mjs` and `index.ts` instead.

use async_trait::async_trait;
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::plugin::{BuildPlugin, ResolveArgs, ResolvedId};
use crate::runtime::Runtime;

/// Extensions tried for imports that do not name a file, in order.
pub const EXTENSIONS: [&str; 3] = ["js", "mjs", "ts"];

/// One rewrite rule.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    filter: Regex,
    find: Regex,
    replace: String,
}

impl AliasEntry {
    /// Build a rule from regular expressions. `replace` may reference
    /// capture groups of `find` as `$1`, `${name}`, ...
    pub fn new(filter: &str, find: &str, replace: impl Into<String>) -> Result<Self> {
        Ok(Self {
            filter: compile(filter)?,
            find: compile(find)?,
            replace: replace.into(),
        })
    }

    /// Rule replacing a literal import prefix, e.g. `@` -> `./src`.
    pub fn literal(prefix: &str, replacement: impl Into<String>) -> Self {
        let pattern = Regex::new(&format!("^{}", regex::escape(prefix)))
            .expect("escaped literal is a valid pattern");
        Self {
            filter: pattern.clone(),
            find: pattern,
            replace: replacement.into(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.filter.is_match(path)
    }

    /// Apply the rewrite to the first match of `find`.
    pub fn rewrite(&self, path: &str) -> String {
        self.find.replace(path, self.replace.as_str()).into_owned()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Plugin applying [`AliasEntry`] rules on resolve.
#[derive(Debug, Clone)]
pub struct AliasPlugin {
    entries: Vec<AliasEntry>,
    runtime: Arc<dyn Runtime>,
    root: Option<PathBuf>,
}

impl AliasPlugin {
    pub fn new(entries: Vec<AliasEntry>, runtime: Arc<dyn Runtime>) -> Self {
        Self {
            entries,
            runtime,
            root: None,
        }
    }

    /// Resolve relative rewrites against `root` instead of the process cwd.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    async fn is_file(&self, path: &Path) -> bool {
        self.runtime
            .symlink_metadata(path)
            .await
            .map(|m| m.is_file)
            .unwrap_or(false)
    }

    async fn is_dir(&self, path: &Path) -> bool {
        self.runtime
            .symlink_metadata(path)
            .await
            .map(|m| m.is_dir)
            .unwrap_or(false)
    }

    /// Find an existing file for an extensionless or directory import.
    async fn as_file(&self, path: &Path) -> Option<PathBuf> {
        let is_dir = self.is_dir(path).await;
        for ext in EXTENSIONS {
            let candidate = if is_dir {
                path.join(format!("index.{ext}"))
            } else {
                let mut with_ext = path.as_os_str().to_owned();
                with_ext.push(format!(".{ext}"));
                PathBuf::from(with_ext)
            };
            if self.is_file(&candidate).await {
                return Some(candidate);
            }
        }
        None
    }
}

#[async_trait]
impl BuildPlugin for AliasPlugin {
    fn name(&self) -> Cow<'static, str> {
        "alias".into()
    }

    async fn resolve_id(&self, args: &ResolveArgs<'_>) -> Result<Option<ResolvedId>> {
        let Some(entry) = self.entries.iter().find(|e| e.matches(args.path)) else {
            return Ok(None);
        };

        let rewritten = PathBuf::from(entry.rewrite(args.path));
        let import_path = match &self.root {
            Some(root) if rewritten.is_relative() => root.join(rewritten),
            _ => rewritten,
        };

        let resolved = if self.is_file(&import_path).await {
            Some(import_path)
        } else {
            self.as_file(&import_path).await
        };

        match resolved {
            Some(path) => Ok(Some(ResolvedId { path })),
            None => Err(Error::Unresolved {
                path: args.path.to_string(),
                importer: args.importer.to_string(),
            }),
        }
    }
}
