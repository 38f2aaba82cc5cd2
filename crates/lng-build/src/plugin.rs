//! Resolve-hook plugins.
//!
//! A [`BuildPlugin`] gets a chance to claim an import before the bundler's
//! own resolution runs. Plugins are consulted in registration order and the
//! first one returning a result wins.

use async_trait::async_trait;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;

/// Arguments of the resolve hook.
#[derive(Debug, Clone, Copy)]
pub struct ResolveArgs<'a> {
    /// Import specifier as written in the source
    pub path: &'a str,
    /// Module containing the import
    pub importer: &'a str,
}

/// A resolved import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
    pub path: PathBuf,
}

#[async_trait]
pub trait BuildPlugin: Send + Sync + std::fmt::Debug {
    fn name(&self) -> Cow<'static, str>;

    /// Return `Ok(None)` to leave the import to the next plugin.
    async fn resolve_id(&self, args: &ResolveArgs<'_>) -> Result<Option<ResolvedId>>;
}

/// Ordered set of plugins.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn BuildPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<P: BuildPlugin + 'static>(&mut self, plugin: P) {
        self.plugins.push(Arc::new(plugin));
    }

    /// Run the resolve hook of each plugin until one claims the import.
    pub async fn resolve(&self, args: &ResolveArgs<'_>) -> Result<Option<ResolvedId>> {
        for plugin in &self.plugins {
            if let Some(resolved) = plugin.resolve_id(args).await? {
                tracing::debug!(plugin = %plugin.name(), path = args.path, "import resolved");
                return Ok(Some(resolved));
            }
        }
        Ok(None)
    }

    pub fn names(&self) -> Vec<Cow<'static, str>> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed {
        name: &'static str,
        claims: &'static str,
    }

    #[async_trait]
    impl BuildPlugin for Fixed {
        fn name(&self) -> Cow<'static, str> {
            self.name.into()
        }

        async fn resolve_id(&self, args: &ResolveArgs<'_>) -> Result<Option<ResolvedId>> {
            Ok((args.path == self.claims).then(|| ResolvedId {
                path: PathBuf::from(format!("/{}/{}", self.name, args.path)),
            }))
        }
    }

    #[tokio::test]
    async fn test_first_claiming_plugin_wins() {
        let mut registry = PluginRegistry::new();
        registry.add(Fixed { name: "first", claims: "a" });
        registry.add(Fixed { name: "second", claims: "a" });
        registry.add(Fixed { name: "third", claims: "b" });

        let args = ResolveArgs { path: "a", importer: "src/index.js" };
        let resolved = registry.resolve(&args).await.unwrap().unwrap();
        assert_eq!(resolved.path, PathBuf::from("/first/a"));

        let args = ResolveArgs { path: "b", importer: "src/index.js" };
        let resolved = registry.resolve(&args).await.unwrap().unwrap();
        assert_eq!(resolved.path, PathBuf::from("/third/b"));
    }

    #[tokio::test]
    async fn test_unclaimed_import() {
        let mut registry = PluginRegistry::new();
        registry.add(Fixed { name: "only", claims: "a" });

        let args = ResolveArgs { path: "lodash", importer: "src/index.js" };
        assert_eq!(registry.resolve(&args).await.unwrap(), None);
        assert_eq!(registry.names(), vec!["only"]);
        assert_eq!(registry.len(), 1);
    }
}
