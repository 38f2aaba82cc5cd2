use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use lng_build::{AliasEntry, BundleTarget};

/// Bundle target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Modern bundle, `appBundle.js`
    Es6,
    /// Legacy bundle, `appBundle.es5.js`, shipped with polyfills
    Es5,
}

impl From<Target> for BundleTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Es6 => BundleTarget::Es6,
            Target::Es5 => BundleTarget::Es5,
        }
    }
}

/// Import alias rule.
///
/// An import matching `filter` has the first match of `find` replaced with
/// `replace`. Both are regular expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AliasConfig {
    pub filter: String,
    pub find: String,
    pub replace: String,
}

impl AliasConfig {
    pub fn to_entry(&self) -> lng_build::Result<AliasEntry> {
        AliasEntry::new(&self.filter, &self.find, self.replace.clone())
    }
}
