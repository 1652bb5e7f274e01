//! Unknown-value handling and resolver configuration.

use serde::{Deserialize, Serialize};
use swatch_merge::ClassMerger;

use super::resolver::Resolver;

/// What to do when a request names a value (or axis) the table lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownValuePolicy {
    /// Treat the selection as if it were omitted.
    #[default]
    Fallback,
    /// Report the selection as an error.
    Strict,
}

/// Serializable resolver settings.
///
/// ```rust
/// use swatch::{ResolverConfig, UnknownValuePolicy};
///
/// let config: ResolverConfig = serde_json::from_str(r#"{"policy": "strict"}"#).unwrap();
/// assert_eq!(config.policy, UnknownValuePolicy::Strict);
/// assert!(config.merge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub policy: UnknownValuePolicy,
    /// Merge conflicting utility classes instead of only collapsing exact
    /// duplicates.
    #[serde(default = "default_merge")]
    pub merge: bool,
}

fn default_merge() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            policy: UnknownValuePolicy::default(),
            merge: default_merge(),
        }
    }
}

impl ResolverConfig {
    pub fn build(&self) -> Resolver {
        let resolver = Resolver::plain().with_policy(self.policy);
        if self.merge {
            resolver.with_merger(ClassMerger::new())
        } else {
            resolver
        }
    }
}
