//! Compound variants: classes applied when several axes line up.

use serde::{Deserialize, Serialize};

use super::ordered::{scalar_values, OrderedMap};

/// A class fragment applied when every listed axis has the listed value.
///
/// Conditions are checked against each axis's *effective* value, so a
/// compound keyed on a default value applies even when the caller leaves
/// that axis out.
///
/// ```rust
/// use swatch::CompoundVariant;
///
/// let compound = CompoundVariant::new("border-b-2 rounded-none")
///     .when("variant", "underline")
///     .when("orientation", "horizontal");
/// assert_eq!(compound.conditions().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompoundVariant {
    #[serde(deserialize_with = "scalar_values")]
    when: OrderedMap<String>,
    class: String,
}

impl CompoundVariant {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            when: OrderedMap::new(),
            class: class.into(),
        }
    }

    /// Adds a condition, returning the updated compound for chaining.
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.when.insert(axis, value.into());
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// `(axis, value)` conditions in declaration order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.when.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Whether every condition holds, given a lookup of effective values.
    pub fn matches<'a, F>(&self, effective: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        self.when
            .iter()
            .all(|(axis, value)| effective(axis) == Some(value.as_str()))
    }
}
