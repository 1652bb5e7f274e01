//! Extra attributes forwarded to the underlying element.

use serde::{Deserialize, Serialize};

use crate::table::OrderedMap;

/// An ordered bag of string attributes.
///
/// Stands in for the "rest props" a component passes through to the
/// primitive it wraps: anything the component does not consume itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(OrderedMap<String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lays `self` over `base`: entries of `self` win, new names go last.
    pub fn merge_over(self, mut base: Attributes) -> Attributes {
        for (name, value) in self.0 {
            base.0.insert(name, value);
        }
        base
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// The resolved props of one element: its class string and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProps {
    pub class: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ElementProps {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}
