//! Per-call selections and override classes.

use crate::AxisValue;

/// What a caller asks of a variant table for one element.
///
/// Selections are kept in the order they were made. Selecting an axis twice
/// replaces the earlier value.
///
/// # Example
///
/// ```rust
/// use swatch::Request;
///
/// let request = Request::new()
///     .set("size", "sm")
///     .flag("disabled", true)
///     .class("mt-2");
///
/// assert_eq!(request.get("size"), Some("sm"));
/// assert_eq!(request.get("disabled"), Some("true"));
/// assert_eq!(request.override_class(), Some("mt-2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    selections: Vec<(String, String)>,
    class: Option<String>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a value for an axis.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(axis.into(), value.into());
        self
    }

    /// Selects a typed axis value.
    pub fn with<V: AxisValue>(self, value: V) -> Self {
        self.set(V::AXIS, value.value_name())
    }

    /// Selects `"true"` or `"false"` on a boolean state axis.
    pub fn flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.set(axis, if on { "true" } else { "false" })
    }

    /// Adds override classes, applied after everything the table produces.
    ///
    /// Calling this more than once appends.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if class.is_empty() {
            return self;
        }
        self.class = Some(match self.class.take() {
            Some(existing) => format!("{} {}", existing, class),
            None => class.to_string(),
        });
        self
    }

    /// Selects a value in place.
    pub fn insert(&mut self, axis: String, value: String) {
        match self.selections.iter_mut().find(|(a, _)| *a == axis) {
            Some((_, slot)) => *slot = value,
            None => self.selections.push((axis, value)),
        }
    }

    /// Drops the selection for an axis, returning it.
    pub fn remove(&mut self, axis: &str) -> Option<String> {
        let index = self.selections.iter().position(|(a, _)| a == axis)?;
        Some(self.selections.remove(index).1)
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.selections
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, axis: &str) -> bool {
        self.selections.iter().any(|(a, _)| a == axis)
    }

    /// `(axis, value)` selections in the order they were made.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn override_class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Request {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Request::new(), |request, (axis, value)| request.set(axis, value))
    }
}
