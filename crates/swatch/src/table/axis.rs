//! A single style axis: named discrete values mapped to class fragments.

use super::ordered::OrderedMap;
use crate::AxisValue;

/// A named style dimension with a closed set of values.
///
/// Each value maps to a class fragment. An axis may name one of its values
/// as the default, applied when a request leaves the axis out.
///
/// # Example
///
/// ```rust
/// use swatch::Axis;
///
/// let size = Axis::new("size")
///     .value("sm", "h-3 w-3")
///     .value("default", "h-4 w-4")
///     .default_value("default");
///
/// assert_eq!(size.fragment("sm"), Some("h-3 w-3"));
/// assert_eq!(size.default(), Some("default"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    values: OrderedMap<String>,
    default: Option<String>,
}

impl Axis {
    /// Creates an axis with no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: OrderedMap::new(),
            default: None,
        }
    }

    /// Creates a two-state axis with the values `"true"` and `"false"`.
    ///
    /// The axis defaults to `"false"`.
    pub fn boolean(
        name: impl Into<String>,
        on: impl Into<String>,
        off: impl Into<String>,
    ) -> Self {
        Self::new(name)
            .value("true", on)
            .value("false", off)
            .default_value("false")
    }

    /// Creates an axis driven by a typed enum.
    ///
    /// The axis takes its name and default from `V`; each entry pairs an enum
    /// value with its class fragment.
    ///
    /// ```rust
    /// use swatch::Axis;
    ///
    /// #[derive(Clone, Copy, Axis)]
    /// #[axis(name = "density")]
    /// enum Density {
    ///     Compact,
    ///     #[axis(default)]
    ///     Default,
    /// }
    ///
    /// let axis = Axis::typed([(Density::Compact, "py-1"), (Density::Default, "py-2")]);
    /// assert_eq!(axis.name(), "density");
    /// assert_eq!(axis.default(), Some("default"));
    /// ```
    pub fn typed<V, I, S>(entries: I) -> Self
    where
        V: AxisValue,
        I: IntoIterator<Item = (V, S)>,
        S: Into<String>,
    {
        let mut axis = Self::new(V::AXIS);
        for (value, fragment) in entries {
            axis = axis.value(value.value_name(), fragment);
        }
        match V::DEFAULT {
            Some(default) => axis.default_value(default),
            None => axis,
        }
    }

    /// Adds a value, returning the updated axis for chaining.
    ///
    /// Adding a value name twice replaces the earlier fragment but keeps its
    /// position.
    pub fn value(mut self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.values.insert(name, fragment.into());
        self
    }

    /// Names the value used when a request omits this axis.
    pub fn default_value(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Class fragment for a value name.
    pub fn fragment(&self, value: &str) -> Option<&str> {
        self.values.get(value).map(String::as_str)
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.contains_key(value)
    }

    /// Value names in declaration order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    /// `(value name, fragment)` pairs in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub(crate) fn from_parts(
        name: String,
        values: OrderedMap<String>,
        default: Option<String>,
    ) -> Self {
        Self {
            name,
            values,
            default,
        }
    }

    pub(crate) fn values_map(&self) -> &OrderedMap<String> {
        &self.values
    }
}
