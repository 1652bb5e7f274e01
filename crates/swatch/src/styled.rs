//! Building element props from a recipe, selections and pass-through
//! attributes.

use std::borrow::Cow;

use crate::attrs::{Attributes, ElementProps};
use crate::resolve::{Request, ResolveError, Resolver};
use crate::table::Recipe;
use crate::AxisValue;

/// Builder for the props of one styled element.
///
/// Three kinds of input meet here:
///
/// - typed selections and an override class from the caller,
/// - pass-through attributes the caller hands to the underlying element,
/// - named attributes the component sets itself (such as `data-slot`).
///
/// On build, named attributes win over pass-through entries of the same
/// name. A pass-through `class` is merged before the override class, so the
/// override wins conflicts. A pass-through entry named like one of the
/// recipe's axes selects that axis when no typed selection was made, and is
/// never forwarded.
///
/// # Example
///
/// ```rust
/// use swatch::components::badge::{self, BadgeVariant};
///
/// let props = badge::badge()
///     .with(BadgeVariant::Outline)
///     .attr("id", "status")
///     .class("px-1")
///     .build();
///
/// assert_eq!(props.attr("data-slot"), Some("badge"));
/// assert_eq!(props.attr("id"), Some("status"));
/// assert!(props.class.ends_with("px-1"));
/// ```
#[derive(Debug, Clone)]
pub struct Styled<'r> {
    recipe: Cow<'r, Recipe>,
    request: Request,
    class: String,
    passthrough: Attributes,
    named: Attributes,
}

impl<'r> Styled<'r> {
    pub fn new(recipe: &'r Recipe) -> Self {
        Self::from_cow(Cow::Borrowed(recipe))
    }

    fn from_cow(recipe: Cow<'r, Recipe>) -> Self {
        Self {
            recipe,
            request: Request::new(),
            class: String::new(),
            passthrough: Attributes::new(),
            named: Attributes::new(),
        }
    }

    /// Selects a typed axis value.
    pub fn with<V: AxisValue>(mut self, value: V) -> Self {
        self.request = self.request.with(value);
        self
    }

    /// Selects an axis value by name.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.request = self.request.set(axis, value);
        self
    }

    /// Selects a boolean state axis.
    pub fn flag(mut self, axis: impl Into<String>, on: bool) -> Self {
        self.request = self.request.flag(axis, on);
        self
    }

    /// Adds override classes.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.class = swatch_merge::join([self.class.as_str(), class.as_ref()]);
        self
    }

    /// Adds a pass-through attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.passthrough.insert(name, value);
        self
    }

    /// Adds every entry of a pass-through bag.
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.passthrough = attrs.merge_over(self.passthrough);
        self
    }

    /// Sets an attribute owned by the component.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name, value);
        self
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Builds with the shared default resolver.
    pub fn build(self) -> ElementProps {
        self.build_with(Resolver::shared())
    }

    /// Builds with a specific resolver. Never fails.
    pub fn build_with(self, resolver: &Resolver) -> ElementProps {
        let (recipe, request, attributes) = self.prepare(resolver);
        ElementProps {
            class: recipe.resolve_with(resolver, &request),
            attributes,
        }
    }

    /// Builds with a specific resolver, reporting rejected selections.
    pub fn try_build_with(self, resolver: &Resolver) -> Result<ElementProps, ResolveError> {
        let (recipe, request, attributes) = self.prepare(resolver);
        Ok(ElementProps {
            class: recipe.try_resolve_with(resolver, &request)?,
            attributes,
        })
    }

    fn prepare(self, resolver: &Resolver) -> (Cow<'r, Recipe>, Request, Attributes) {
        let Styled {
            recipe,
            mut request,
            class,
            mut passthrough,
            named,
        } = self;

        for axis in recipe.table().axes() {
            if let Some(value) = passthrough.remove(axis.name()) {
                if request.contains(axis.name()) {
                    tracing::debug!(axis = axis.name(), %value, "typed selection wins over attribute");
                } else {
                    request.insert(axis.name().to_string(), value);
                }
            }
        }

        // The pass-through class loses conflicts to the caller's own class.
        let class = match passthrough.remove("class") {
            Some(passed) => match resolver.merger() {
                Some(merger) => merger.merge_over(&passed, &class),
                None => swatch_merge::join([passed.as_str(), class.as_str()]),
            },
            None => class,
        };
        request = request.class(class);

        (recipe, request, named.merge_over(passthrough))
    }
}

impl Styled<'static> {
    /// Builds over an owned recipe.
    pub fn owned(recipe: Recipe) -> Self {
        Self::from_cow(Cow::Owned(recipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Axis;

    fn recipe() -> Recipe {
        Recipe::new("inline-flex px-2").axis(
            Axis::new("size")
                .value("sm", "h-8 px-3")
                .value("default", "h-9 px-4")
                .default_value("default"),
        )
    }

    #[test]
    fn test_build_defaults() {
        let recipe = recipe();
        let props = Styled::new(&recipe).named("data-slot", "button").build();
        assert_eq!(props.class, "inline-flex h-9 px-4");
        assert_eq!(props.attr("data-slot"), Some("button"));
    }

    #[test]
    fn test_named_beats_passthrough() {
        let props = Styled::owned(recipe())
            .attr("data-slot", "spoofed")
            .named("data-slot", "button")
            .build();
        assert_eq!(props.attr("data-slot"), Some("button"));
    }

    #[test]
    fn test_passthrough_class_loses_to_override() {
        let props = Styled::owned(recipe())
            .attr("class", "px-5 mt-1")
            .class("px-6")
            .build();
        assert_eq!(props.class, "inline-flex h-9 mt-1 px-6");
        assert!(!props.attributes.contains("class"));
    }

    #[test]
    fn test_override_keeps_its_own_conflicting_tokens() {
        let props = Styled::owned(recipe())
            .attr("class", "p-1")
            .class("px-6 p-2")
            .build();
        assert_eq!(props.class, "inline-flex h-9 px-6 p-2");
    }

    #[test]
    fn test_passthrough_axis_selects_when_untyped() {
        let props = Styled::owned(recipe()).attr("size", "sm").build();
        assert_eq!(props.class, "inline-flex h-8 px-3");
        assert!(props.attributes.is_empty());
    }

    #[test]
    fn test_typed_selection_beats_passthrough_axis() {
        let props = Styled::owned(recipe())
            .set("size", "default")
            .attr("size", "sm")
            .build();
        assert_eq!(props.class, "inline-flex h-9 px-4");
        assert!(!props.attributes.contains("size"));
    }

    #[test]
    fn test_try_build_strict() {
        let err = Styled::owned(recipe())
            .set("size", "huge")
            .try_build_with(&Resolver::strict())
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnknownValue { .. }));
    }

    #[test]
    fn test_plain_resolver_keeps_conflicts() {
        let props = Styled::owned(recipe())
            .set("size", "sm")
            .build_with(&Resolver::plain());
        assert_eq!(props.class, "inline-flex px-2 h-8 px-3");
    }
}
