//! Turning a table, base classes and a request into one class string.

use once_cell::sync::Lazy;
use swatch_merge::ClassMerger;

use super::error::ResolveError;
use super::policy::UnknownValuePolicy;
use super::request::Request;
use crate::table::VariantTable;

static SHARED: Lazy<Resolver> = Lazy::new(Resolver::new);

/// Resolves a request against a table, collapsing exact duplicates only.
///
/// The result is the base tokens, then each axis's fragment in table order
/// (the selected value when the axis declares it, otherwise the axis default,
/// otherwise nothing), then matching compound fragments, then the override
/// tokens. Unknown values and axes are ignored.
///
/// ```rust
/// use swatch::{resolve, Axis, Request, VariantTable};
///
/// let table = VariantTable::new().axis(
///     Axis::new("size")
///         .value("sm", "h-3 w-3")
///         .value("default", "h-4 w-4")
///         .default_value("default"),
/// );
///
/// let request = Request::new().set("size", "xl");
/// assert_eq!(resolve(&table, "peer rounded", &request), "peer rounded h-4 w-4");
/// ```
pub fn resolve(table: &VariantTable, base: &str, request: &Request) -> String {
    let composition = compose(table, base, request);
    for violation in &composition.violations {
        tracing::debug!(%violation, "ignoring selection");
    }
    swatch_merge::dedupe(&swatch_merge::join(composition.fragments()))
}

/// Fragments in precedence order, plus any selections the table rejected.
struct Composition<'a> {
    /// Base, axis and compound fragments.
    parts: Vec<&'a str>,
    /// The caller's override, kept apart so merging never drops its tokens.
    class: Option<&'a str>,
    violations: Vec<ResolveError>,
}

impl<'a> Composition<'a> {
    fn fragments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parts.iter().copied().chain(self.class)
    }
}

fn compose<'a>(table: &'a VariantTable, base: &'a str, request: &'a Request) -> Composition<'a> {
    let mut violations = Vec::new();
    for (axis, _) in request.selections() {
        if table.get(axis).is_none() {
            violations.push(ResolveError::UnknownAxis {
                axis: axis.to_string(),
            });
        }
    }

    let mut parts = vec![base];
    let mut effective: Vec<(&str, Option<&str>)> = Vec::with_capacity(table.axes().len());

    for axis in table.axes() {
        let value = match request.get(axis.name()) {
            Some(value) if axis.has_value(value) => Some(value),
            Some(value) => {
                violations.push(ResolveError::UnknownValue {
                    axis: axis.name().to_string(),
                    value: value.to_string(),
                    expected: axis.value_names().map(String::from).collect(),
                });
                axis.default()
            }
            None => axis.default(),
        };
        if let Some(fragment) = value.and_then(|v| axis.fragment(v)) {
            parts.push(fragment);
        }
        effective.push((axis.name(), value));
    }

    for compound in table.compounds() {
        let applies = compound.matches(|name| {
            effective
                .iter()
                .find(|(axis, _)| *axis == name)
                .and_then(|(_, value)| *value)
        });
        if applies {
            parts.push(compound.class());
        }
    }

    Composition {
        parts,
        class: request.override_class(),
        violations,
    }
}

/// A configured resolution strategy.
///
/// The default resolver falls back on unknown values and merges conflicting
/// utility classes so later fragments win (`p-2` from the base loses to
/// `p-4` from an override).
///
/// # Example
///
/// ```rust
/// use swatch::{Axis, Request, Resolver, VariantTable};
///
/// let table = VariantTable::new().axis(
///     Axis::new("size")
///         .value("sm", "h-8 px-3")
///         .value("default", "h-9 px-4")
///         .default_value("default"),
/// );
/// let request = Request::new().set("size", "sm").class("px-6");
///
/// let resolver = Resolver::new();
/// assert_eq!(resolver.resolve(&table, "inline-flex px-2", &request), "inline-flex h-8 px-6");
///
/// let strict = Resolver::strict();
/// assert!(strict.try_resolve(&table, "", &Request::new().set("size", "xl")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    policy: UnknownValuePolicy,
    merger: Option<ClassMerger>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            policy: UnknownValuePolicy::Fallback,
            merger: Some(ClassMerger::new()),
        }
    }
}

impl Resolver {
    /// Fallback policy with conflict merging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict policy with conflict merging.
    pub fn strict() -> Self {
        Self::default().with_policy(UnknownValuePolicy::Strict)
    }

    /// Fallback policy, exact-duplicate collapse only.
    ///
    /// Produces the same strings as [`resolve`].
    pub fn plain() -> Self {
        Self {
            policy: UnknownValuePolicy::Fallback,
            merger: None,
        }
    }

    /// The process-wide default resolver.
    pub fn shared() -> &'static Resolver {
        &SHARED
    }

    pub fn with_policy(mut self, policy: UnknownValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Merges with a custom merger.
    pub fn with_merger(mut self, merger: ClassMerger) -> Self {
        self.merger = Some(merger);
        self
    }

    /// Turns conflict merging off.
    pub fn without_merge(mut self) -> Self {
        self.merger = None;
        self
    }

    pub fn policy(&self) -> UnknownValuePolicy {
        self.policy
    }

    pub fn merger(&self) -> Option<&ClassMerger> {
        self.merger.as_ref()
    }

    /// Resolves a request. Never fails.
    ///
    /// Under [`UnknownValuePolicy::Strict`] rejected selections are logged as
    /// warnings and then ignored.
    pub fn resolve(&self, table: &VariantTable, base: &str, request: &Request) -> String {
        let composition = compose(table, base, request);
        for violation in &composition.violations {
            match self.policy {
                UnknownValuePolicy::Fallback => tracing::debug!(%violation, "ignoring selection"),
                UnknownValuePolicy::Strict => {
                    tracing::warn!(%violation, "strict resolution failed, ignoring selection")
                }
            }
        }
        self.finish(&composition)
    }

    /// Resolves a request, failing on the first rejected selection under
    /// [`UnknownValuePolicy::Strict`].
    pub fn try_resolve(
        &self,
        table: &VariantTable,
        base: &str,
        request: &Request,
    ) -> Result<String, ResolveError> {
        let mut composition = compose(table, base, request);
        if self.policy == UnknownValuePolicy::Strict && !composition.violations.is_empty() {
            return Err(composition.violations.swap_remove(0));
        }
        for violation in &composition.violations {
            tracing::debug!(%violation, "ignoring selection");
        }
        Ok(self.finish(&composition))
    }

    fn finish(&self, composition: &Composition<'_>) -> String {
        match &self.merger {
            Some(merger) => merger.merge_over(
                &swatch_merge::join(&composition.parts),
                composition.class.unwrap_or_default(),
            ),
            None => swatch_merge::dedupe(&swatch_merge::join(composition.fragments())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Axis, CompoundVariant};

    fn checkbox() -> VariantTable {
        VariantTable::new().axis(
            Axis::new("size")
                .value("sm", "h-3 w-3")
                .value("default", "h-4 w-4")
                .default_value("default"),
        )
    }

    #[test]
    fn test_scenario_default() {
        assert_eq!(
            resolve(&checkbox(), "peer rounded", &Request::new()),
            "peer rounded h-4 w-4"
        );
    }

    #[test]
    fn test_scenario_explicit() {
        let request = Request::new().set("size", "sm");
        assert_eq!(
            resolve(&checkbox(), "peer rounded", &request),
            "peer rounded h-3 w-3"
        );
    }

    #[test]
    fn test_scenario_invalid_falls_back() {
        let request = Request::new().set("size", "xl");
        assert_eq!(
            resolve(&checkbox(), "peer rounded", &request),
            "peer rounded h-4 w-4"
        );
    }

    #[test]
    fn test_scenario_override() {
        let request = Request::new().set("size", "sm").class("text-red-500");
        assert_eq!(
            resolve(&checkbox(), "peer rounded", &request),
            "peer rounded h-3 w-3 text-red-500"
        );
    }

    #[test]
    fn test_axis_without_default_contributes_nothing() {
        let table = VariantTable::new().axis(Axis::new("tone").value("loud", "font-bold"));
        assert_eq!(resolve(&table, "x", &Request::new()), "x");
        assert_eq!(
            resolve(&table, "x", &Request::new().set("tone", "quiet")),
            "x"
        );
    }

    #[test]
    fn test_axes_follow_table_order() {
        let table = VariantTable::new()
            .axis(Axis::new("a").value("on", "first").default_value("on"))
            .axis(Axis::new("b").value("on", "second").default_value("on"));
        let request = Request::new().set("b", "on").set("a", "on");
        assert_eq!(resolve(&table, "", &request), "first second");
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let table = VariantTable::new().axis(
            Axis::new("size")
                .value("sm", "rounded h-3")
                .default_value("sm"),
        );
        let request = Request::new().class("h-3 mt-1");
        assert_eq!(resolve(&table, "rounded", &request), "rounded h-3 mt-1");
    }

    #[test]
    fn test_empty_everything() {
        assert_eq!(resolve(&VariantTable::new(), "", &Request::new()), "");
    }

    #[test]
    fn test_compound_on_default_value() {
        let table = VariantTable::new()
            .axis(
                Axis::new("variant")
                    .value("default", "")
                    .value("underline", "border-b")
                    .default_value("default"),
            )
            .axis(
                Axis::new("orientation")
                    .value("horizontal", "flex-row")
                    .value("vertical", "flex-col")
                    .default_value("horizontal"),
            )
            .compound(
                CompoundVariant::new("border-b-0 border-l")
                    .when("variant", "underline")
                    .when("orientation", "vertical"),
            )
            .compound(
                CompoundVariant::new("gap-1")
                    .when("variant", "default")
                    .when("orientation", "horizontal"),
            );

        assert_eq!(resolve(&table, "", &Request::new()), "flex-row gap-1");

        let request = Request::new()
            .set("variant", "underline")
            .set("orientation", "vertical")
            .class("p-1");
        assert_eq!(
            resolve(&table, "", &request),
            "border-b flex-col border-b-0 border-l p-1"
        );
    }

    #[test]
    fn test_compound_uses_fallback_value() {
        let table = VariantTable::new()
            .axis(
                Axis::new("size")
                    .value("sm", "")
                    .value("lg", "")
                    .default_value("sm"),
            )
            .compound(CompoundVariant::new("hit").when("size", "sm"));
        let request = Request::new().set("size", "huge");
        assert_eq!(resolve(&table, "", &request), "hit");
    }

    #[test]
    fn test_merging_resolver_lets_override_win() {
        let table = VariantTable::new().axis(
            Axis::new("size")
                .value("sm", "h-8 px-3 text-xs")
                .default_value("sm"),
        );
        let request = Request::new().class("px-5 text-sm");
        assert_eq!(
            Resolver::new().resolve(&table, "inline-flex px-4", &request),
            "inline-flex h-8 px-5 text-sm"
        );
        assert_eq!(
            Resolver::plain().resolve(&table, "inline-flex px-4", &request),
            "inline-flex px-4 h-8 px-3 text-xs px-5 text-sm"
        );
    }

    #[test]
    fn test_merging_resolver_keeps_conflicting_override_tokens() {
        let resolver = Resolver::new();
        assert_eq!(
            resolver.resolve(&checkbox(), "peer rounded", &Request::new().class("px-4 p-3")),
            "peer rounded h-4 w-4 px-4 p-3"
        );
        assert_eq!(
            resolver.resolve(
                &checkbox(),
                "peer rounded text-xs",
                &Request::new().class("text-sm leading-tight text-lg")
            ),
            "peer rounded h-4 w-4 text-sm leading-tight text-lg"
        );
    }

    #[test]
    fn test_strict_unknown_value() {
        let err = Resolver::strict()
            .try_resolve(&checkbox(), "", &Request::new().set("size", "xl"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownValue {
                axis: "size".to_string(),
                value: "xl".to_string(),
                expected: vec!["sm".to_string(), "default".to_string()],
            }
        );
    }

    #[test]
    fn test_strict_unknown_axis() {
        let err = Resolver::strict()
            .try_resolve(&checkbox(), "", &Request::new().set("tone", "loud"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownAxis {
                axis: "tone".to_string()
            }
        );
    }

    #[test]
    fn test_strict_infallible_path_falls_back() {
        let request = Request::new().set("size", "xl");
        assert_eq!(
            Resolver::strict().resolve(&checkbox(), "peer", &request),
            "peer h-4 w-4"
        );
    }

    #[test]
    fn test_fallback_try_resolve_succeeds() {
        let request = Request::new().set("size", "xl").set("tone", "loud");
        assert_eq!(
            Resolver::new().try_resolve(&checkbox(), "peer", &request),
            Ok("peer h-4 w-4".to_string())
        );
    }

    #[test]
    fn test_shared_is_default() {
        assert_eq!(Resolver::shared().policy(), UnknownValuePolicy::Fallback);
        assert!(Resolver::shared().merger().is_some());
    }
}
