//! Recipes: a base class string paired with a variant table.

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use super::compound::CompoundVariant;
use super::error::TableError;
use super::ordered::{scalar_values, OrderedMap};
use super::variant_table::{TableDef, VariantTable};
use crate::resolve::{Request, ResolveError, Resolver};

/// Base classes plus the variant table that refines them.
///
/// A recipe is what a styled part of a component is built from: the base
/// classes are always present, the table adds per-axis fragments.
///
/// # Example
///
/// ```rust
/// use swatch::{Axis, Recipe, Request};
///
/// let recipe = Recipe::new("peer rounded").axis(
///     Axis::new("size")
///         .value("sm", "h-3 w-3")
///         .value("default", "h-4 w-4")
///         .default_value("default"),
/// );
///
/// assert_eq!(recipe.resolve(&Request::new()), "peer rounded h-4 w-4");
/// assert_eq!(
///     recipe.resolve(&Request::new().set("size", "sm")),
///     "peer rounded h-3 w-3"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDef", into = "RecipeDef")]
pub struct Recipe {
    base: String,
    table: VariantTable,
}

impl Recipe {
    /// Creates a recipe with no axes.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            table: VariantTable::new(),
        }
    }

    /// Creates a recipe from an existing table.
    pub fn with_table(base: impl Into<String>, table: VariantTable) -> Self {
        Self {
            base: base.into(),
            table,
        }
    }

    /// Appends an axis, returning the updated recipe for chaining.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.table = self.table.axis(axis);
        self
    }

    /// Appends a compound variant, returning the updated recipe for chaining.
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.table = self.table.compound(compound);
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn table(&self) -> &VariantTable {
        &self.table
    }

    pub fn validate(&self) -> Result<(), TableError> {
        self.table.validate()
    }

    /// Resolves with the shared default resolver.
    pub fn resolve(&self, request: &Request) -> String {
        Resolver::shared().resolve(&self.table, &self.base, request)
    }

    /// Resolves with a specific resolver.
    pub fn resolve_with(&self, resolver: &Resolver, request: &Request) -> String {
        resolver.resolve(&self.table, &self.base, request)
    }

    /// Resolves with a specific resolver, reporting policy violations.
    pub fn try_resolve_with(
        &self,
        resolver: &Resolver,
        request: &Request,
    ) -> Result<String, ResolveError> {
        resolver.try_resolve(&self.table, &self.base, request)
    }
}

/// Serialized form of a [`Recipe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDef {
    #[serde(default)]
    pub base: String,
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub variants: OrderedMap<OrderedMap<String>>,
    #[serde(
        default,
        deserialize_with = "scalar_values",
        skip_serializing_if = "OrderedMap::is_empty"
    )]
    pub defaults: OrderedMap<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compounds: Vec<CompoundVariant>,
}

impl TryFrom<RecipeDef> for Recipe {
    type Error = TableError;

    fn try_from(def: RecipeDef) -> Result<Self, Self::Error> {
        let table = VariantTable::try_from(TableDef {
            variants: def.variants,
            defaults: def.defaults,
            compounds: def.compounds,
        })?;
        Ok(Recipe::with_table(def.base, table))
    }
}

impl From<Recipe> for RecipeDef {
    fn from(recipe: Recipe) -> Self {
        let table = TableDef::from(recipe.table);
        RecipeDef {
            base: recipe.base,
            variants: table.variants,
            defaults: table.defaults,
            compounds: table.compounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox() -> Recipe {
        Recipe::new("peer rounded").axis(
            Axis::new("size")
                .value("sm", "h-3 w-3")
                .value("default", "h-4 w-4")
                .default_value("default"),
        )
    }

    #[test]
    fn test_resolve_with_default() {
        assert_eq!(checkbox().resolve(&Request::new()), "peer rounded h-4 w-4");
    }

    #[test]
    fn test_resolve_with_override() {
        let request = Request::new().set("size", "sm").class("text-red-500");
        assert_eq!(
            checkbox().resolve(&request),
            "peer rounded h-3 w-3 text-red-500"
        );
    }

    #[test]
    fn test_try_resolve_with_strict() {
        let resolver = Resolver::strict();
        let request = Request::new().set("size", "xl");
        assert!(checkbox().try_resolve_with(&resolver, &request).is_err());
    }

    #[test]
    fn test_yaml_recipe() {
        let yaml = r#"
base: peer rounded
variants:
  size:
    sm: h-3 w-3
    default: h-4 w-4
defaults:
  size: default
"#;
        let recipe: Recipe = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(recipe, checkbox());
    }

    #[test]
    fn test_yaml_rejects_unknown_field() {
        let yaml = "base: x\nvariant: {}\n";
        assert!(serde_yaml::from_str::<Recipe>(yaml).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let recipe = Recipe::new("x")
            .axis(Axis::new("tone").value("loud", "a").value("quiet", "b"))
            .axis(Axis::new("size").value("lg", "c").value("sm", "d"))
            .compound(CompoundVariant::new("e").when("tone", "quiet").when("size", "lg"));

        let json = serde_json::to_string(&recipe).unwrap();
        assert_eq!(
            json,
            r#"{"base":"x","variants":{"tone":{"loud":"a","quiet":"b"},"size":{"lg":"c","sm":"d"}},"compounds":[{"when":{"tone":"quiet","size":"lg"},"class":"e"}]}"#
        );
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
