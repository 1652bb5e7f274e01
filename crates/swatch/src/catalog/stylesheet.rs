//! Stylesheet files: named recipes and resolver settings in YAML or JSON.
//!
//! ```yaml
//! resolver:
//!   policy: strict
//! recipes:
//!   badge:
//!     base: inline-flex items-center rounded-md border
//!     variants:
//!       variant:
//!         default: bg-primary text-primary-foreground
//!         outline: text-foreground
//!     defaults:
//!       variant: default
//!     compounds:
//!       - when: { variant: outline }
//!         class: border-dashed
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::StylesheetError;
use crate::resolve::ResolverConfig;
use crate::table::{OrderedMap, Recipe, RecipeDef};

/// A parsed and validated stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    resolver: Option<ResolverConfig>,
    recipes: OrderedMap<Recipe>,
}

/// On-disk shape. Recipes are validated one by one afterwards so errors can
/// name the recipe.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StylesheetDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolver: Option<ResolverConfig>,
    #[serde(default)]
    recipes: OrderedMap<RecipeDef>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML stylesheet.
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let def: StylesheetDef = serde_yaml::from_str(source)?;
        Self::from_def(def)
    }

    /// Parses a JSON stylesheet.
    pub fn from_json(source: &str) -> Result<Self, StylesheetError> {
        let def: StylesheetDef = serde_json::from_str(source)?;
        Self::from_def(def)
    }

    /// Loads a stylesheet, choosing the format by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, StylesheetError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => return Err(StylesheetError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stylesheet = parse(&source)?;
        tracing::debug!(
            path = %path.display(),
            recipes = stylesheet.recipes.len(),
            "loaded stylesheet"
        );
        Ok(stylesheet)
    }

    fn from_def(def: StylesheetDef) -> Result<Self, StylesheetError> {
        let mut recipes = OrderedMap::new();
        for (name, recipe) in def.recipes {
            let recipe = Recipe::try_from(recipe).map_err(|source| StylesheetError::Invalid {
                recipe: name.clone(),
                source,
            })?;
            recipes.insert(name, recipe);
        }
        Ok(Self {
            resolver: def.resolver,
            recipes,
        })
    }

    /// Adds a recipe, returning the updated stylesheet for chaining.
    pub fn recipe(mut self, name: impl Into<String>, recipe: Recipe) -> Self {
        self.recipes.insert(name, recipe);
        self
    }

    /// Sets the resolver configuration, returning the updated stylesheet.
    pub fn resolver(mut self, config: ResolverConfig) -> Self {
        self.resolver = Some(config);
        self
    }

    pub fn resolver_config(&self) -> Option<&ResolverConfig> {
        self.resolver.as_ref()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// `(name, recipe)` pairs in file order.
    pub fn recipes(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Option<ResolverConfig>, OrderedMap<Recipe>) {
        (self.resolver, self.recipes)
    }

    /// Serializes to YAML in the same shape [`Stylesheet::from_yaml`] reads.
    pub fn to_yaml(&self) -> Result<String, StylesheetError> {
        Ok(serde_yaml::to_string(&self.to_def())?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StylesheetError> {
        Ok(serde_json::to_string_pretty(&self.to_def())?)
    }

    fn to_def(&self) -> StylesheetDef {
        StylesheetDef {
            resolver: self.resolver,
            recipes: self
                .recipes
                .iter()
                .map(|(name, recipe)| (name, RecipeDef::from(recipe.clone())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Request, UnknownValuePolicy};
    use crate::table::TableError;

    const BADGE: &str = r#"
resolver:
  policy: strict
recipes:
  badge:
    base: inline-flex rounded-md
    variants:
      variant:
        default: bg-primary
        outline: border
    defaults:
      variant: default
    compounds:
      - when: { variant: outline }
        class: border-dashed
  spacer:
    base: grow
"#;

    #[test]
    fn test_from_yaml() {
        let sheet = Stylesheet::from_yaml(BADGE).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.resolver_config().map(|c| c.policy),
            Some(UnknownValuePolicy::Strict)
        );

        let badge = sheet.get("badge").unwrap();
        assert_eq!(
            badge.resolve(&Request::new().set("variant", "outline")),
            "inline-flex rounded-md border border-dashed"
        );
        assert_eq!(
            sheet.recipes().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["badge", "spacer"]
        );
    }

    #[test]
    fn test_invalid_recipe_is_named() {
        let yaml = "recipes:\n  chip:\n    variants:\n      size: { sm: h-3 }\n    defaults:\n      size: xl\n";
        match Stylesheet::from_yaml(yaml) {
            Err(StylesheetError::Invalid { recipe, source }) => {
                assert_eq!(recipe, "chip");
                assert!(matches!(source, TableError::UnknownDefault { .. }));
            }
            other => panic!("expected invalid recipe, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_top_level_key() {
        let result = Stylesheet::from_yaml("recipe: {}\n");
        assert!(matches!(result, Err(StylesheetError::Yaml(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"recipes": {"chip": {"base": "px-2", "variants": {"size": {"sm": "h-3"}}}}}"#;
        let sheet = Stylesheet::from_json(json).unwrap();
        assert!(sheet.resolver_config().is_none());
        assert_eq!(
            sheet.get("chip").unwrap().resolve(&Request::new().set("size", "sm")),
            "px-2 h-3"
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let result = Stylesheet::from_path("theme.toml");
        assert!(matches!(result, Err(StylesheetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let sheet = Stylesheet::from_yaml(BADGE).unwrap();
        let again = Stylesheet::from_yaml(&sheet.to_yaml().unwrap()).unwrap();
        assert_eq!(again, sheet);
    }

    #[test]
    fn test_builder() {
        let sheet = Stylesheet::new()
            .recipe("chip", Recipe::new("px-2"))
            .resolver(ResolverConfig::default());
        assert_eq!(sheet.len(), 1);
        assert!(sheet.resolver_config().is_some());
    }
}
