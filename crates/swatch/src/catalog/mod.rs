//! Named recipe registry.
//!
//! A [`Catalog`] maps names (`"badge"`, `"checkbox.indicator"`) to recipes
//! and carries the [`Resolver`] used to resolve them. [`Catalog::builtin`]
//! registers every built-in component part; a [`Stylesheet`] loaded from
//! YAML or JSON can then replace or extend them.
//!
//! # Example
//!
//! ```rust
//! use swatch::{Catalog, Request, Stylesheet};
//!
//! let sheet = Stylesheet::from_yaml(
//!     r#"
//! recipes:
//!   badge:
//!     base: inline-flex rounded-full
//!     variants:
//!       tone: { calm: bg-sky-100, loud: bg-red-500 }
//!     defaults: { tone: calm }
//! "#,
//! )
//! .unwrap();
//!
//! let mut catalog = Catalog::builtin();
//! catalog.apply(sheet);
//!
//! let class = catalog.resolve("badge", &Request::new().set("tone", "loud")).unwrap();
//! assert_eq!(class, "inline-flex rounded-full bg-red-500");
//! ```

mod error;
mod stylesheet;

use std::borrow::Cow;

pub use error::{CatalogError, StylesheetError};
pub use stylesheet::Stylesheet;

use crate::components;
use crate::resolve::{Request, Resolver};
use crate::styled::Styled;
use crate::table::Recipe;

/// Ordered registry of named recipes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<(String, Cow<'static, Recipe>)>,
    resolver: Resolver,
}

impl Catalog {
    /// Creates an empty catalog with the default resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding every built-in component part.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, recipe) in components::all() {
            catalog.push(name.to_string(), Cow::Borrowed(recipe));
        }
        catalog
    }

    /// Replaces the resolver, returning the updated catalog for chaining.
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn set_resolver(&mut self, resolver: Resolver) {
        self.resolver = resolver;
    }

    /// Registers a recipe. An existing recipe of the same name is replaced in
    /// place and returned.
    pub fn insert(&mut self, name: impl Into<String>, recipe: Recipe) -> Option<Recipe> {
        self.push(name.into(), Cow::Owned(recipe))
            .map(Cow::into_owned)
    }

    fn push(&mut self, name: String, recipe: Cow<'static, Recipe>) -> Option<Cow<'static, Recipe>> {
        match self.recipes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, recipe)),
            None => {
                self.recipes.push((name, recipe));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, recipe)| recipe.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Recipe names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes
            .iter()
            .map(|(name, recipe)| (name.as_str(), recipe.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&Recipe, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownRecipe {
            name: name.to_string(),
            available: self.names().map(String::from).collect(),
        })
    }

    /// Resolves a named recipe. Only an unknown name is an error; unknown
    /// values fall back whatever the resolver's policy.
    pub fn resolve(&self, name: &str, request: &Request) -> Result<String, CatalogError> {
        Ok(self.lookup(name)?.resolve_with(&self.resolver, request))
    }

    /// Resolves a named recipe, honoring the resolver's policy.
    pub fn try_resolve(&self, name: &str, request: &Request) -> Result<String, CatalogError> {
        Ok(self.lookup(name)?.try_resolve_with(&self.resolver, request)?)
    }

    /// Starts a [`Styled`] builder for a named recipe, tagged with the
    /// matching `data-slot` (`checkbox.indicator` becomes
    /// `checkbox-indicator`).
    pub fn styled(&self, name: &str) -> Result<Styled<'_>, CatalogError> {
        let recipe = self.lookup(name)?;
        Ok(Styled::new(recipe).named("data-slot", name.replace('.', "-")))
    }

    /// Checks every recipe, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, recipe) in self.iter() {
            recipe.validate().map_err(|source| CatalogError::Invalid {
                name: name.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Lays a stylesheet over the catalog.
    ///
    /// Recipes with an existing name replace it in place; new names are
    /// appended in file order. A resolver section replaces the resolver.
    pub fn apply(&mut self, stylesheet: Stylesheet) {
        let (config, recipes) = stylesheet.into_parts();
        for (name, recipe) in recipes {
            if self.insert(name.clone(), recipe).is_some() {
                tracing::debug!(recipe = %name, "stylesheet replaced recipe");
            }
        }
        if let Some(config) = config {
            self.resolver = config.build();
        }
    }
}
