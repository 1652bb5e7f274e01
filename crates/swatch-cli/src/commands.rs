//! Command handlers. Each returns the text to print on stdout.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use swatch::{Catalog, Recipe, Stylesheet, UnknownValuePolicy};

use crate::cli::{Command, ResolveArgs};

/// Runs a command against the built-in catalog, overlaid with `stylesheet`.
pub fn run(command: &Command, stylesheet: Option<&Path>) -> Result<String> {
    match command {
        Command::Check { file } => check(file),
        Command::Merge { classes } => merge(&load_catalog(stylesheet)?, classes),
        Command::Resolve(args) => resolve(&load_catalog(stylesheet)?, args),
        Command::List { recipe } => {
            let catalog = load_catalog(stylesheet)?;
            match recipe {
                Some(name) => describe(&catalog, name),
                None => Ok(catalog.names().collect::<Vec<_>>().join("\n")),
            }
        }
    }
}

fn load_catalog(stylesheet: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = stylesheet {
        let sheet = Stylesheet::from_path(path)
            .with_context(|| format!("loading stylesheet {}", path.display()))?;
        tracing::debug!(path = %path.display(), recipes = sheet.len(), "applying stylesheet");
        catalog.apply(sheet);
    }
    Ok(catalog)
}

fn resolve(catalog: &Catalog, args: &ResolveArgs) -> Result<String> {
    let mut resolver = catalog.resolver().clone();
    if args.strict {
        resolver = resolver.with_policy(UnknownValuePolicy::Strict);
    }
    if args.no_merge {
        resolver = resolver.without_merge();
    }

    let mut styled = catalog.styled(&args.recipe)?;
    for (axis, value) in &args.selections {
        styled = styled.set(axis, value);
    }
    if let Some(class) = &args.class {
        styled = styled.class(class);
    }

    let props = styled
        .try_build_with(&resolver)
        .with_context(|| format!("resolving '{}'", args.recipe))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&props)?)
    } else {
        Ok(props.class)
    }
}

/// Merges with the catalog's resolver, so a stylesheet that turns merging
/// off only collapses exact duplicates.
fn merge(catalog: &Catalog, classes: &[String]) -> Result<String> {
    let joined = swatch::merge::join(classes);
    Ok(match catalog.resolver().merger() {
        Some(merger) => merger.merge(&joined),
        None => swatch::merge::dedupe(&joined),
    })
}

fn describe(catalog: &Catalog, name: &str) -> Result<String> {
    let recipe = catalog
        .get(name)
        .with_context(|| format!("unknown recipe '{}'", name))?;
    Ok(describe_recipe(name, recipe))
}

fn describe_recipe(name: &str, recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name);
    let _ = writeln!(out, "  base: {}", recipe.base());
    for axis in recipe.table().axes() {
        let values: Vec<String> = axis
            .value_names()
            .map(|value| {
                if axis.default() == Some(value) {
                    format!("{}*", value)
                } else {
                    value.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "  {}: {}", axis.name(), values.join(" | "));
    }
    for compound in recipe.table().compounds() {
        let when: Vec<String> = compound
            .conditions()
            .map(|(axis, value)| format!("{}={}", axis, value))
            .collect();
        let _ = writeln!(out, "  when {}: {}", when.join(", "), compound.class());
    }
    out.trim_end().to_string()
}

fn check(file: &Path) -> Result<String> {
    let sheet = Stylesheet::from_path(file)
        .with_context(|| format!("checking {}", file.display()))?;
    let mut catalog = Catalog::new();
    catalog.apply(sheet);
    catalog.validate()?;
    Ok(format!(
        "{}: ok ({} recipes)",
        file.display(),
        catalog.len()
    ))
}
