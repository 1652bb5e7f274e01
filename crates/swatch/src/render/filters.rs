//! MiniJinja filter registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, Rest, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::catalog::{Catalog, CatalogError};
use crate::resolve::{Request, Resolver};

/// Registers the `variant` filter and the `cx` function.
///
/// - `{{ "badge" | variant(variant="outline", size="sm", class="ml-2") }}`
///   resolves a catalog recipe. Every keyword argument except `class` selects
///   an axis value; booleans select `"true"`/`"false"`.
/// - `{{ cx("px-2", extra, none) }}` merges any number of class strings,
///   skipping `none`, undefined and `false`.
pub fn register_filters(env: &mut Environment<'static>, catalog: Arc<Catalog>, resolver: Resolver) {
    let merge_with = resolver.clone();

    env.add_filter(
        "variant",
        move |name: String, kwargs: Kwargs| -> Result<String, Error> {
            let mut request = Request::new();
            for key in kwargs.args() {
                let value: Value = kwargs.get(key)?;
                if value.is_none() || value.is_undefined() {
                    continue;
                }
                request = if key == "class" {
                    request.class(value.to_string())
                } else {
                    request.set(key, value.to_string())
                };
            }

            let recipe = catalog.get(&name).ok_or_else(|| CatalogError::UnknownRecipe {
                name: name.clone(),
                available: catalog.names().map(String::from).collect(),
            });
            recipe
                .and_then(|recipe| Ok(recipe.try_resolve_with(&resolver, &request)?))
                .map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))
        },
    );

    env.add_function("cx", move |args: Rest<Value>| -> String {
        let parts = args
            .iter()
            .filter(|value| !value.is_none() && !value.is_undefined())
            .filter(|value| !(value.kind() == ValueKind::Bool && !value.is_true()))
            .map(|value| value.to_string())
            .collect::<Vec<_>>();
        let joined = swatch_merge::join(&parts);
        match merge_with.merger() {
            Some(merger) => merger.merge(&joined),
            None => swatch_merge::dedupe(&joined),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_filters(&mut env, Arc::new(Catalog::builtin()), Resolver::new());
        env
    }

    #[test]
    fn test_variant_filter() {
        let out = env()
            .render_str(r#"{{ "checkbox" | variant(size="sm") }}"#, context! {})
            .unwrap();
        assert!(out.ends_with("h-3 w-3"));
    }

    #[test]
    fn test_variant_filter_class_override() {
        let out = env()
            .render_str(
                r#"{{ "table.cell" | variant(density="compact", class="px-0") }}"#,
                context! {},
            )
            .unwrap();
        assert_eq!(
            out,
            "align-middle whitespace-nowrap [&:has([role=checkbox])]:pr-0 py-1 text-xs px-0"
        );
    }

    #[test]
    fn test_variant_filter_from_context() {
        let out = env()
            .render_str(
                r#"{{ "label" | variant(size=size) }}"#,
                context! { size => "sm" },
            )
            .unwrap();
        assert!(out.ends_with("text-xs leading-none"));
    }

    #[test]
    fn test_variant_filter_unknown_recipe() {
        let err = env()
            .render_str(r#"{{ "buton" | variant() }}"#, context! {})
            .unwrap_err();
        assert!(err.to_string().contains("unknown recipe 'buton'"));
    }

    #[test]
    fn test_variant_filter_strict() {
        let mut env = Environment::new();
        register_filters(&mut env, Arc::new(Catalog::builtin()), Resolver::strict());
        let result = env.render_str(r#"{{ "badge" | variant(size="huge") }}"#, context! {});
        assert!(result.is_err());
    }

    #[test]
    fn test_cx() {
        let out = env()
            .render_str(
                r#"{{ cx("p-2 rounded", none, false, extra) }}"#,
                context! { extra => "p-4" },
            )
            .unwrap();
        assert_eq!(out, "rounded p-4");
    }
}
