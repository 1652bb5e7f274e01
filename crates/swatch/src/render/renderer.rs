//! Pre-compiled template renderer.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use super::filters::register_filters;
use crate::catalog::Catalog;

/// A renderer with pre-registered templates over a recipe catalog.
///
/// Templates are compiled once and reused. The catalog's resolver decides
/// the unknown-value policy and whether classes are conflict-merged.
///
/// # Example
///
/// ```rust
/// use swatch::{Catalog, Renderer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Row { name: String, status: String }
///
/// let mut renderer = Renderer::new(Catalog::builtin()).unwrap();
/// renderer
///     .add_template(
///         "status",
///         r#"<span class="{{ "badge" | variant(variant=status) }}">{{ name }}</span>"#,
///     )
///     .unwrap();
///
/// let html = renderer
///     .render("status", &Row { name: "api".into(), status: "destructive".into() })
///     .unwrap();
/// assert!(html.contains("bg-destructive"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
    catalog: Arc<Catalog>,
}

impl Renderer {
    /// Creates a renderer over a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if any recipe in the catalog does not validate.
    pub fn new(catalog: Catalog) -> Result<Self, Error> {
        catalog
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let resolver = catalog.resolver().clone();
        let catalog = Arc::new(catalog);
        let mut env = Environment::new();
        register_filters(&mut env, Arc::clone(&catalog), resolver);
        Ok(Self { env, catalog })
    }

    /// Creates a renderer over the built-in components.
    pub fn builtin() -> Result<Self, Error> {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Compiles and renders a one-off template.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Resolver;
    use crate::table::{Axis, Recipe};
    use minijinja::context;

    #[derive(Serialize)]
    struct Field {
        id: String,
        compact: bool,
    }

    #[test]
    fn test_renderer_add_and_render() {
        let mut renderer = Renderer::builtin().unwrap();
        renderer
            .add_template(
                "field",
                r#"<label class="{{ "label" | variant(size="sm" if compact else "default") }}" for="{{ id }}"></label>"#,
            )
            .unwrap();

        let out = renderer
            .render(
                "field",
                &Field {
                    id: "email".into(),
                    compact: true,
                },
            )
            .unwrap();
        assert!(out.contains("text-xs leading-none\" for=\"email\""));
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::builtin().unwrap();
        let result = renderer.render(
            "nonexistent",
            &Field {
                id: "x".into(),
                compact: false,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_renderer_rejects_invalid_catalog() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "broken",
            Recipe::new("").axis(Axis::new("size").value("sm", "h-3").default_value("md")),
        );
        assert!(Renderer::new(catalog).is_err());
    }

    #[test]
    fn test_renderer_uses_catalog_resolver() {
        let catalog = Catalog::builtin().with_resolver(Resolver::plain());
        let renderer = Renderer::new(catalog).unwrap();
        let out = renderer
            .render_str(r#"{{ cx("p-2", "p-4") }}"#, &context! {})
            .unwrap();
        assert_eq!(out, "p-2 p-4");
    }

    #[test]
    fn test_renderer_custom_recipe() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "chip",
            Recipe::new("rounded-full px-2").axis(
                Axis::boolean("selected", "bg-primary", "bg-muted"),
            ),
        );
        let renderer = Renderer::new(catalog).unwrap();
        let out = renderer
            .render_str(r#"{{ "chip" | variant(selected=true) }}"#, &context! {})
            .unwrap();
        assert_eq!(out, "rounded-full px-2 bg-primary");
    }
}
