//! Catalog and stylesheet errors.

use std::path::PathBuf;

use crate::resolve::ResolveError;
use crate::table::TableError;

/// Error from looking up or resolving a catalog recipe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No recipe is registered under the name.
    #[error("unknown recipe '{name}'. Available: {}", .available.join(", "))]
    UnknownRecipe {
        name: String,
        available: Vec<String>,
    },
    /// The recipe rejected the request under the strict policy.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// A registered recipe does not validate.
    #[error("recipe '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: TableError,
    },
}

/// Error from loading a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is not one of `.yaml`, `.yml`, `.json`.
    #[error("unsupported stylesheet format for {}: expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A recipe failed validation.
    #[error("recipe '{recipe}' is invalid: {source}")]
    Invalid {
        recipe: String,
        #[source]
        source: TableError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_recipe_lists_available() {
        let err = CatalogError::UnknownRecipe {
            name: "buton".to_string(),
            available: vec!["badge".to_string(), "input".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown recipe 'buton'. Available: badge, input"
        );
    }

    #[test]
    fn test_resolve_error_is_transparent() {
        let err = CatalogError::from(ResolveError::UnknownAxis {
            axis: "tone".to_string(),
        });
        assert_eq!(err.to_string(), "unknown axis 'tone'");
    }
}
