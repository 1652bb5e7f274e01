//! # Swatch - variant-driven class names for design-system components
//!
//! Swatch turns a static *variant table* and a per-call *request* into one
//! deterministic class string. A table describes how a styled element varies:
//! named axes (size, variant, orientation), each with a closed set of values
//! mapped to utility-class fragments and an optional default. A request picks
//! values and may add override classes.
//!
//! Precedence, lowest to highest: base classes, axis defaults, explicit
//! selections, compound variants, override classes. An unknown value behaves
//! as if it had not been selected.
//!
//! ## Quick start
//!
//! ```rust
//! use swatch::{Axis, Recipe, Request};
//!
//! let checkbox = Recipe::new("peer rounded").axis(
//!     Axis::new("size")
//!         .value("sm", "h-3 w-3")
//!         .value("default", "h-4 w-4")
//!         .default_value("default"),
//! );
//!
//! let request = Request::new().set("size", "sm").class("text-red-500");
//! assert_eq!(checkbox.resolve(&request), "peer rounded h-3 w-3 text-red-500");
//! ```
//!
//! ## Components
//!
//! The [`components`] module ships the tables of a complete component set.
//! Each part is a function returning a [`Styled`] builder with typed axes:
//!
//! ```rust
//! use swatch::components::badge::{self, BadgeSize, BadgeVariant};
//!
//! let props = badge::badge()
//!     .with(BadgeVariant::Destructive)
//!     .with(BadgeSize::Lg)
//!     .build();
//! assert!(props.class.contains("bg-destructive"));
//! ```
//!
//! ## Configuration
//!
//! A [`Catalog`] holds named recipes and can be overlaid with a YAML or JSON
//! [`Stylesheet`]. The [`render`] module exposes catalogs to MiniJinja
//! templates.
//!
//! ## Merging
//!
//! The default [`Resolver`] merges conflicting utilities so later fragments
//! win (`px-4` from the base loses to `px-6` from an override). The merge
//! rules live in the `swatch-merge` crate, re-exported as [`merge`].

extern crate self as swatch;

pub mod attrs;
pub mod catalog;
pub mod components;
pub mod render;
pub mod resolve;
pub mod styled;
pub mod table;

pub use swatch_macros::Axis;
pub use swatch_merge as merge;

pub use attrs::{Attributes, ElementProps};
pub use catalog::{Catalog, CatalogError, Stylesheet, StylesheetError};
pub use render::{register_filters, Renderer};
pub use resolve::{resolve, Request, ResolveError, Resolver, ResolverConfig, UnknownValuePolicy};
pub use styled::Styled;
pub use table::{Axis, CompoundVariant, Recipe, TableError, VariantTable};

/// A closed set of values for one axis, usually derived with
/// `#[derive(Axis)]`.
///
/// ```rust
/// use swatch::{Axis, AxisValue};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Axis)]
/// #[axis(name = "size")]
/// enum Size {
///     Sm,
///     #[axis(default)]
///     Default,
///     #[axis(rename = "2xl")]
///     Xxl,
/// }
///
/// assert_eq!(Size::AXIS, "size");
/// assert_eq!(Size::VALUES, &["sm", "default", "2xl"]);
/// assert_eq!(Size::Xxl.value_name(), "2xl");
/// assert_eq!(Size::from_value_name("sm"), Some(Size::Sm));
/// assert_eq!(Size::default(), Size::Default);
/// ```
pub trait AxisValue: Sized {
    /// Name of the axis this type selects on.
    const AXIS: &'static str;
    /// Every value name, in declaration order.
    const VALUES: &'static [&'static str];
    /// The value marked `#[axis(default)]`, if any.
    const DEFAULT: Option<&'static str>;

    fn value_name(&self) -> &'static str;

    fn from_value_name(name: &str) -> Option<Self>;
}
