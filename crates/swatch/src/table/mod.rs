//! Variant tables: axes, values, defaults and compound variants.
//!
//! A [`VariantTable`] is the static description of how one styled element
//! varies. Each [`Axis`] names a dimension (size, variant, orientation) with a
//! closed set of values mapped to class fragments and an optional default.
//! [`CompoundVariant`]s add fragments when several axes line up, and a
//! [`Recipe`] pairs a table with the base classes it refines.
//!
//! Tables are plain data: build them with the fluent constructors or load them
//! from YAML/JSON, then share them read-only.

mod axis;
mod compound;
mod error;
mod ordered;
mod recipe;
mod variant_table;

pub use axis::Axis;
pub use compound::CompoundVariant;
pub use error::TableError;
pub use ordered::OrderedMap;
pub use recipe::{Recipe, RecipeDef};
pub use variant_table::{TableDef, VariantTable};
