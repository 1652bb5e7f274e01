//! Derive macros for swatch.
//!
//! # Macros
//!
//! - [`Axis`] - Turn a fieldless enum into a typed variant axis
//!
//! # Example
//!
//! ```rust,ignore
//! use swatch::Axis;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Axis)]
//! #[axis(name = "size")]
//! pub enum ButtonSize {
//!     Sm,
//!     #[axis(default)]
//!     Default,
//!     Lg,
//!     #[axis(rename = "icon")]
//!     IconOnly,
//! }
//!
//! assert_eq!(ButtonSize::Sm.value_name(), "sm");
//! assert_eq!(ButtonSize::default(), ButtonSize::Default);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod axis;

/// Derives `swatch::AxisValue` for a fieldless enum.
///
/// # Container attributes
///
/// - `#[axis(name = "size")]` (required): the axis name the enum selects on.
///
/// # Variant attributes
///
/// - `#[axis(rename = "icon-sm")]`: value name override. Without it the
///   variant name is converted to kebab-case (`IconSm` → `icon-sm`).
/// - `#[axis(default)]`: marks the axis default. At most one variant may
///   carry it; when present a `Default` impl is generated as well.
///
/// A `Display` impl printing the value name is always generated.
#[proc_macro_derive(Axis, attributes(axis))]
pub fn axis_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    axis::derive::axis_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
