//! Template integration.
//!
//! Exposes recipe resolution to MiniJinja templates through the `variant`
//! filter and the `cx` function. See [`register_filters`] for the template
//! syntax and [`Renderer`] for a ready-made environment.

mod filters;
mod renderer;

pub use filters::register_filters;
pub use renderer::Renderer;
