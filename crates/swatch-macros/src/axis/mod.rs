//! `#[derive(Axis)]` implementation.

pub mod attrs;
pub mod derive;
