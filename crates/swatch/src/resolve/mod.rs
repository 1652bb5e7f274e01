//! Resolving requests against variant tables.
//!
//! Precedence, lowest to highest: base classes, axis defaults, explicit
//! selections, compound variants, override classes. An unknown value behaves
//! as if the axis had been left out; [`UnknownValuePolicy::Strict`] turns that
//! into an error on [`Resolver::try_resolve`].

mod error;
mod policy;
mod request;
mod resolver;

pub use error::ResolveError;
pub use policy::{ResolverConfig, UnknownValuePolicy};
pub use request::Request;
pub use resolver::{resolve, Resolver};
