//! Validated environment configuration loading.
//!
//! This crate reads `KEY=VALUE` pairs from a settings file (`.env` by
//! default), overlays the ambient process environment on top (ambient wins),
//! and validates the merged mapping against a caller-supplied [`Schema`],
//! returning either a typed configuration object or a single aggregate
//! error listing every field-level problem.

pub mod constants;
mod error;
mod loader;
pub mod schema;

pub use error::LoadError;
pub use loader::{Encoding, EnvLoader, load};
pub use schema::{EnvSchema, FieldKind, Problem, RawEnv, Schema, TypedSchema, ValidationFailure};
