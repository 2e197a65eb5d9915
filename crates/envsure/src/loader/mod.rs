//! Configuration loader: settings file plus ambient environment.
//!
//! Responsibilities:
//! - Resolve the settings-file path (`./.env` by default) and obtain its
//!   parsed key/value contents via `dotenvy`.
//! - Merge the file mapping with the ambient environment snapshot, ambient
//!   winning on key collision.
//! - Hand the merged mapping to a caller-supplied [`Schema`] and map its
//!   problem list into one aggregate [`LoadError::Validation`].
//!
//! Does NOT handle:
//! - Schema semantics (see the schema module).
//! - Persisting or watching configuration.
//!
//! Invariants / Assumptions:
//! - A missing settings file degrades to an empty mapping; it is never an
//!   error by itself.
//! - The ambient environment is read once per call and never mutated.
//! - The file read is the operation's only suspension point.

mod builder;
mod env;
mod file;

#[cfg(test)]
mod tests;

pub use builder::{EnvLoader, load};
pub use file::Encoding;

use crate::schema::RawEnv;

/// Overlay the ambient snapshot on the file mapping; ambient wins on
/// key collision.
pub(crate) fn merge(file_values: RawEnv, ambient: RawEnv) -> RawEnv {
    let mut merged = file_values;
    merged.extend(ambient);
    merged
}
