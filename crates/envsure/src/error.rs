//! Error types for configuration loading.
//!
//! Invariants:
//! - Settings-file errors NEVER include raw line contents to prevent secret
//!   leakage; parse failures carry only a byte index.
//! - Validation failures are never collapsed to the first problem; the full
//!   aggregate is carried by [`ValidationFailure`].

use std::io::ErrorKind;
use thiserror::Error;

use crate::schema::ValidationFailure;

/// Errors that can occur during a configuration load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The merged mapping failed schema validation. The message lists every
    /// field-level problem, one line each, under a fixed header.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The settings file exists but has invalid syntax.
    ///
    /// Only the byte index of the failure is recorded, never the offending
    /// line content.
    #[error("Failed to parse settings file at position {error_index}")]
    EnvFileParse { error_index: usize },

    /// The settings file could not be read. A missing file is not an error
    /// (the loader degrades to an empty mapping); this covers everything
    /// else, e.g. permission denied or invalid encoding.
    #[error("Failed to read settings file: {kind}")]
    EnvFileIo { kind: ErrorKind },
}
