//! Loader builder and the load operation itself.
//!
//! Responsibilities:
//! - Provide a builder-pattern [`EnvLoader`] for path, encoding, and
//!   environment-snapshot overrides.
//! - Run the load algorithm: read file, merge ambient on top, validate.
//!
//! Invariants:
//! - Ambient environment values take precedence over file values.
//! - The schema is the sole arbiter of failure; file absence never fails a
//!   load on its own.

use std::path::{Path, PathBuf};

use super::env::ambient_snapshot;
use super::file::{Encoding, read_env_file};
use super::merge;
use crate::constants::DEFAULT_ENV_FILE_NAME;
use crate::error::LoadError;
use crate::schema::{RawEnv, Schema, ValidationFailure};

/// Builds and runs configuration loads.
///
/// ```no_run
/// use envsure::{EnvLoader, EnvSchema, FieldKind};
///
/// # async fn demo() -> Result<(), envsure::LoadError> {
/// let schema = EnvSchema::new()
///     .required("PORT", FieldKind::Port)
///     .with_default("ENV", FieldKind::Str, "development");
///
/// let config = EnvLoader::new().load(&schema).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    path: Option<PathBuf>,
    encoding: Encoding,
    snapshot: Option<RawEnv>,
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the settings-file location. Defaults to `.env` in the
    /// current working directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the text encoding used when reading the settings file.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Substitute a fixed mapping for the ambient environment snapshot.
    ///
    /// Primarily for tests, which must control the snapshot's contents
    /// deterministically without mutating the real process environment.
    pub fn with_env_snapshot(mut self, snapshot: RawEnv) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Load, merge, and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Validation`] when the schema reports problems
    /// (one aggregate error listing every failing field), or
    /// [`LoadError::EnvFileIo`] / [`LoadError::EnvFileParse`] when the
    /// settings file exists but cannot be read or parsed. A missing file is
    /// not an error.
    pub async fn load<S: Schema>(&self, schema: &S) -> Result<S::Output, LoadError> {
        let default_path = Path::new(DEFAULT_ENV_FILE_NAME);
        let path = self.path.as_deref().unwrap_or(default_path);

        let file_values = read_env_file(path, self.encoding).await?;
        let ambient = match &self.snapshot {
            Some(snapshot) => snapshot.clone(),
            None => ambient_snapshot(),
        };

        let raw = merge(file_values, ambient);
        tracing::debug!(
            path = %path.display(),
            merged_keys = raw.len(),
            "validating merged environment mapping"
        );

        schema
            .try_validate(&raw)
            .map_err(|problems| LoadError::Validation(ValidationFailure::new(problems)))
    }
}

/// Load with default options: `./.env` plus the real ambient environment.
pub async fn load<S: Schema>(schema: &S) -> Result<S::Output, LoadError> {
    EnvLoader::new().load(schema).await
}
