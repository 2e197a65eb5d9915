//! Centralized constants for the envsure workspace.

/// File name used when no settings-file path is supplied.
pub const DEFAULT_ENV_FILE_NAME: &str = ".env";

/// Header line prefixed to every aggregate validation failure message.
pub const VALIDATION_FAILED_HEADER: &str = "⚠️  Env validation failed:";

/// Separator used by list-valued fields.
pub const LIST_SEPARATOR: char = ',';
