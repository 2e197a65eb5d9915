//! Schema boundary for environment validation.
//!
//! Responsibilities:
//! - Define the [`Schema`] trait: the opaque validate-and-coerce capability
//!   the loader invokes on the merged mapping.
//! - Define [`Problem`] and [`ValidationFailure`]: the structured field-level
//!   error list and its aggregate message formatting.
//! - Provide a batteries-included engine ([`EnvSchema`]) and a serde adapter
//!   ([`TypedSchema`]).
//!
//! Does NOT handle:
//! - Reading files or the process environment (see the loader module).
//!
//! Invariants:
//! - The loader never inspects a schema's internals; it only calls
//!   `try_validate`.
//! - A failed validation reports every field's problem in one pass, never
//!   just the first.

mod builder;
mod field;
mod typed;

pub use builder::EnvSchema;
pub use field::FieldKind;
pub use typed::TypedSchema;

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::VALIDATION_FAILED_HEADER;

/// The merged, pre-validation mapping: variable name to raw string value.
pub type RawEnv = BTreeMap<String, String>;

/// A validation specification the loader can invoke without knowing its
/// internal structure.
///
/// Implementations validate and coerce the raw mapping, substitute declared
/// defaults for absent fields, and on failure produce one [`Problem`] per
/// failing field rather than stopping at the first.
pub trait Schema {
    /// The validated, typed configuration produced on success.
    type Output;

    /// Validate and coerce the merged mapping.
    fn try_validate(&self, raw: &RawEnv) -> Result<Self::Output, Vec<Problem>>;
}

/// One field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Path of the failing field, e.g. `PORT` or `ALLOWED_ORIGINS[1]`.
    pub field: String,
    /// Human-readable reason supplied by the schema.
    pub message: String,
}

impl Problem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Aggregate of every field-level problem from one validation pass.
///
/// The `Display` form is the fixed header followed by one `field: message`
/// line per problem, newline separated. One failed load raises exactly one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    problems: Vec<Problem>,
}

impl ValidationFailure {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// The ordered problem list, as produced by the schema.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{VALIDATION_FAILED_HEADER}")?;
        for problem in &self.problems {
            write!(f, "\n{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
