//! Serde adapter: deserialize a validated mapping into a caller struct.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{EnvSchema, Problem, RawEnv, Schema};

/// Wraps an [`EnvSchema`] and deserializes its validated output into `T`.
///
/// A shape mismatch between the schema's output and `T` surfaces as a single
/// problem at the root path carrying serde's message.
pub struct TypedSchema<T> {
    inner: EnvSchema,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    pub fn new(inner: EnvSchema) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Schema for TypedSchema<T> {
    type Output = T;

    fn try_validate(&self, raw: &RawEnv) -> Result<T, Vec<Problem>> {
        let validated = self.inner.try_validate(raw)?;
        serde_json::from_value(Value::Object(validated))
            .map_err(|e| vec![Problem::new("$", e.to_string())])
    }
}
