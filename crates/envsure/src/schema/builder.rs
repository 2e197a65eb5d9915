//! Built-in schema engine with builder-style field declaration.
//!
//! Responsibilities:
//! - Register fields in declaration order with required/optional/default
//!   modes.
//! - Validate and coerce a merged mapping, collecting every field problem in
//!   one pass.
//!
//! Invariants:
//! - Problems are reported in field declaration order, so aggregate messages
//!   are deterministic.
//! - Defaults apply only when a key is absent from the merged mapping; an
//!   empty-string value counts as present.
//! - Defaults are conformed to the field's declared kind at substitution
//!   time; a mismatch surfaces as a problem, never as untyped output.
//! - Keys not declared by the schema are dropped unless `passthrough()` is
//!   set, in which case they pass through as strings.

use serde_json::{Map, Value};

use super::field::FieldKind;
use super::{Problem, RawEnv, Schema};
use crate::constants::LIST_SEPARATOR;

#[derive(Debug, Clone)]
enum Mode {
    Required,
    Optional,
    Default(Value),
}

#[derive(Debug, Clone)]
struct Field {
    name: String,
    kind: FieldKind,
    mode: Mode,
}

/// Declaration-ordered environment schema.
///
/// ```
/// use envsure::{EnvSchema, FieldKind};
///
/// let schema = EnvSchema::new()
///     .required("PORT", FieldKind::Port)
///     .optional("DEBUG", FieldKind::Bool)
///     .with_default("ENV", FieldKind::Str, "development");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSchema {
    fields: Vec<Field>,
    passthrough: bool,
}

impl EnvSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field that must be present in the merged mapping.
    pub fn required(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            mode: Mode::Required,
        });
        self
    }

    /// Declare a field that may be absent; absent means absent from the
    /// output too.
    pub fn optional(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            mode: Mode::Optional,
        });
        self
    }

    /// Declare a field with a default substituted when the key is absent
    /// from both the settings file and the ambient environment.
    pub fn with_default(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        default: impl Into<Value>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            mode: Mode::Default(default.into()),
        });
        self
    }

    /// Let undeclared keys pass through to the output as strings instead of
    /// being dropped.
    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}

fn list_elements(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|element| !element.is_empty())
}

/// Conform a declared default to the field's kind. String defaults go
/// through the same coercion as raw values; typed defaults must already
/// match the declared shape.
fn conform_default(name: &str, kind: &FieldKind, default: &Value) -> Result<Value, Problem> {
    match (kind, default) {
        (FieldKind::List(inner), Value::Array(items)) => {
            let mut conformed = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match conform_scalar(inner, item) {
                    Ok(value) => conformed.push(value),
                    Err(message) => {
                        return Err(Problem::new(
                            format!("{name}[{index}]"),
                            format!("invalid default: {message}"),
                        ));
                    }
                }
            }
            Ok(Value::Array(conformed))
        }
        (FieldKind::List(inner), Value::String(raw)) => {
            let mut conformed = Vec::new();
            for (index, element) in list_elements(raw).enumerate() {
                match inner.coerce(element) {
                    Ok(value) => conformed.push(value),
                    Err(message) => {
                        return Err(Problem::new(
                            format!("{name}[{index}]"),
                            format!("invalid default: {message}"),
                        ));
                    }
                }
            }
            Ok(Value::Array(conformed))
        }
        (FieldKind::List(_), _) => Err(Problem::new(
            name,
            "invalid default: must be an array or a comma-separated string",
        )),
        (kind, value) => conform_scalar(kind, value)
            .map_err(|message| Problem::new(name, format!("invalid default: {message}"))),
    }
}

fn conform_scalar(kind: &FieldKind, value: &Value) -> Result<Value, String> {
    match (kind, value) {
        (kind, Value::String(raw)) => kind.coerce(raw),
        (FieldKind::Bool, Value::Bool(_)) => Ok(value.clone()),
        (FieldKind::Int, Value::Number(n)) if n.as_i64().is_some() => Ok(value.clone()),
        (FieldKind::UInt, Value::Number(n)) if n.as_u64().is_some() => Ok(value.clone()),
        (FieldKind::Float, Value::Number(_)) => Ok(value.clone()),
        (FieldKind::Port, Value::Number(n)) => match n.as_u64() {
            Some(port) if (1..=65535).contains(&port) => Ok(value.clone()),
            _ => Err("must be a positive integer between 1 and 65535".to_string()),
        },
        _ => Err("does not match the declared type".to_string()),
    }
}

impl Schema for EnvSchema {
    type Output = Map<String, Value>;

    fn try_validate(&self, raw: &RawEnv) -> Result<Self::Output, Vec<Problem>> {
        let mut output = Map::new();
        let mut problems = Vec::new();

        for field in &self.fields {
            match raw.get(&field.name) {
                Some(value) => match &field.kind {
                    FieldKind::List(inner) => {
                        let mut items = Vec::new();
                        let mut failed = false;
                        for (index, element) in list_elements(value).enumerate() {
                            match inner.coerce(element) {
                                Ok(item) => items.push(item),
                                Err(message) => {
                                    problems.push(Problem::new(
                                        format!("{}[{index}]", field.name),
                                        message,
                                    ));
                                    failed = true;
                                }
                            }
                        }
                        if !failed {
                            output.insert(field.name.clone(), Value::Array(items));
                        }
                    }
                    kind => match kind.coerce(value) {
                        Ok(coerced) => {
                            output.insert(field.name.clone(), coerced);
                        }
                        Err(message) => problems.push(Problem::new(&field.name, message)),
                    },
                },
                None => match &field.mode {
                    Mode::Default(default) => {
                        match conform_default(&field.name, &field.kind, default) {
                            Ok(value) => {
                                output.insert(field.name.clone(), value);
                            }
                            Err(problem) => problems.push(problem),
                        }
                    }
                    Mode::Required => {
                        problems.push(Problem::new(&field.name, "missing required value"));
                    }
                    Mode::Optional => {}
                },
            }
        }

        if self.passthrough {
            for (key, value) in raw {
                if !self.declares(key) {
                    output.insert(key.clone(), Value::String(value.clone()));
                }
            }
        }

        if problems.is_empty() {
            Ok(output)
        } else {
            Err(problems)
        }
    }
}
