//! JSON schema declaration parsing.
//!
//! The spec file maps variable names to field declarations:
//!
//! ```json
//! {
//!   "PORT": { "type": "port" },
//!   "ENV": { "type": "string", "default": "development" },
//!   "DEBUG": { "type": "bool", "required": false },
//!   "MODE": { "type": "choice", "values": ["a", "b"] },
//!   "ALLOWED_ORIGINS": { "type": "list", "item": "url" }
//! }
//! ```
//!
//! Declaration problems (e.g. a `choice` without `values`) are spec-file
//! errors, not validation failures.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use serde::Deserialize;

use envsure::{EnvSchema, FieldKind};

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct SpecFile {
    vars: BTreeMap<String, FieldDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDecl {
    #[serde(rename = "type")]
    kind: KindDecl,
    #[serde(default = "default_true")]
    required: bool,
    #[serde(default)]
    default: Option<serde_json::Value>,
    /// Allowed values, for `choice` fields.
    #[serde(default)]
    values: Option<Vec<String>>,
    /// Element type, for `list` fields.
    #[serde(default)]
    item: Option<KindDecl>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindDecl {
    String,
    Bool,
    Int,
    Uint,
    Float,
    Port,
    Email,
    Url,
    Choice,
    List,
}

impl SpecFile {
    pub fn into_schema(self) -> anyhow::Result<EnvSchema> {
        let mut schema = EnvSchema::new();
        for (name, decl) in self.vars {
            let kind = field_kind(&name, &decl)
                .with_context(|| format!("invalid declaration for {name}"))?;
            schema = match decl.default {
                Some(default) => schema.with_default(name, kind, default),
                None if decl.required => schema.required(name, kind),
                None => schema.optional(name, kind),
            };
        }
        Ok(schema)
    }
}

fn field_kind(name: &str, decl: &FieldDecl) -> anyhow::Result<FieldKind> {
    let scalar = |kind: KindDecl| -> anyhow::Result<FieldKind> {
        Ok(match kind {
            KindDecl::String => FieldKind::Str,
            KindDecl::Bool => FieldKind::Bool,
            KindDecl::Int => FieldKind::Int,
            KindDecl::Uint => FieldKind::UInt,
            KindDecl::Float => FieldKind::Float,
            KindDecl::Port => FieldKind::Port,
            KindDecl::Email => FieldKind::Email,
            KindDecl::Url => FieldKind::Url,
            KindDecl::Choice | KindDecl::List => {
                bail!("{name}: choice and list are not valid list element types")
            }
        })
    };

    match decl.kind {
        KindDecl::Choice => {
            let Some(values) = decl.values.clone().filter(|v| !v.is_empty()) else {
                bail!("{name}: choice requires a non-empty \"values\" array");
            };
            Ok(FieldKind::Choice(values))
        }
        KindDecl::List => {
            let Some(item) = decl.item else {
                bail!("{name}: list requires an \"item\" element type");
            };
            Ok(FieldKind::List(Box::new(scalar(item)?)))
        }
        kind => scalar(kind),
    }
}
