//! Field kinds: per-variable coercion and validation rules.
//!
//! Invariants:
//! - Coercion messages state the expected shape, never echo design rationale.
//! - URL normalization strips the trailing slash so `https://a.com` round
//!   trips unchanged.

use serde_json::Value;
use validator::ValidateEmail;

/// The expected type of a single variable, with its coercion rule.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Any string, passed through as-is.
    Str,
    /// `true`/`false`/`1`/`0`, case-insensitive.
    Bool,
    /// Signed integer.
    Int,
    /// Non-negative integer.
    UInt,
    /// Finite floating-point number.
    Float,
    /// TCP port: positive integer in `1..=65535`.
    Port,
    /// RFC-shaped email address.
    Email,
    /// Absolute http(s) URL with a host; trailing slash normalized away.
    Url,
    /// Membership in a fixed set of allowed values.
    Choice(Vec<String>),
    /// Comma-separated list; each element trimmed and coerced by the inner
    /// kind. Empty elements (e.g. a trailing comma) are dropped.
    List(Box<FieldKind>),
}

impl FieldKind {
    /// Coerce a single raw value. [`FieldKind::List`] is handled element-wise
    /// by the schema engine; a list inside a list has no raw form, so a
    /// nested list element is a validation problem rather than a value.
    pub(crate) fn coerce(&self, raw: &str) -> Result<Value, String> {
        match self {
            FieldKind::Str => Ok(Value::String(raw.to_string())),
            FieldKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err("must be a boolean (true or false)".to_string()),
            },
            FieldKind::Int => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| "must be an integer".to_string()),
            FieldKind::UInt => raw
                .parse::<u64>()
                .map(Value::from)
                .map_err(|_| "must be a non-negative integer".to_string()),
            FieldKind::Float => {
                let parsed: f64 = raw.parse().map_err(|_| "must be a number".to_string())?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| "must be a finite number".to_string())
            }
            FieldKind::Port => match raw.parse::<u16>() {
                Ok(port) if port > 0 => Ok(Value::from(u64::from(port))),
                _ => Err("must be a positive integer between 1 and 65535".to_string()),
            },
            FieldKind::Email => {
                if raw.validate_email() {
                    Ok(Value::String(raw.to_string()))
                } else {
                    Err("must be a valid email address".to_string())
                }
            }
            FieldKind::Url => validate_and_normalize_url(raw).map(Value::String),
            FieldKind::Choice(allowed) => {
                if allowed.iter().any(|candidate| candidate == raw) {
                    Ok(Value::String(raw.to_string()))
                } else {
                    Err(format!("must be one of: {}", allowed.join(", ")))
                }
            }
            FieldKind::List(_) => Err("nested lists are not supported".to_string()),
        }
    }
}

/// Validates and normalizes a URL string.
///
/// Rules:
/// - Trim surrounding whitespace, reject blank values
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err("must be a non-empty URL".to_string());
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| format!("must be an absolute http(s) URL (e.g. https://example.com): {e}"))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(format!("scheme must be http or https, got: {scheme}"));
    }

    if parsed.host_str().is_none() {
        return Err("host is required (e.g. https://example.com)".to_string());
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_accepts_truthy_and_falsy_spellings() {
        assert_eq!(FieldKind::Bool.coerce("true").unwrap(), json!(true));
        assert_eq!(FieldKind::Bool.coerce("TRUE").unwrap(), json!(true));
        assert_eq!(FieldKind::Bool.coerce("1").unwrap(), json!(true));
        assert_eq!(FieldKind::Bool.coerce("false").unwrap(), json!(false));
        assert_eq!(FieldKind::Bool.coerce("0").unwrap(), json!(false));
        assert!(FieldKind::Bool.coerce("yes").is_err());
    }

    #[test]
    fn port_rejects_zero_and_non_numeric() {
        assert_eq!(FieldKind::Port.coerce("8080").unwrap(), json!(8080));
        assert!(FieldKind::Port.coerce("0").is_err());
        assert!(FieldKind::Port.coerce("70000").is_err());
        assert!(FieldKind::Port.coerce("not-a-number").is_err());
    }

    #[test]
    fn email_uses_format_validation() {
        assert_eq!(
            FieldKind::Email.coerce("ops@example.com").unwrap(),
            json!("ops@example.com")
        );
        assert!(FieldKind::Email.coerce("invalid-email").is_err());
    }

    #[test]
    fn url_is_normalized_without_trailing_slash() {
        assert_eq!(
            FieldKind::Url.coerce("https://a.com").unwrap(),
            json!("https://a.com")
        );
        assert_eq!(
            FieldKind::Url.coerce("https://a.com/path/").unwrap(),
            json!("https://a.com/path")
        );
        assert!(FieldKind::Url.coerce("ftp://a.com").is_err());
        assert!(FieldKind::Url.coerce("not a url").is_err());
    }

    #[test]
    fn choice_checks_membership() {
        let kind = FieldKind::Choice(vec!["development".into(), "production".into()]);
        assert_eq!(kind.coerce("production").unwrap(), json!("production"));
        let err = kind.coerce("staging").unwrap_err();
        assert!(err.contains("development, production"), "got: {err}");
    }

    #[test]
    fn float_rejects_nan() {
        assert_eq!(FieldKind::Float.coerce("2.5").unwrap(), json!(2.5));
        assert!(FieldKind::Float.coerce("NaN").is_err());
    }
}
