//! Store-layer schema rules.
//!
//! Every repository adapter runs these checks before writing, so the in-memory
//! and SQL stores accept and reject exactly the same documents. They are the
//! second validation pass; the services only pre-validate comment input.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::error::RepoError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Path `{0}` is required.")]
    Required(&'static str),

    #[error("Cast to {kind} failed for value {value} at path `{path}`")]
    Cast {
        path: &'static str,
        kind: &'static str,
        value: String,
    },
}

fn cast_failed(path: &'static str, kind: &'static str, value: &Value) -> SchemaError {
    SchemaError::Cast {
        path,
        kind,
        value: value.to_string(),
    }
}

/// Cast a raw JSON value to a string path. Numbers and booleans are
/// stringified, `null` counts as absent, arrays and objects are rejected.
pub fn cast_string(path: &'static str, value: Option<Value>) -> Result<Option<String>, SchemaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(v) => Err(cast_failed(path, "string", &v)),
    }
}

/// Cast a raw JSON value to a date path. Accepts RFC 3339 timestamps, bare
/// `YYYY-MM-DD` dates (midnight UTC) and epoch milliseconds.
pub fn cast_date(
    path: &'static str,
    value: Option<Value>,
) -> Result<Option<DateTime<Utc>>, SchemaError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let parsed = match &value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc())
            }),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    parsed
        .map(Some)
        .ok_or_else(|| cast_failed(path, "date", &value))
}

/// A required string path must be present and non-empty. Whitespace is kept
/// as-is; trimming is the caller's business.
pub fn required(path: &'static str, value: Option<String>) -> Result<String, SchemaError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SchemaError::Required(path)),
    }
}

/// Cast a raw identifier to the store's id type.
pub fn cast_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|_| RepoError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_required_rejects_missing_and_empty() {
        assert_eq!(required("title", None), Err(SchemaError::Required("title")));
        assert_eq!(
            required("title", Some(String::new())),
            Err(SchemaError::Required("title"))
        );
    }

    #[test]
    fn test_required_keeps_whitespace() {
        assert_eq!(required("owner", Some("  a ".into())).unwrap(), "  a ");
    }

    #[test]
    fn test_cast_id() {
        let id = Uuid::new_v4();
        assert_eq!(cast_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            cast_id("invalid-id"),
            Err(RepoError::InvalidId(raw)) if raw == "invalid-id"
        ));
    }

    #[test]
    fn test_cast_string_stringifies_scalars() {
        assert_eq!(cast_string("title", Some(json!(42))).unwrap().as_deref(), Some("42"));
        assert_eq!(cast_string("title", Some(json!(true))).unwrap().as_deref(), Some("true"));
        assert_eq!(cast_string("title", Some(Value::Null)).unwrap(), None);
        assert!(matches!(
            cast_string("title", Some(json!({ "a": 1 }))),
            Err(SchemaError::Cast { path: "title", kind: "string", .. })
        ));
    }

    #[test]
    fn test_cast_date_forms() {
        let midnight = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            cast_date("publishDate", Some(json!("2024-01-15T00:00:00.000Z"))).unwrap(),
            Some(midnight)
        );
        assert_eq!(
            cast_date("publishDate", Some(json!("2024-01-15"))).unwrap(),
            Some(midnight)
        );
        assert_eq!(
            cast_date("publishDate", Some(json!(midnight.timestamp_millis()))).unwrap(),
            Some(midnight)
        );
        assert!(matches!(
            cast_date("publishDate", Some(json!("not-a-date"))),
            Err(SchemaError::Cast { path: "publishDate", kind: "date", .. })
        ));
    }
}
