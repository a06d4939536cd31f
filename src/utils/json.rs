//! Field access over loosely-typed gateway JSON
//!
//! The service omits keys and sends explicit nulls interchangeably, so both
//! count as absent here. A present value of the wrong shape is never papered
//! over; it surfaces as [`ParseError::MalformedValue`].

use serde_json::Value;

use crate::error::{ParseError, Result};

/// Look up a key, treating JSON null the same as an absent key.
pub fn get<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    match record.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Look up a key that must be present.
pub fn require<'a>(record: &'a Value, key: &'static str) -> Result<&'a Value> {
    get(record, key).ok_or(ParseError::MissingField(key))
}

/// Optional string field.
pub fn opt_str(record: &Value, key: &'static str) -> Result<Option<String>> {
    match get(record, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ParseError::malformed(
            key,
            format!("expected a string, got {}", other),
        )),
    }
}

/// Optional integer field.
pub fn opt_i64(record: &Value, key: &'static str) -> Result<Option<i64>> {
    match get(record, key) {
        None => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            ParseError::malformed(key, format!("expected an integer, got {}", value))
        }),
    }
}

/// Optional floating point field; integers are accepted.
pub fn opt_f64(record: &Value, key: &'static str) -> Result<Option<f64>> {
    match get(record, key) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            ParseError::malformed(key, format!("expected a number, got {}", value))
        }),
    }
}

/// Optional array field.
pub fn opt_array<'a>(record: &'a Value, key: &'static str) -> Result<Option<&'a Vec<Value>>> {
    match get(record, key) {
        None => Ok(None),
        Some(Value::Array(entries)) => Ok(Some(entries)),
        Some(other) => Err(ParseError::malformed(
            key,
            format!("expected an array, got {}", other),
        )),
    }
}

/// Required string field.
pub fn require_str(record: &Value, key: &'static str) -> Result<String> {
    opt_str(record, key)?.ok_or(ParseError::MissingField(key))
}

/// Required integer field.
pub fn require_i64(record: &Value, key: &'static str) -> Result<i64> {
    opt_i64(record, key)?.ok_or(ParseError::MissingField(key))
}

/// Required field carried as text. The service stringifies some numeric
/// fields and not others, so bare numbers are accepted and stringified.
pub fn require_text(record: &Value, key: &'static str) -> Result<String> {
    match get(record, key) {
        None => Err(ParseError::MissingField(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(ParseError::malformed(
            key,
            format!("expected text, got {}", other),
        )),
    }
}
