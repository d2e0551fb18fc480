//! JSON helpers shared across crates.

use serde_json::{Map, Value};

/// Render a scalar JSON value as text.
///
/// Strings are returned as-is, numbers and booleans in their JSON spelling.
/// `null`, arrays and objects yield `None`.
#[must_use]
pub fn json_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Look up `key` in `map` and render it with [`json_scalar_text`].
#[must_use]
pub fn field_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(json_scalar_text)
}

/// Decode a request body into a non-empty JSON object.
///
/// Returns `None` for empty bodies, invalid JSON, non-object roots and `{}`.
#[must_use]
pub fn parse_object_body(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Some(map),
        _ => None,
    }
}
