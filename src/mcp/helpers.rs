//! MCP Response Helpers
//!
//! Small builders for the JSON bodies returned by the action endpoints.

use super::models::Violation;
use serde::Serialize;
use serde_json::{json, Value};

/// Name of a JSON value's type as it appears in violation messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds `{ "success": true, "data": ... }`.
pub fn success_data<T: Serialize>(data: &T) -> Value {
    json!({
        "success": true,
        "data": data,
    })
}

/// Builds the generic error body `{ "error": ..., "details"?: [...] }`.
///
/// `details` is omitted entirely when there are no violations to report.
pub fn error_body(message: impl Into<String>, details: &[Violation]) -> Value {
    let mut body = json!({ "error": message.into() });
    if !details.is_empty() {
        body["details"] = json!(details);
    }
    body
}

/// Builds the business failure body `{ "success": false, "error": ... }`.
pub fn failure_body(message: impl Into<String>) -> Value {
    json!({
        "success": false,
        "error": message.into(),
    })
}
