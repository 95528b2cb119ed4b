//! Envelope validation.
//!
//! Checks the outer message shape shared by every action request. All
//! violations are collected; nothing here knows which actions exist.

use super::models::{Envelope, Violation, ViolationCode, DEFAULT_VERSION, PROTOCOL};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Length of the canonical hyphenated UUID text form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Parses a raw request body. An empty body reads as `{}`.
pub fn parse_body(body: &[u8]) -> Result<Value, Violation> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "request body is not JSON");
        Violation::new(ViolationCode::InvalidJson, &[], "Malformed JSON body")
    })
}

/// Validates `raw` as an envelope, filling in the default `version`.
///
/// Unknown top-level fields are ignored.
pub fn validate_envelope(raw: &Value) -> Result<Envelope, Vec<Violation>> {
    let Some(fields) = raw.as_object() else {
        return Err(vec![Violation::invalid_type(&[], "object", raw)]);
    };

    let mut violations = Vec::new();

    let version = match fields.get("version") {
        None => Some(DEFAULT_VERSION.to_string()),
        Some(Value::String(v)) => Some(v.clone()),
        Some(other) => {
            violations.push(Violation::invalid_type(&["version"], "string", other));
            None
        }
    };

    let protocol = match fields.get("protocol") {
        None => {
            violations.push(Violation::required("protocol"));
            None
        }
        Some(Value::String(p)) if p == PROTOCOL => Some(p.clone()),
        Some(_) => {
            violations.push(Violation::new(
                ViolationCode::InvalidLiteral,
                &["protocol"],
                format!("Invalid literal value, expected \"{}\"", PROTOCOL),
            ));
            None
        }
    };

    let context_id = match fields.get("context_id") {
        None => None,
        Some(Value::String(id)) => {
            let parsed = parse_context_id(id);
            if parsed.is_none() {
                violations.push(Violation::new(
                    ViolationCode::InvalidString,
                    &["context_id"],
                    "Invalid uuid",
                ));
            }
            parsed
        }
        Some(other) => {
            violations.push(Violation::invalid_type(&["context_id"], "string", other));
            None
        }
    };

    let action_name = match fields.get("action_name") {
        None => {
            violations.push(Violation::required("action_name"));
            None
        }
        Some(Value::String(name)) if name.is_empty() => {
            violations.push(Violation::new(
                ViolationCode::TooSmall,
                &["action_name"],
                "Action name cannot be empty",
            ));
            None
        }
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            violations.push(Violation::invalid_type(&["action_name"], "string", other));
            None
        }
    };

    let parameters = match fields.get("parameters") {
        None => None,
        Some(Value::Object(params)) => Some(params.clone()),
        Some(other) => {
            violations.push(Violation::invalid_type(&["parameters"], "object", other));
            None
        }
    };

    match (version, protocol, action_name) {
        (Some(version), Some(protocol), Some(action_name)) if violations.is_empty() => {
            Ok(Envelope {
                version,
                protocol,
                context_id,
                action_name,
                parameters,
            })
        }
        _ => Err(violations),
    }
}

/// Accepts only the hyphenated form, in either hex case.
fn parse_context_id(id: &str) -> Option<Uuid> {
    if id.len() != HYPHENATED_UUID_LEN {
        return None;
    }
    Uuid::try_parse(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(violations: &[Violation]) -> Vec<String> {
        violations.iter().map(|v| v.path.join(".")).collect()
    }

    #[test]
    fn minimal_envelope_gets_default_version() {
        let envelope = validate_envelope(&json!({
            "protocol": "mcp",
            "action_name": "listMenu"
        }))
        .unwrap();

        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.action_name, "listMenu");
        assert!(envelope.context_id.is_none());
        assert!(envelope.parameters.is_none());
    }

    #[test]
    fn unknown_fields_and_unknown_actions_are_accepted() {
        let envelope = validate_envelope(&json!({
            "protocol": "mcp",
            "version": "2.1",
            "action_name": "brewTea",
            "trace": { "span": 7 }
        }))
        .unwrap();

        assert_eq!(envelope.version, "2.1");
        assert_eq!(envelope.action_name, "brewTea");
    }

    #[test]
    fn context_id_must_be_a_hyphenated_uuid() {
        let ok = validate_envelope(&json!({
            "protocol": "mcp",
            "action_name": "listMenu",
            "context_id": "6F9619FF-8B86-D011-B42D-00CF4FC964FF"
        }))
        .unwrap();
        assert!(ok.context_id.is_some());

        for bad in ["not-a-uuid", "6f9619ff8b86d011b42d00cf4fc964ff", ""] {
            let violations = validate_envelope(&json!({
                "protocol": "mcp",
                "action_name": "listMenu",
                "context_id": bad
            }))
            .unwrap_err();
            assert_eq!(paths(&violations), ["context_id"], "input {bad:?}");
            assert_eq!(violations[0].message, "Invalid uuid");
        }
    }

    #[test]
    fn wrong_protocol_is_rejected() {
        let violations = validate_envelope(&json!({
            "protocol": "http",
            "action_name": "listMenu"
        }))
        .unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::InvalidLiteral);
        assert_eq!(violations[0].message, "Invalid literal value, expected \"mcp\"");
    }

    #[test]
    fn all_violations_are_reported_together() {
        let violations = validate_envelope(&json!({
            "version": 1,
            "protocol": "bad",
            "context_id": 42,
            "action_name": "",
            "parameters": ["x"]
        }))
        .unwrap_err();

        assert_eq!(
            paths(&violations),
            ["version", "protocol", "context_id", "action_name", "parameters"]
        );
    }

    #[test]
    fn missing_required_fields() {
        let violations = validate_envelope(&json!({})).unwrap_err();
        assert_eq!(paths(&violations), ["protocol", "action_name"]);
        assert!(violations.iter().all(|v| v.message == "Required"));
    }

    #[test]
    fn null_parameters_are_a_type_error() {
        let violations = validate_envelope(&json!({
            "protocol": "mcp",
            "action_name": "listMenu",
            "parameters": null
        }))
        .unwrap_err();
        assert_eq!(violations[0].message, "Expected object, received null");
    }

    #[test]
    fn non_object_documents_fail_at_the_root() {
        let violations = validate_envelope(&json!([1, 2])).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].path.is_empty());
    }

    #[test]
    fn empty_body_parses_as_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b" \n").unwrap(), json!({}));
        let err = parse_body(b"{nope").unwrap_err();
        assert_eq!(err.code, ViolationCode::InvalidJson);
        assert_eq!(err.message, "Malformed JSON body");
    }
}
