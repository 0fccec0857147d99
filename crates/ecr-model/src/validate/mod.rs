//! Structural validation of untrusted JSON values.
//!
//! These validators check candidate [`serde_json::Value`]s against the wire
//! shapes before (or instead of) deserializing into the typed model. They
//! are pure predicates with no side effects, and they report the FIRST
//! violation found — validation is all-or-nothing per value, never partial.
//!
//! Unknown extra fields are ignored: the shapes are open, and consumers
//! that want strictness impose it themselves. Payload contents under a
//! component's `properties` are never inspected beyond "this is an object";
//! whatever nested structure is there is a matter for the schema the
//! component's `type` URI points at.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::uri::check_uri_syntax;

/// Returns the JSON kind name for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn require_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::UnexpectedShape {
        context,
        expected: "object",
        found: json_kind(value),
    })
}

fn require_field<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
    context: &'static str,
) -> Result<&'a Value, ValidationError> {
    map.get(field)
        .ok_or(ValidationError::MissingField { field, context })
}

fn require_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or(ValidationError::WrongType {
        field,
        expected: "string",
        found: json_kind(value),
    })
}

fn require_uri_str(value: &Value, field: &'static str) -> Result<(), ValidationError> {
    let s = require_str(value, field)?;
    if let Some(reason) = check_uri_syntax(s) {
        return Err(ValidationError::InvalidUri {
            value: s.to_string(),
            reason,
        });
    }
    Ok(())
}

/// Validates an entity shape: an object with a required `id` field holding
/// a URI-syntax string.
pub fn validate_entity(value: &Value) -> Result<(), ValidationError> {
    let map = require_object(value, "entity")?;
    let id = require_field(map, "id", "entity")?;
    require_uri_str(id, "id")
}

/// Validates a component shape: required `type` (URI-syntax string);
/// optional `description` and `label` (strings); optional `properties`
/// (object with unconstrained contents).
pub fn validate_component(value: &Value) -> Result<(), ValidationError> {
    let map = require_object(value, "component")?;

    let ty = require_field(map, "type", "component")?;
    require_uri_str(ty, "type")?;

    if let Some(description) = map.get("description") {
        require_str(description, "description")?;
    }
    if let Some(label) = map.get("label") {
        require_str(label, "label")?;
    }
    if let Some(properties) = map.get("properties") {
        if !properties.is_object() {
            return Err(ValidationError::WrongType {
                field: "properties",
                expected: "object",
                found: json_kind(properties),
            });
        }
    }
    Ok(())
}

/// Validates a standalone full relationship shape: required `subject` and
/// `object` (URI-syntax strings) and `predicate` (non-empty string; URI
/// form recommended but not enforced).
pub fn validate_relationship(value: &Value) -> Result<(), ValidationError> {
    let map = require_object(value, "relationship")?;

    let subject = require_field(map, "subject", "relationship")?;
    require_uri_str(subject, "subject")?;

    let predicate = require_field(map, "predicate", "relationship")?;
    require_predicate_str(predicate)?;

    let object = require_field(map, "object", "relationship")?;
    require_uri_str(object, "object")
}

fn require_predicate_str(value: &Value) -> Result<(), ValidationError> {
    let s = require_str(value, "predicate")?;
    if s.is_empty() {
        return Err(ValidationError::EmptyPredicate);
    }
    Ok(())
}

/// Validates a serialized-entity shape: `id` (URI-syntax string),
/// `components` (array of valid components), `relationships` (array of
/// embedded `{predicate, object}` pairs, subject omitted).
///
/// Elements are checked in sequence order; the first failing element fails
/// the whole value.
pub fn validate_serialized_entity(value: &Value) -> Result<(), ValidationError> {
    let map = require_object(value, "serialized entity")?;

    let id = require_field(map, "id", "serialized entity")?;
    require_uri_str(id, "id")?;

    let components = require_field(map, "components", "serialized entity")?;
    let components = components.as_array().ok_or(ValidationError::WrongType {
        field: "components",
        expected: "array",
        found: json_kind(components),
    })?;
    for component in components {
        validate_component(component)?;
    }

    let relationships = require_field(map, "relationships", "serialized entity")?;
    let relationships = relationships.as_array().ok_or(ValidationError::WrongType {
        field: "relationships",
        expected: "array",
        found: json_kind(relationships),
    })?;
    for relationship in relationships {
        validate_outbound_relationship(relationship)?;
    }
    Ok(())
}

/// Validates the embedded two-field relationship form.
fn validate_outbound_relationship(value: &Value) -> Result<(), ValidationError> {
    let map = require_object(value, "outbound relationship")?;

    let predicate = require_field(map, "predicate", "outbound relationship")?;
    require_predicate_str(predicate)?;

    let object = require_field(map, "object", "outbound relationship")?;
    require_uri_str(object, "object")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    // === entity ===

    #[test]
    fn test_entity_accepts_documented_example() {
        assert!(validate_entity(&json!({ "id": "did:example:alice" })).is_ok());
    }

    #[test]
    fn test_entity_ignores_unknown_fields() {
        assert!(validate_entity(&json!({ "id": "did:example:alice", "extra": 1 })).is_ok());
    }

    #[test]
    fn test_entity_missing_id_is_shape_error() {
        let err = validate_entity(&json!({})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "id",
                context: "entity"
            }
        );
    }

    #[test]
    fn test_entity_array_is_shape_error() {
        let err = validate_entity(&json!([])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_entity_bad_uri_is_format_error() {
        let err = validate_entity(&json!({ "id": "not a uri" })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_entity_non_string_id_is_type_error() {
        let err = validate_entity(&json!({ "id": 7 })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    // === component ===

    #[test]
    fn test_component_type_only_is_valid() {
        assert!(validate_component(&json!({ "type": "https://schema.example.org/Flag" })).is_ok());
    }

    #[test]
    fn test_component_full_shape_is_valid() {
        let value = json!({
            "type": "https://schema.example.org/Profile",
            "description": "Basic profile data",
            "label": "Profile",
            "properties": { "nested": { "arbitrary": ["structure", 1, true] } }
        });
        assert!(validate_component(&value).is_ok());
    }

    #[test]
    fn test_component_missing_type_is_shape_error() {
        let err = validate_component(&json!({ "label": "x" })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_component_bare_word_type_is_format_error() {
        let err = validate_component(&json!({ "type": "not-a-uri-either" })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_component_non_string_label_is_type_error() {
        let value = json!({ "type": "https://schema.example.org/X", "label": 3 });
        let err = validate_component(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let value = json!({ "type": "https://schema.example.org/X", "description": false });
        let err = validate_component(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_component_non_object_properties_is_type_error() {
        let value = json!({ "type": "https://schema.example.org/X", "properties": [1, 2] });
        let err = validate_component(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    // === relationship ===

    #[test]
    fn test_relationship_valid() {
        let value = json!({
            "subject": "did:example:alice",
            "predicate": "knows",
            "object": "did:example:bob"
        });
        assert!(validate_relationship(&value).is_ok());
    }

    #[test]
    fn test_relationship_missing_predicate_is_shape_error() {
        let value = json!({ "subject": "did:example:a", "object": "did:example:b" });
        let err = validate_relationship(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "predicate",
                context: "relationship"
            }
        );
    }

    #[test]
    fn test_relationship_empty_predicate_is_format_error() {
        let value = json!({
            "subject": "did:example:a",
            "predicate": "",
            "object": "did:example:b"
        });
        let err = validate_relationship(&value).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPredicate);
    }

    #[test]
    fn test_relationship_bad_endpoint_uri_is_format_error() {
        let value = json!({
            "subject": "not a uri",
            "predicate": "knows",
            "object": "did:example:b"
        });
        let err = validate_relationship(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    // === serialized entity ===

    #[test]
    fn test_serialized_entity_valid() {
        let value = json!({
            "id": "did:example:alice",
            "components": [
                { "type": "https://schema.example.org/Profile", "properties": { "name": "Alice" } }
            ],
            "relationships": [
                { "predicate": "knows", "object": "did:example:bob" }
            ]
        });
        assert!(validate_serialized_entity(&value).is_ok());
    }

    #[test]
    fn test_serialized_entity_empty_sequences_valid() {
        let value = json!({ "id": "did:example:alice", "components": [], "relationships": [] });
        assert!(validate_serialized_entity(&value).is_ok());
    }

    #[test]
    fn test_serialized_entity_missing_sequences_is_shape_error() {
        let err = validate_serialized_entity(&json!({ "id": "did:example:alice" })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_serialized_entity_embedded_form_must_not_carry_subject_fields_it_lacks() {
        // The embedded pair has no subject field; one present is simply
        // ignored, but a missing object still fails.
        let value = json!({
            "id": "did:example:alice",
            "components": [],
            "relationships": [
                { "subject": "did:example:alice", "predicate": "knows" }
            ]
        });
        let err = validate_serialized_entity(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "object",
                context: "outbound relationship"
            }
        );
    }

    #[test]
    fn test_serialized_entity_first_bad_element_fails_whole_value() {
        let value = json!({
            "id": "did:example:alice",
            "components": [
                { "type": "https://schema.example.org/Ok" },
                { "label": "missing type" },
                { "type": 42 }
            ],
            "relationships": []
        });
        let err = validate_serialized_entity(&value).unwrap_err();
        // The second component fails first; the third is never reached.
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "type",
                context: "component"
            }
        );
    }

    #[test]
    fn test_serialized_entity_non_array_components_is_type_error() {
        let value = json!({
            "id": "did:example:alice",
            "components": {},
            "relationships": []
        });
        let err = validate_serialized_entity(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
