//! Recovery of a JSON payload from raw model text
//!
//! The model may answer with bare JSON, JSON inside a markdown fence, or JSON
//! wrapped in prose. Extraction is permissive about the wrapping and strict
//! about the content.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::service::error::ExtractionError;

/// Parse the span between the first `{` and the last `}` of `raw` as JSON.
pub fn extract_json_span(raw: &str) -> Result<Value, ExtractionError> {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(ExtractionError::ParseFailure(
            "no JSON object found in model response".to_string(),
        ));
    };

    if end < start {
        return Err(ExtractionError::ParseFailure(
            "no JSON object found in model response".to_string(),
        ));
    }

    serde_json::from_str(&raw[start..=end])
        .map_err(|e| ExtractionError::ParseFailure(format!("malformed JSON: {}", e)))
}

/// Check the parsed value against the expected answer shape `T`.
///
/// Every field of `T` is optional; this only fails when the top level is not an
/// object or a present field has a type that makes it untrustworthy.
pub fn parse_shape<T: DeserializeOwned>(value: Value) -> Result<T, ExtractionError> {
    if !value.is_object() {
        return Err(ExtractionError::InvalidShape(format!(
            "expected a JSON object at the top level, got {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| ExtractionError::InvalidShape(e.to_string()))
}

/// Extract and shape-check a model answer in one step
pub fn parse_model_response<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractionError> {
    parse_shape(extract_json_span(raw)?)
}

/// Human-readable JSON type name for warnings and errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::{ExtractedDeal, ExtractedGrade};
    use serde_json::json;

    #[test]
    fn test_plain_json() {
        let value = extract_json_span(r#"{"name":"X"}"#).unwrap();
        assert_eq!(value, json!({"name": "X"}));
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"name\":\"X\",\"stage\":\"structuring\"}\n```";
        let value = extract_json_span(raw).unwrap();
        assert_eq!(value["stage"], "structuring");
    }

    #[test]
    fn test_prose_wrapped_json() {
        let raw = "Sure! Here is the extraction:\n{\"name\": \"Port upgrade\"}\nLet me know if you need more.";
        let value = extract_json_span(raw).unwrap();
        assert_eq!(value["name"], "Port upgrade");
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let raw = r#"{"opportunityType": {"existingId": "hydrogen"}}"#;
        let value = extract_json_span(raw).unwrap();
        assert_eq!(value["opportunityType"]["existingId"], "hydrogen");
    }

    #[test]
    fn test_not_json_is_parse_failure() {
        let err = extract_json_span("This is not JSON at all").unwrap_err();
        assert!(matches!(err, ExtractionError::ParseFailure(_)));
    }

    #[test]
    fn test_reversed_braces_is_parse_failure() {
        let err = extract_json_span("} nothing here {").unwrap_err();
        assert!(matches!(err, ExtractionError::ParseFailure(_)));
    }

    #[test]
    fn test_truncated_json_is_parse_failure() {
        let err = extract_json_span(r#"{"name": "X", "stage": }"#).unwrap_err();
        assert!(matches!(err, ExtractionError::ParseFailure(_)));
    }

    #[test]
    fn test_empty_object_has_valid_shape() {
        let deal: ExtractedDeal = parse_model_response("{}").unwrap();
        assert!(deal.name.is_none());
        assert!(deal.stakeholders.is_none());
    }

    #[test]
    fn test_list_field_with_wrong_type_is_invalid_shape() {
        let err = parse_model_response::<ExtractedDeal>(r#"{"stakeholders": "council"}"#)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidShape(_)));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let deal: ExtractedDeal =
            parse_model_response(r#"{"stage": null, "risks": null, "opportunityType": null}"#)
                .unwrap();
        assert!(deal.stage.is_none());
        assert!(deal.risks.is_none());
        assert!(deal.opportunity_type.is_none());
    }

    #[test]
    fn test_non_string_classification_id_is_invalid_shape() {
        let err = parse_model_response::<ExtractedDeal>(r#"{"opportunityType": {"existingId": 7}}"#)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidShape(_)));
    }

    #[test]
    fn test_malformed_missing_element_rejects_grade() {
        let raw = r#"{"missingElements": [{"componentId": "priority-sectors", "reason": "none"}, {"componentId": 3}]}"#;
        let err = parse_model_response::<ExtractedGrade>(raw).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidShape(_)));
    }

    #[test]
    fn test_non_string_evidence_rejects_grade() {
        let raw = r#"{"evidenceByComponent": {"regional-context": ["a", "b"]}}"#;
        let err = parse_model_response::<ExtractedGrade>(raw).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidShape(_)));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let deal: ExtractedDeal =
            parse_model_response(r#"{"name": "X", "confidence": 0.4}"#).unwrap();
        assert_eq!(deal.name, Some(json!("X")));
    }
}
