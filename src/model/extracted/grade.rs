use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Strategy grade answer as returned by the model
///
/// Stricter than the deal shape: evidence values must be strings and every
/// missing-element entry must be well typed, or the whole answer is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedGrade {
    pub grade_letter: Option<Value>,
    pub grade_rationale: Option<Value>,
    pub evidence_by_component: Option<HashMap<String, Option<String>>>,
    pub missing_elements: Option<Vec<ExtractedMissingElement>>,
    pub scope_discipline_notes: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMissingElement {
    pub component_id: String,
    pub reason: String,
}
