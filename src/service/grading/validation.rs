//! Validation of model answers for strategy grading

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::model::extracted::ExtractedGrade;
use crate::model::{BlueprintComponent, GradeLetter, GradeResult, MissingElement};
use crate::service::error::ExtractionError;
use crate::service::normalize::{FieldWarnings, normalize_enum, text_or_placeholder};
use crate::service::response::parse_model_response;

pub const RATIONALE_PLACEHOLDER: &str = "No rationale provided.";
pub const SCOPE_NOTES_PLACEHOLDER: &str = "No scope discipline notes.";

/// Extract, shape-check and normalize a raw grading answer
pub fn validate_grade_response(raw: &str) -> Result<GradeResult, ExtractionError> {
    let extracted: ExtractedGrade = parse_model_response(raw)?;
    Ok(normalize_grade(extracted))
}

/// Normalize a shape-checked grading answer into a graded record
pub fn normalize_grade(extracted: ExtractedGrade) -> GradeResult {
    let mut warnings = FieldWarnings::new();

    let grade_letter: GradeLetter = normalize_enum(extracted.grade_letter.as_ref(), &mut warnings);

    let mut supplied = extracted.evidence_by_component.unwrap_or_default();
    let mut evidence = BTreeMap::new();
    for component in BlueprintComponent::iter() {
        let text = supplied
            .remove(component.as_str())
            .flatten()
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        if text.is_empty() {
            warnings.record_default(
                &format!("evidenceByComponent.{}", component.as_str()),
                "no evidence given",
                "",
            );
        }
        evidence.insert(component, text);
    }
    if !supplied.is_empty() {
        tracing::debug!(
            ignored_keys = ?supplied.keys().collect::<Vec<_>>(),
            "Ignoring evidence for unknown components"
        );
    }

    let missing_elements = extracted
        .missing_elements
        .unwrap_or_default()
        .into_iter()
        .map(|m| MissingElement {
            component_id: m.component_id,
            reason: m.reason,
        })
        .collect();

    GradeResult {
        grade_letter,
        rationale: text_or_placeholder(extracted.grade_rationale.as_ref(), RATIONALE_PLACEHOLDER),
        evidence,
        missing_elements,
        scope_discipline_notes: text_or_placeholder(
            extracted.scope_discipline_notes.as_ref(),
            SCOPE_NOTES_PLACEHOLDER,
        ),
        warnings: warnings.into_vec(),
    }
}
