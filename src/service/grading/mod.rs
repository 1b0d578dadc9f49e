//! Strategy grading service using LLM
//!
//! Grades a strategy blueprint against the six-component rubric.

use std::sync::Arc;

use crate::model::{GradeResult, GradingContext, StrategyComponents};
use crate::service::error::ExtractionError;
use crate::service::llm::{ModelInvoker, ModelRequest};

pub mod prompts;
pub mod validation;

use prompts::{STRATEGY_GRADING_SYSTEM_PROMPT, build_grading_prompt};
pub use validation::validate_grade_response;

/// Service for grading strategy documents
pub struct StrategyGradingService {
    invoker: Arc<dyn ModelInvoker>,
    model: String,
}

impl StrategyGradingService {
    /// Creates a new strategy grading service
    pub fn new(invoker: Arc<dyn ModelInvoker>, model: impl Into<String>) -> Self {
        let model = model.into();

        tracing::info!(
            model = %model,
            "Strategy grading service initialized"
        );

        Self { invoker, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Grade a strategy from its six component bodies
    pub async fn grade(
        &self,
        components: &StrategyComponents,
        context: &GradingContext,
    ) -> Result<GradeResult, ExtractionError> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            strategy = ?context.strategy_title,
            region = ?context.region,
            "Initiating model call for strategy grading"
        );

        let prompt = build_grading_prompt(components, context);
        let prompt_length = prompt.len();

        let raw = match self
            .invoker
            .complete(ModelRequest {
                model: &self.model,
                preamble: STRATEGY_GRADING_SYSTEM_PROMPT,
                prompt: &prompt,
            })
            .await
        {
            Ok(raw) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "Model call for strategy grading completed successfully"
                );
                raw
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Model call for strategy grading failed"
                );
                return Err(ExtractionError::UpstreamFailure(e.to_string()));
            }
        };

        let result = validate_grade_response(&raw).inspect_err(|e| {
            tracing::warn!(
                model = %self.model,
                kind = e.kind(),
                error = %e,
                "Model answer for strategy grading rejected"
            );
        })?;

        if !result.warnings.is_empty() {
            tracing::warn!(
                grade = %result.grade_letter,
                warnings = ?result.warnings,
                "Strategy grading fell back to defaults"
            );
        }

        tracing::debug!(
            grade = %result.grade_letter,
            missing_elements = result.missing_elements.len(),
            "Strategy grading validated"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlueprintComponent, GradeLetter};
    use crate::service::llm::testing::ScriptedInvoker;

    fn components() -> StrategyComponents {
        StrategyComponents {
            regional_context: "Population 180,000; mining accounts for 40% of output.".to_string(),
            priority_sectors: "Resources technology, agribusiness, visitor economy.".to_string(),
            investment_pipeline: "Twelve projects listed with stage and blocker.".to_string(),
            enabling_infrastructure: "Port expansion and industrial land release.".to_string(),
            governance_and_delivery: "Regional roundtable chaired by the mayor.".to_string(),
            measurement_and_evaluation: String::new(),
        }
    }

    #[tokio::test]
    async fn test_grade_validates_model_answer() {
        let invoker = Arc::new(ScriptedInvoker::answering(
            r#"```json
{"gradeLetter": "B-", "gradeRationale": "No measurement framework.",
 "evidenceByComponent": {"regional-context": "Population 180,000", "priority-sectors": "Resources technology",
 "investment-pipeline": "Twelve projects", "enabling-infrastructure": "Port expansion",
 "governance-and-delivery": "Regional roundtable"},
 "missingElements": [{"componentId": "measurement-and-evaluation", "reason": "Section is empty"}]}
```"#,
        ));
        let service = StrategyGradingService::new(invoker.clone(), "test-model");
        let result = service
            .grade(&components(), &GradingContext::default())
            .await
            .unwrap();

        assert_eq!(result.grade_letter, GradeLetter::BMinus);
        assert_eq!(result.evidence[&BlueprintComponent::MeasurementAndEvaluation], "");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.missing_elements.len(), 1);
        assert!(invoker.last_prompt().contains("Port expansion and industrial land release."));
    }

    #[tokio::test]
    async fn test_upstream_error_is_upstream_failure() {
        let invoker = Arc::new(ScriptedInvoker::failing("429 Too Many Requests"));
        let service = StrategyGradingService::new(invoker, "test-model");
        let err = service
            .grade(&components(), &GradingContext::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn test_malformed_missing_element_is_invalid_shape() {
        let invoker = Arc::new(ScriptedInvoker::answering(
            r#"{"gradeLetter": "A", "missingElements": ["governance"]}"#,
        ));
        let service = StrategyGradingService::new(invoker, "test-model");
        let err = service
            .grade(&components(), &GradingContext::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::InvalidShape(_)));
    }
}
