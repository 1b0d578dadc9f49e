//! Deal extraction service using LLM
//!
//! Turns one investment memo into a validated deal record.

use std::borrow::Cow;
use std::sync::Arc;

use crate::model::{ExtractionRequest, ValidatedExtraction};
use crate::service::error::ExtractionError;
use crate::service::llm::{ModelInvoker, ModelRequest};
use crate::service::text::truncate_document;

pub mod prompts;
pub mod validation;

use prompts::{DEAL_EXTRACTION_SYSTEM_PROMPT, build_deal_prompt};
pub use validation::{DealCatalogs, validate_deal_response};

/// Service for extracting deal records from memos
pub struct DealExtractionService {
    invoker: Arc<dyn ModelInvoker>,
    model: String,
    default_lga_id: Option<String>,
}

impl DealExtractionService {
    /// Creates a new deal extraction service
    ///
    /// `default_lga_id` is the fallback LGA used when the model proposes none
    /// that exist in the request's catalog.
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        model: impl Into<String>,
        default_lga_id: Option<String>,
    ) -> Self {
        let model = model.into();

        tracing::info!(
            model = %model,
            default_lga_id = ?default_lga_id,
            "Deal extraction service initialized"
        );

        Self {
            invoker,
            model,
            default_lga_id,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Extract a validated deal record from a memo
    ///
    /// Makes exactly one model call. Upstream failures are returned as
    /// [`ExtractionError::UpstreamFailure`] and are never retried here.
    pub async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ValidatedExtraction, ExtractionError> {
        let start_time = std::time::Instant::now();

        let document = truncate_document(&request.document_text);
        let prompt = build_deal_prompt(
            &document,
            request.label.as_deref(),
            request.opportunity_types.as_deref(),
            request.lgas.as_deref(),
        );
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model,
            label = ?request.label,
            document_chars = request.document_text.chars().count(),
            truncated = matches!(document, Cow::Owned(_)),
            "Initiating model call for deal extraction"
        );

        let raw = match self
            .invoker
            .complete(ModelRequest {
                model: &self.model,
                preamble: DEAL_EXTRACTION_SYSTEM_PROMPT,
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
                    response_length = raw.len(),
                    "Model call for deal extraction completed successfully"
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
                    "Model call for deal extraction failed"
                );
                return Err(ExtractionError::UpstreamFailure(e.to_string()));
            }
        };

        let catalogs = DealCatalogs {
            opportunity_types: request.opportunity_types.as_deref().unwrap_or_default(),
            lgas: request.lgas.as_deref().unwrap_or_default(),
            default_lga_id: self.default_lga_id.as_deref(),
        };

        let extraction = validate_deal_response(&raw, catalogs).inspect_err(|e| {
            tracing::warn!(
                model = %self.model,
                kind = e.kind(),
                error = %e,
                "Model answer for deal extraction rejected"
            );
        })?;

        if !extraction.warnings.is_empty() {
            tracing::warn!(
                deal = %extraction.name,
                warnings = ?extraction.warnings,
                "Deal extraction fell back to defaults"
            );
        }

        tracing::debug!(
            deal = %extraction.name,
            stage = %extraction.stage,
            opportunity_type = ?extraction.opportunity_type.matched_id(),
            lga_ids = ?extraction.lga_ids,
            "Deal extraction validated"
        );

        Ok(extraction)
    }
}
