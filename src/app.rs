//! Application state and service initialization
//!
//! This module centralizes service construction so handlers and tests share
//! one dependency graph.

use std::sync::Arc;

use crate::api::retry::RetryPolicy;
use crate::model::Config;
use crate::service::{DealExtractionService, LlmClient, ModelInvoker, StrategyGradingService};

/// Environment variable for the OpenAI API key
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state containing all services and shared resources
pub struct AppState {
    /// Memo to deal record extraction
    pub deal_service: DealExtractionService,
    /// Strategy blueprint grading
    pub grading_service: StrategyGradingService,
    /// How the HTTP layer retries failed model calls
    pub retry_policy: RetryPolicy,
}

impl AppState {
    /// Initialize all services from configuration
    ///
    /// Requires `OPENAI_API_KEY`; both services share one LLM client.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        let llm_client = LlmClient::new(&api_key)
            .map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;

        Ok(Self::with_invoker(Arc::new(llm_client), config))
    }

    /// Build state around an arbitrary model invoker
    pub fn with_invoker(invoker: Arc<dyn ModelInvoker>, config: &Config) -> Self {
        let deal_service = DealExtractionService::new(
            Arc::clone(&invoker),
            config.deal_extraction_model.clone(),
            config.pipeline.default_lga_id.clone(),
        );
        let grading_service =
            StrategyGradingService::new(invoker, config.strategy_grading_model.clone());

        Self {
            deal_service,
            grading_service,
            retry_policy: RetryPolicy::from(&config.pipeline),
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
