pub mod deals;
pub mod error;
pub mod grading;
pub mod llm;
pub mod membership;
pub mod normalize;
pub mod prompt;
pub mod response;
pub mod taxonomy;
pub mod text;

pub use deals::DealExtractionService;
pub use error::ExtractionError;
pub use grading::StrategyGradingService;
pub use llm::{LlmClient, LlmError, ModelInvoker, ModelRequest};
