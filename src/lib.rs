//! Deal extraction and strategy grading for a regional economic development
//! dashboard.
//!
//! [`service::DealExtractionService`] turns an investment memo into a validated
//! deal record; [`service::StrategyGradingService`] grades a strategy blueprint
//! against a six-component rubric. Both send one prompt to a model through
//! [`service::ModelInvoker`] and never trust the answer beyond what validation
//! proves.

pub mod api;
pub mod app;
pub mod model;
pub mod service;
