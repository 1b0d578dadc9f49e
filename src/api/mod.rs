pub mod deals;
pub mod error;
pub mod health;
pub mod openapi;
pub mod retry;
pub mod strategies;

use actix_web::web;

use crate::api::error::ApiError;

/// Largest accepted JSON request body. Documents are truncated later, not rejected.
const JSON_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Register every route and the JSON extractor configuration
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .configure(deals::configure)
    .configure(strategies::configure)
    .configure(health::configure)
    .configure(openapi::configure);
}
