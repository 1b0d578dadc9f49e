//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::ExtractionError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Model answer contained no usable JSON (422)
    #[error("Unparseable model response: {0}")]
    UnparseableModelResponse(String),

    /// Model answer had an untrustworthy structure (422)
    #[error("Invalid model response: {0}")]
    InvalidModelResponse(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// External service error (502)
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::UnparseableModelResponse(_) => "unparseable_model_response",
            ApiError::InvalidModelResponse(_) => "invalid_model_response",
            ApiError::Internal(_) => "internal_error",
            ApiError::ExternalService(_) => "external_service_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnparseableModelResponse(_) | ApiError::InvalidModelResponse(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = self.error_type();

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::ParseFailure(msg) => ApiError::UnparseableModelResponse(msg),
            ExtractionError::InvalidShape(msg) => ApiError::InvalidModelResponse(msg),
            ExtractionError::UpstreamFailure(msg) => ApiError::ExternalService(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_errors_map_to_statuses() {
        let cases = [
            (
                ExtractionError::ParseFailure("no JSON".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "unparseable_model_response",
            ),
            (
                ExtractionError::InvalidShape("stakeholders".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_model_response",
            ),
            (
                ExtractionError::UpstreamFailure("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
                "external_service_error",
            ),
        ];

        for (err, status, error_type) in cases {
            let api_error = ApiError::from(err);
            assert_eq!(api_error.status_code(), status);
            assert_eq!(api_error.error_type(), error_type);
        }
    }

    #[test]
    fn test_bad_request_is_400() {
        assert_eq!(
            ApiError::BadRequest("missing document_text".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
