//! REST API endpoint for deal extraction

use actix_web::{HttpResponse, post, web};

use crate::api::error::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::model::{ExtractionRequest, ValidatedExtraction};

/// Extract a structured deal record from an investment memo
///
/// Catalogs are supplied per request. A failed model call is retried with
/// backoff; an unusable model answer is reported at once.
#[utoipa::path(
    post,
    path = "/v1/deals/extract",
    request_body = ExtractionRequest,
    responses(
        (status = 200, description = "Deal extracted", body = ValidatedExtraction),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "Model answer could not be used", body = ErrorResponse),
        (status = 502, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "deals"
)]
#[post("/v1/deals/extract")]
pub async fn extract_deal(
    state: web::Data<AppState>,
    request: web::Json<ExtractionRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();

    let extraction = state
        .retry_policy
        .run("deal_extraction", || state.deal_service.extract(&request))
        .await?;

    Ok(HttpResponse::Ok().json(extraction))
}

/// Configure deal routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(extract_deal);
}
