//! REST API endpoint for strategy grading

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::model::{GradeResult, GradingContext, StrategyComponents};

/// Request body for grading a strategy
#[derive(Debug, Deserialize, ToSchema)]
pub struct GradeRequest {
    pub components: StrategyComponents,
    #[serde(default)]
    pub context: GradingContext,
}

/// Grade a strategy blueprint against the six-component rubric
#[utoipa::path(
    post,
    path = "/v1/strategies/grade",
    request_body = GradeRequest,
    responses(
        (status = 200, description = "Strategy graded", body = GradeResult),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "Model answer could not be used", body = ErrorResponse),
        (status = 502, description = "Model call failed", body = ErrorResponse)
    ),
    tag = "strategies"
)]
#[post("/v1/strategies/grade")]
pub async fn grade_strategy(
    state: web::Data<AppState>,
    request: web::Json<GradeRequest>,
) -> Result<HttpResponse, ApiError> {
    let GradeRequest {
        components,
        context,
    } = request.into_inner();

    let result = state
        .retry_policy
        .run("strategy_grading", || {
            state.grading_service.grade(&components, &context)
        })
        .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Configure strategy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(grade_strategy);
}
