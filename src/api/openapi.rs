//! OpenAPI specification endpoints

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::{deals, health, strategies};
use crate::model::{
    BlueprintComponent, CatalogEntry, DominantConstraint, ExtractionRequest, GradeLetter,
    GradeResult, GradingContext, MissingElement, ReadinessState, Risk, Stage, Stakeholder,
    StrategyComponents, TaxonomyDecision, ValidatedExtraction,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deal Intel API",
        description = "Deal extraction and strategy grading for regional economic development"
    ),
    paths(
        deals::extract_deal,
        strategies::grade_strategy,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        ExtractionRequest,
        CatalogEntry,
        ValidatedExtraction,
        Stage,
        ReadinessState,
        DominantConstraint,
        Stakeholder,
        Risk,
        TaxonomyDecision,
        strategies::GradeRequest,
        StrategyComponents,
        GradingContext,
        GradeResult,
        GradeLetter,
        BlueprintComponent,
        MissingElement,
        ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::ModelStatus,
    )),
    tags(
        (name = "deals", description = "Structured extraction of deals from investment memos"),
        (name = "strategies", description = "Rubric grading of strategy blueprints"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> Result<HttpResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI YAML: {}", e)))?;

    Ok(HttpResponse::Ok().content_type("text/yaml").body(yaml))
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_pipeline_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/v1/deals/extract"));
        assert!(doc.paths.paths.contains_key("/v1/strategies/grade"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }

    #[test]
    fn test_yaml_renders() {
        let yaml = ApiDoc::openapi().to_yaml().unwrap();
        assert!(yaml.contains("/v1/deals/extract"));
    }
}
