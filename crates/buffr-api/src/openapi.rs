//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BuffrLend Pricing API",
        version = "0.1.0",
        description = "Loan quotes, repayment schedules, salary affordability and input validation for BuffrLend short-term salary loans.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::quote::create_quote,
        crate::routes::quote::get_quote,
        crate::routes::affordability::check_affordability,
        crate::routes::validation::validate_inputs,
        crate::routes::policy::get_policy,
        crate::routes::metrics::get_metrics,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Quote DTOs
        crate::routes::quote::QuoteRequest,
        crate::routes::quote::QuoteResponse,
        crate::routes::quote::QuoteDisplay,
        crate::routes::quote::FeesView,
        crate::routes::quote::InstallmentView,
        // Affordability DTOs
        crate::routes::affordability::AffordabilityRequest,
        crate::routes::affordability::AffordabilityResponse,
        // Validation DTOs
        crate::routes::validation::ValidateRequest,
        crate::routes::validation::ValidateResponse,
        crate::routes::validation::AmountVerdict,
        crate::routes::validation::TermVerdict,
        // Policy
        crate::routes::policy::PolicyResponse,
        crate::middleware::metrics::MetricsSnapshot,
    )),
    tags(
        (name = "loans", description = "Loan pricing"),
        (name = "operations", description = "Service operations"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_loan_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/v1/loans/quote",
            "/v1/loans/affordability",
            "/v1/loans/validate",
            "/v1/loans/policy",
            "/metrics",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
