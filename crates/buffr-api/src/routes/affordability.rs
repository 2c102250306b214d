//! # Salary Affordability
//!
//! `POST /v1/loans/affordability` applies the 1/3 rule: the requested
//! principal must not exceed a third of the monthly salary.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use buffr_calculator::{validate_salary_compliance, SalaryComplianceResult};
use buffr_core::Money;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResponse;
use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_json;
use crate::state::AppState;

/// Request to check a loan against a salary.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AffordabilityRequest {
    #[schema(value_type = String, example = "5000")]
    pub loan_amount: Money,
    #[schema(value_type = String, example = "15000")]
    pub monthly_salary: Money,
}

/// Affordability verdict.
#[derive(Debug, Serialize, ToSchema)]
pub struct AffordabilityResponse {
    pub is_compliant: bool,
    /// Largest compliant principal for this salary.
    #[schema(value_type = String, example = "5000.00")]
    pub max_loan_amount: Money,
    /// Loan as a percentage of salary.
    pub compliance_percentage: f64,
    /// `max_loan_amount`, formatted.
    #[schema(example = "N$5,000")]
    pub display_max_loan_amount: String,
}

impl From<SalaryComplianceResult> for AffordabilityResponse {
    fn from(result: SalaryComplianceResult) -> Self {
        Self {
            is_compliant: result.is_compliant,
            max_loan_amount: result.max_loan_amount,
            compliance_percentage: result.compliance_percentage,
            display_max_loan_amount: result.max_loan_amount.to_string(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/loans/affordability", post(check_affordability))
}

/// POST /v1/loans/affordability: Check a loan against the 1/3 rule.
#[utoipa::path(
    post,
    path = "/v1/loans/affordability",
    request_body = AffordabilityRequest,
    responses(
        (status = 200, description = "Verdict in the success envelope", body = AffordabilityResponse),
        (status = 400, description = "Negative loan or non-positive salary", body = ErrorBody),
    ),
    tag = "loans"
)]
pub(crate) async fn check_affordability(
    body: Result<Json<AffordabilityRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AffordabilityResponse>>, AppError> {
    let req = extract_json(body)?;
    let result = validate_salary_compliance(req.loan_amount, req.monthly_salary)?;
    Ok(ApiResponse::ok(result.into()))
}
