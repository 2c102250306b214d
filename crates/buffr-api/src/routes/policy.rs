//! # Lending Policy
//!
//! `GET /v1/loans/policy` publishes the constants every quote is priced
//! with, so a client can render limits without hard-coding them.

use axum::routing::get;
use axum::{Json, Router};
use buffr_core::policy;
use buffr_core::Money;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiResponse;
use crate::state::AppState;

/// Current pricing policy. Rates are whole percentages.
#[derive(Debug, Serialize, ToSchema)]
pub struct PolicyResponse {
    pub interest_rate: i64,
    pub namfisa_levy_rate: i64,
    #[schema(value_type = String, example = "15.00")]
    pub stamp_duty: Money,
    pub processing_fee_rate: i64,
    #[schema(value_type = String, example = "20.00")]
    pub min_processing_fee: Money,
    #[schema(value_type = String, example = "100.00")]
    pub max_processing_fee: Money,
    #[schema(value_type = String, example = "500.00")]
    pub min_loan_amount: Money,
    #[schema(value_type = String, example = "10000.00")]
    pub max_loan_amount: Money,
    pub min_loan_term: u32,
    pub max_loan_term: u32,
    /// A loan may be at most `1 / affordability_divisor` of salary.
    pub affordability_divisor: u32,
    #[schema(example = "NAD")]
    pub currency: String,
    #[schema(example = "N$")]
    pub currency_symbol: String,
}

impl PolicyResponse {
    /// The compiled-in policy.
    pub fn current() -> Self {
        Self {
            interest_rate: policy::INTEREST_RATE,
            namfisa_levy_rate: policy::NAMFISA_LEVY_RATE,
            stamp_duty: policy::STAMP_DUTY,
            processing_fee_rate: policy::PROCESSING_FEE_RATE,
            min_processing_fee: policy::MIN_PROCESSING_FEE,
            max_processing_fee: policy::MAX_PROCESSING_FEE,
            min_loan_amount: policy::MIN_LOAN_AMOUNT,
            max_loan_amount: policy::MAX_LOAN_AMOUNT,
            min_loan_term: policy::MIN_LOAN_TERM,
            max_loan_term: policy::MAX_LOAN_TERM,
            affordability_divisor: policy::AFFORDABILITY_DIVISOR,
            currency: policy::CURRENCY_CODE.to_string(),
            currency_symbol: policy::CURRENCY_SYMBOL.to_string(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/loans/policy", get(get_policy))
}

/// GET /v1/loans/policy: Current pricing policy.
#[utoipa::path(
    get,
    path = "/v1/loans/policy",
    responses((status = 200, description = "Policy in the success envelope", body = PolicyResponse)),
    tag = "loans"
)]
pub(crate) async fn get_policy() -> Json<ApiResponse<PolicyResponse>> {
    ApiResponse::ok(PolicyResponse::current())
}
