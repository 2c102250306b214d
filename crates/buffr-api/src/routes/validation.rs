//! # Inline Validation
//!
//! `POST /v1/loans/validate` runs the lenient validators so a form can
//! show guidance as the borrower types. It always answers 200: missing,
//! non-numeric or out-of-range inputs come back as `is_valid: false`
//! with a message and a suggested replacement.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use buffr_calculator::{validate_loan_amount, validate_loan_term, AmountValidation, TermValidation};
use buffr_core::Money;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::ApiResponse;
use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_json;
use crate::state::AppState;

/// Raw form input. Either field may be a number, a numeric string, or absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ValidateRequest {
    #[serde(default)]
    #[schema(value_type = Object, example = "5000")]
    pub loan_amount: Value,
    #[serde(default)]
    #[schema(value_type = Object, example = 3)]
    pub loan_term_months: Value,
}

/// Verdict for the amount field.
#[derive(Debug, Serialize, ToSchema)]
pub struct AmountVerdict {
    pub is_valid: bool,
    pub error: Option<String>,
    #[schema(value_type = String, example = "500.00")]
    pub corrected_amount: Money,
}

impl From<AmountValidation> for AmountVerdict {
    fn from(result: AmountValidation) -> Self {
        Self {
            is_valid: result.is_valid,
            error: result.message(),
            corrected_amount: result.corrected_amount,
        }
    }
}

/// Verdict for the term field.
#[derive(Debug, Serialize, ToSchema)]
pub struct TermVerdict {
    pub is_valid: bool,
    pub error: Option<String>,
    pub corrected_term: u32,
}

impl From<TermValidation> for TermVerdict {
    fn from(result: TermValidation) -> Self {
        Self {
            is_valid: result.is_valid,
            error: result.message(),
            corrected_term: result.corrected_term,
        }
    }
}

/// Both verdicts.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateResponse {
    pub amount: AmountVerdict,
    pub term: TermVerdict,
}

/// Read a form value as a number. Anything unreadable is NaN, which the
/// validators report as "must be a valid number".
fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => match s.trim().parse::<Money>() {
            Ok(money) => money.to_f64(),
            Err(_) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        },
        _ => f64::NAN,
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/loans/validate", post(validate_inputs))
}

/// POST /v1/loans/validate: Check amount and term without pricing.
#[utoipa::path(
    post,
    path = "/v1/loans/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Verdicts in the success envelope", body = ValidateResponse),
        (status = 400, description = "Body is not JSON", body = ErrorBody),
    ),
    tag = "loans"
)]
pub(crate) async fn validate_inputs(
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ValidateResponse>>, AppError> {
    let req = extract_json(body)?;
    let amount = validate_loan_amount(numeric(&req.loan_amount));
    let term = validate_loan_term(numeric(&req.loan_term_months));
    Ok(ApiResponse::ok(ValidateResponse {
        amount: amount.into(),
        term: term.into(),
    }))
}
