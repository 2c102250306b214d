//! # Loan Quotes
//!
//! `POST /v1/loans/quote` prices a JSON request and, when a first due date
//! can be determined, lays out the repayment schedule. `GET /v1/loans/quote`
//! prices the same inputs from a query string.
//!
//! The term arrives as a raw number so that `3.5` is reported as
//! "Loan term must be a whole number" rather than a decode failure.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use buffr_calculator::{
    first_due_date_for, quote, repayment_schedule, validate_loan_term, validate_money_amount,
    FeeBreakdown, Installment, LoanDetails, RepaymentSchedule,
};
use buffr_core::{LoanCalculationError, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::ApiResponse;
use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_query, extract_validated_json, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request to price a loan.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Principal, as a decimal string or number.
    #[schema(value_type = String, example = "5000")]
    pub loan_amount: Money,
    /// Term in whole months.
    #[schema(example = 3)]
    pub loan_term_months: f64,
    /// Date of the first deduction. Adds a repayment schedule.
    pub first_due_date: Option<NaiveDate>,
    /// Disbursement date; with `payday`, derives the first due date.
    pub disbursed_on: Option<NaiveDate>,
    /// Borrower's payday, day of month 1-31.
    pub payday: Option<u32>,
}

impl Validate for QuoteRequest {
    fn validate(&self) -> Result<(), String> {
        if self.first_due_date.is_some() && (self.payday.is_some() || self.disbursed_on.is_some())
        {
            return Err("first_due_date cannot be combined with disbursed_on/payday".to_string());
        }
        match (self.disbursed_on, self.payday) {
            (Some(_), None) => Err("disbursed_on requires payday".to_string()),
            (None, Some(_)) => Err("payday requires disbursed_on".to_string()),
            (Some(_), Some(day)) if !(1..=31).contains(&day) => {
                Err("payday must be between 1 and 31".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl QuoteRequest {
    /// The first due date, given directly or derived from the payday.
    fn first_due_date(&self) -> Result<Option<NaiveDate>, AppError> {
        if let Some(date) = self.first_due_date {
            return Ok(Some(date));
        }
        match (self.disbursed_on, self.payday) {
            (Some(disbursed_on), Some(payday)) => first_due_date_for(disbursed_on, payday)
                .map(Some)
                .ok_or_else(|| {
                    AppError::Validation("no payday after disbursed_on in the calendar".to_string())
                }),
            _ => Ok(None),
        }
    }
}

/// Query string for `GET /v1/loans/quote`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    /// Principal, e.g. `5000` or `N$5,000.00`.
    pub loan_amount: String,
    /// Term in whole months.
    pub loan_term_months: String,
}

/// Itemised fees.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeesView {
    #[schema(value_type = String, example = "50.00")]
    pub processing_fee: Money,
    #[schema(value_type = String, example = "200.00")]
    pub namfisa_levy: Money,
    #[schema(value_type = String, example = "15.00")]
    pub stamp_duty: Money,
    #[schema(value_type = String, example = "265.00")]
    pub total_fees: Money,
}

impl From<FeeBreakdown> for FeesView {
    fn from(fees: FeeBreakdown) -> Self {
        Self {
            processing_fee: fees.processing_fee,
            namfisa_levy: fees.namfisa_levy,
            stamp_duty: fees.stamp_duty,
            total_fees: fees.total_fees,
        }
    }
}

/// Formatted amounts, ready to render.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteDisplay {
    #[schema(example = "N$5,000")]
    pub loan_amount: String,
    #[schema(example = "N$750")]
    pub buffr_fee_amount: String,
    #[schema(example = "N$265")]
    pub user_total_fees: String,
    #[schema(example = "N$6,015")]
    pub total_payable: String,
    #[schema(example = "N$2,005")]
    pub monthly_payment: String,
}

/// One scheduled deduction.
#[derive(Debug, Serialize, ToSchema)]
pub struct InstallmentView {
    pub number: u32,
    pub due_date: NaiveDate,
    #[schema(value_type = String)]
    pub amount: Money,
    #[schema(value_type = String)]
    pub remaining_balance: Money,
    /// `amount`, formatted.
    pub display_amount: String,
}

impl From<Installment> for InstallmentView {
    fn from(installment: Installment) -> Self {
        Self {
            number: installment.number,
            due_date: installment.due_date,
            amount: installment.amount,
            remaining_balance: installment.remaining_balance,
            display_amount: installment.amount.to_string(),
        }
    }
}

/// A priced loan.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    #[schema(value_type = String, example = "5000.00")]
    pub loan_amount: Money,
    pub loan_term_months: u32,
    /// Interest rate in percent.
    pub buffr_fee_rate: i64,
    #[schema(value_type = String, example = "750.00")]
    pub buffr_fee_amount: Money,
    #[schema(value_type = String, example = "265.00")]
    pub user_total_fees: Money,
    #[schema(value_type = String, example = "6015.00")]
    pub total_payable: Money,
    #[schema(value_type = String, example = "2005.00")]
    pub monthly_payment: Money,
    pub fees: FeesView,
    pub display: QuoteDisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<InstallmentView>>,
}

impl QuoteResponse {
    fn new(details: LoanDetails, schedule: Option<RepaymentSchedule>) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            loan_amount: details.loan_amount,
            loan_term_months: details.loan_term_months,
            buffr_fee_rate: details.buffr_fee_rate,
            buffr_fee_amount: details.buffr_fee_amount,
            user_total_fees: details.user_total_fees,
            total_payable: details.total_payable,
            monthly_payment: details.monthly_payment,
            fees: details.fees.into(),
            display: QuoteDisplay {
                loan_amount: details.loan_amount.to_string(),
                buffr_fee_amount: details.buffr_fee_amount.to_string(),
                user_total_fees: details.user_total_fees.to_string(),
                total_payable: details.total_payable.to_string(),
                monthly_payment: details.monthly_payment.to_string(),
            },
            schedule: schedule
                .map(|s| s.installments.into_iter().map(InstallmentView::from).collect()),
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/loans/quote", get(get_quote).post(create_quote))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Validate raw inputs and price them. The amount is checked before the term.
fn price(loan_amount: Money, loan_term_months: f64) -> Result<LoanDetails, LoanCalculationError> {
    let amount = validate_money_amount(loan_amount).into_result()?;
    let term = validate_loan_term(loan_term_months).into_result()?;
    quote(amount, term)
}

/// POST /v1/loans/quote: Price a loan, optionally with its schedule.
#[utoipa::path(
    post,
    path = "/v1/loans/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote in the success envelope", body = QuoteResponse),
        (status = 400, description = "Amount or term rejected", body = ErrorBody),
        (status = 422, description = "Inconsistent schedule inputs", body = ErrorBody),
    ),
    tag = "loans"
)]
pub(crate) async fn create_quote(
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let req = extract_validated_json(body)?;
    let details = price(req.loan_amount, req.loan_term_months)?;
    let schedule = req
        .first_due_date()?
        .map(|date| repayment_schedule(&details, date))
        .transpose()?;

    tracing::info!(
        loan_amount = %details.loan_amount,
        term_months = details.loan_term_months,
        scheduled = schedule.is_some(),
        "quote issued"
    );

    Ok(ApiResponse::ok(QuoteResponse::new(details, schedule)))
}

/// GET /v1/loans/quote: Price a loan from query parameters.
#[utoipa::path(
    get,
    path = "/v1/loans/quote",
    params(QuoteQuery),
    responses(
        (status = 200, description = "Quote in the success envelope", body = QuoteResponse),
        (status = 400, description = "Amount or term rejected", body = ErrorBody),
    ),
    tag = "loans"
)]
pub(crate) async fn get_quote(
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let q = extract_query(query)?;
    let amount: Money = q.loan_amount.parse()?;
    let term = q.loan_term_months.trim().parse::<f64>().unwrap_or(f64::NAN);
    let details = price(amount, term)?;
    Ok(ApiResponse::ok(QuoteResponse::new(details, None)))
}
