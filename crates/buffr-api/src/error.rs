//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Pricing errors from the calculator map to 400 with the error's stable
//! code and its exact user-facing message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use buffr_core::{LoanCalculationError, MoneyParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "INVALID_AMOUNT", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message, suitable for display.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Pricing rejected the input (400).
    #[error(transparent)]
    Calculation(#[from] LoanCalculationError),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body or query could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Calculation(err) => (StatusCode::BAD_REQUEST, err.code()),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::debug!(code, error = %self, "request rejected");

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<MoneyParseError> for AppError {
    fn from(err: MoneyParseError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
