//! # API Route Modules
//!
//! - `quote`: loan quotes, with an optional repayment schedule.
//! - `affordability`: the salary 1/3 rule.
//! - `validation`: lenient input checks for inline form guidance.
//! - `policy`: the current pricing policy constants.
//! - `metrics`: request and error counters.
//!
//! Successful responses share one envelope, [`ApiResponse`].

pub mod affordability;
pub mod metrics;
pub mod policy;
pub mod quote;
pub mod validation;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success envelope: `{ "success": true, "data": ..., "timestamp": ... }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a success envelope stamped with the current time.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            timestamp: Utc::now(),
        })
    }
}
