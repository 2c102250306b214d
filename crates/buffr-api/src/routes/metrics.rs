//! `GET /metrics`: request and error counters.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::metrics::MetricsSnapshot;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(get_metrics))
}

/// GET /metrics: Counters since process start.
#[utoipa::path(
    get,
    path = "/metrics",
    responses((status = 200, description = "Current counters", body = MetricsSnapshot)),
    tag = "operations"
)]
pub(crate) async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
