//! # buffr-api: HTTP Service for BuffrLend Pricing
//!
//! Exposes the loan calculator over HTTP. Every endpoint is a thin
//! adapter: decode the request, call `buffr-calculator`, wrap the result
//! in the success envelope or map the error to a 4xx body.
//!
//! ## API Surface
//!
//! | Route                          | Module                        |
//! |--------------------------------|-------------------------------|
//! | `/v1/loans/quote`              | [`routes::quote`]             |
//! | `/v1/loans/affordability`      | [`routes::affordability`]     |
//! | `/v1/loans/validate`           | [`routes::validation`]        |
//! | `/v1/loans/policy`             | [`routes::policy`]            |
//! | `/metrics`                     | [`routes::metrics`]           |
//! | `/openapi.json`                | [`openapi`]                   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::http::{header, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) sit outside the metrics middleware so that
/// orchestrator polling does not inflate the request counters.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .merge(routes::quote::router())
        .merge(routes::affordability::router())
        .merge(routes::validation::router())
        .merge(routes::policy::router())
        .merge(routes::metrics::router())
        .merge(openapi::router())
        .layer(from_fn_with_state(
            state.metrics.clone(),
            middleware::metrics::metrics_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The service holds no external connections, so it is
/// ready as soon as it is live.
async fn readiness() -> &'static str {
    "ready"
}
