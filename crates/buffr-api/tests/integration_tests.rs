//! # Integration Tests for buffr-api
//!
//! Drives the full router with `tower::ServiceExt::oneshot`: health probes,
//! quotes (JSON and query), schedules, affordability, inline validation,
//! policy, metrics, and the OpenAPI document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use buffr_api::state::AppState;

fn test_app() -> axum::Router {
    buffr_api::app(AppState::new())
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Quotes -------------------------------------------------------------------

#[tokio::test]
async fn test_quote_five_thousand_over_three_months() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 5000, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["timestamp"].is_string());

    let data = &body["data"];
    assert!(uuid::Uuid::parse_str(data["quote_id"].as_str().unwrap()).is_ok());
    assert_eq!(data["loan_amount"], "5000.00");
    assert_eq!(data["loan_term_months"], 3);
    assert_eq!(data["buffr_fee_rate"], 15);
    assert_eq!(data["buffr_fee_amount"], "750.00");
    assert_eq!(data["user_total_fees"], "265.00");
    assert_eq!(data["total_payable"], "6015.00");
    assert_eq!(data["monthly_payment"], "2005.00");
    assert_eq!(data["fees"]["processing_fee"], "50.00");
    assert_eq!(data["fees"]["namfisa_levy"], "200.00");
    assert_eq!(data["fees"]["stamp_duty"], "15.00");
    assert_eq!(data["display"]["total_payable"], "N$6,015");
    assert_eq!(data["display"]["monthly_payment"], "N$2,005");
    assert!(data.get("schedule").is_none());
}

#[tokio::test]
async fn test_quote_accepts_string_amount() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": "2000.00", "loan_term_months": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_payable"], "2415.00");
    assert_eq!(body["data"]["monthly_payment"], "2415.00");
}

#[tokio::test]
async fn test_quote_below_minimum_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 100, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_AMOUNT");
    assert_eq!(body["error"]["message"], "Loan amount must be at least N$500");
}

#[tokio::test]
async fn test_quote_fractional_term_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 5000, "loan_term_months": 3.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_TERM");
    assert_eq!(body["error"]["message"], "Loan term must be a whole number");
}

#[tokio::test]
async fn test_quote_term_above_maximum_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 5000, "loan_term_months": 6}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Loan term cannot exceed 5 months");
}

#[tokio::test]
async fn test_quote_malformed_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/loans/quote")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_quote_sub_cent_amount_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 499.999, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_quote_with_schedule() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({
                "loan_amount": 1000,
                "loan_term_months": 3,
                "first_due_date": "2026-01-31"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let schedule = body["data"]["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule[0]["due_date"], "2026-01-31");
    assert_eq!(schedule[1]["due_date"], "2026-02-28");
    assert_eq!(schedule[2]["due_date"], "2026-03-31");
    assert_eq!(schedule[0]["amount"], "408.33");
    assert_eq!(schedule[2]["amount"], "408.34");
    assert_eq!(schedule[2]["remaining_balance"], "0.00");
}

#[tokio::test]
async fn test_quote_schedule_from_payday() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({
                "loan_amount": 5000,
                "loan_term_months": 2,
                "disbursed_on": "2026-01-10",
                "payday": 25
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let schedule = body["data"]["schedule"].as_array().unwrap();
    assert_eq!(schedule[0]["due_date"], "2026-02-25");
    assert_eq!(schedule[1]["due_date"], "2026-03-25");
}

#[tokio::test]
async fn test_quote_payday_without_disbursement_is_422() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 5000, "loan_term_months": 2, "payday": 25}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_quote_via_query_string() {
    let response = test_app()
        .oneshot(get("/v1/loans/quote?loan_amount=5000&loan_term_months=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total_payable"], "6015.00");
}

#[tokio::test]
async fn test_quote_query_non_numeric_term() {
    let response = test_app()
        .oneshot(get("/v1/loans/quote?loan_amount=5000&loan_term_months=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NON_FINITE_VALUE");
    assert_eq!(body["error"]["message"], "Loan term must be a valid number");
}

#[tokio::test]
async fn test_quote_query_bad_amount() {
    let response = test_app()
        .oneshot(get("/v1/loans/quote?loan_amount=lots&loan_term_months=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_quote_query_missing_params() {
    let response = test_app()
        .oneshot(get("/v1/loans/quote?loan_amount=5000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -- Affordability ------------------------------------------------------------

#[tokio::test]
async fn test_affordability_exactly_one_third() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/affordability",
            json!({"loan_amount": 5000, "monthly_salary": 15000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["is_compliant"], true);
    assert_eq!(data["max_loan_amount"], "5000.00");
    assert_eq!(data["display_max_loan_amount"], "N$5,000");
    let pct = data["compliance_percentage"].as_f64().unwrap();
    assert!((pct - 33.333).abs() < 0.001);
}

#[tokio::test]
async fn test_affordability_over_limit() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/affordability",
            json!({"loan_amount": 3001, "monthly_salary": 9000}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["is_compliant"], false);
}

#[tokio::test]
async fn test_affordability_zero_salary_is_400() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/affordability",
            json!({"loan_amount": 3000, "monthly_salary": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NON_POSITIVE_VALUE");
    assert_eq!(
        body["error"]["message"],
        "Monthly salary must be greater than 0"
    );
}

// -- Inline validation --------------------------------------------------------

#[tokio::test]
async fn test_validate_amount_just_below_minimum() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/validate",
            json!({"loan_amount": 499.999, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let amount = &body["data"]["amount"];
    assert_eq!(amount["is_valid"], false);
    assert_eq!(amount["error"], "Loan amount must be at least N$500");
    assert_eq!(amount["corrected_amount"], "500.00");
}

#[tokio::test]
async fn test_validate_valid_inputs() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/validate",
            json!({"loan_amount": 5000, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["amount"]["is_valid"], true);
    assert_eq!(data["amount"]["error"], Value::Null);
    assert_eq!(data["amount"]["corrected_amount"], "5000.00");
    assert_eq!(data["term"]["is_valid"], true);
    assert_eq!(data["term"]["corrected_term"], 3);
}

#[tokio::test]
async fn test_validate_reports_corrections() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/loans/validate",
            json!({"loan_amount": 100, "loan_term_months": 3.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["amount"]["is_valid"], false);
    assert_eq!(
        data["amount"]["error"],
        "Loan amount must be at least N$500"
    );
    assert_eq!(data["amount"]["corrected_amount"], "500.00");
    assert_eq!(data["term"]["is_valid"], false);
    assert_eq!(data["term"]["error"], "Loan term must be a whole number");
    assert_eq!(data["term"]["corrected_term"], 4);
}

#[tokio::test]
async fn test_validate_non_numeric_and_missing() {
    let response = test_app()
        .oneshot(post_json("/v1/loans/validate", json!({"loan_amount": "abc"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["amount"]["error"], "Loan amount must be a valid number");
    assert_eq!(data["amount"]["corrected_amount"], "500.00");
    assert_eq!(data["term"]["error"], "Loan term must be a valid number");
    assert_eq!(data["term"]["corrected_term"], 1);
}

// -- Policy, metrics, OpenAPI -------------------------------------------------

#[tokio::test]
async fn test_policy() {
    let response = test_app().oneshot(get("/v1/loans/policy")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["interest_rate"], 15);
    assert_eq!(data["namfisa_levy_rate"], 4);
    assert_eq!(data["stamp_duty"], "15.00");
    assert_eq!(data["min_loan_amount"], "500.00");
    assert_eq!(data["max_loan_amount"], "10000.00");
    assert_eq!(data["max_loan_term"], 5);
    assert_eq!(data["currency"], "NAD");
}

#[tokio::test]
async fn test_metrics_count_requests_and_errors() {
    let app = test_app();

    app.clone()
        .oneshot(get("/v1/loans/policy"))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json(
            "/v1/loans/quote",
            json!({"loan_amount": 1, "loan_term_months": 3}),
        ))
        .await
        .unwrap();
    // Health probes are not counted.
    app.clone()
        .oneshot(get("/health/liveness"))
        .await
        .unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // The metrics request itself is counted after its response is built.
    assert_eq!(body["requests"], 2);
    assert_eq!(body["errors"], 1);
}

#[tokio::test]
async fn test_openapi_spec() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["openapi"].is_string());
    assert!(body["paths"]["/v1/loans/quote"].is_object());
    assert!(body["components"]["schemas"]["QuoteResponse"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app().oneshot(get("/v1/loans/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
