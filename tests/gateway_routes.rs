//! Router-level tests for the arithmetic gateway
//!
//! Drives the real Axum router with `oneshot`, no socket involved.

use std::sync::Arc;

use arith_api::config::InputPolicy;
use arith_api::gateway::build_router;
use arith_api::gateway::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

fn app(policy: InputPolicy) -> Router {
    build_router(Arc::new(AppState::new(policy)))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get(policy: InputPolicy, uri: &str) -> (StatusCode, String) {
    send(app(policy), "GET", uri).await
}

// ============================================================================
// Observed contract
// ============================================================================

#[tokio::test]
async fn add_two_and_three() {
    let (status, body) = get(InputPolicy::Lenient, "/add?x=2&y=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":5}"#);
}

#[tokio::test]
async fn subtract_four_from_seven() {
    let (status, body) = get(InputPolicy::Lenient, "/subtract?x=7&y=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":3}"#);
}

#[tokio::test]
async fn multiply_three_by_five() {
    let (status, body) = get(InputPolicy::Lenient, "/multiply?x=3&y=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":15}"#);
}

#[tokio::test]
async fn add_without_params_is_null() {
    let (status, body) = get(InputPolicy::Lenient, "/add").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":null}"#);
}

#[tokio::test]
async fn multiply_negative_operand() {
    let (status, body) = get(InputPolicy::Lenient, "/multiply?x=-2&y=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":-10}"#);
}

#[tokio::test]
async fn response_is_json() {
    let request = Request::builder()
        .uri("/add?x=1&y=1")
        .body(Body::empty())
        .unwrap();
    let response = app(InputPolicy::Lenient).oneshot(request).await.unwrap();
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type, "application/json");
}

#[tokio::test]
async fn repeated_request_is_idempotent() {
    let first = get(InputPolicy::Lenient, "/subtract?x=10.5&y=0.25").await;
    let second = get(InputPolicy::Lenient, "/subtract?x=10.5&y=0.25").await;
    assert_eq!(first, second);
    assert_eq!(first.1, r#"{"result":10.25}"#);
}

#[tokio::test]
async fn float_result_keeps_full_precision() {
    let (_, body) = get(InputPolicy::Lenient, "/add?x=0.1&y=0.2").await;
    assert_eq!(body, r#"{"result":0.30000000000000004}"#);
}

// ============================================================================
// Lenient coercion
// ============================================================================

#[tokio::test]
async fn lenient_non_numeric_is_null() {
    let (status, body) = get(InputPolicy::Lenient, "/multiply?x=abc&y=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":null}"#);
}

#[tokio::test]
async fn lenient_blank_value_counts_as_zero() {
    let (status, body) = get(InputPolicy::Lenient, "/add?x=&y=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":3}"#);
}

#[tokio::test]
async fn lenient_repeated_param_is_null() {
    let (_, body) = get(InputPolicy::Lenient, "/add?x=1&x=2&y=3").await;
    assert_eq!(body, r#"{"result":null}"#);
}

#[tokio::test]
async fn lenient_accepts_hex_and_exponent() {
    let (_, body) = get(InputPolicy::Lenient, "/add?x=0x10&y=1e2").await;
    assert_eq!(body, r#"{"result":116}"#);
}

#[tokio::test]
async fn overflow_is_null_under_both_policies() {
    for policy in [InputPolicy::Lenient, InputPolicy::Strict] {
        let (status, body) = get(policy, "/multiply?x=1e308&y=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"result":null}"#);
    }
}

// ============================================================================
// Strict validation
// ============================================================================

async fn strict_error(uri: &str) -> Value {
    let (status, body) = get(InputPolicy::Strict, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn strict_valid_request_succeeds() {
    let (status, body) = get(InputPolicy::Strict, "/add?x=2&y=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"result":5}"#);
}

#[tokio::test]
async fn strict_missing_params_rejected() {
    let error = strict_error("/add").await;
    assert_eq!(error["code"], 1001);
    assert!(error["msg"].as_str().unwrap().contains("`x`"));
    assert!(error.get("data").is_none());
}

#[tokio::test]
async fn strict_rejects_every_malformed_shape() {
    for uri in [
        "/subtract?x=7",
        "/subtract?x=abc&y=1",
        "/subtract?x=&y=1",
        "/subtract?x=1&y=2&y=3",
        "/subtract?x=Infinity&y=1",
    ] {
        let error = strict_error(uri).await;
        assert_eq!(error["code"], 1001, "{uri}");
    }
}

// ============================================================================
// Ancillary routes
// ============================================================================

#[tokio::test]
async fn health_reports_policy() {
    let (status, body) = get(InputPolicy::Strict, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["code"], 0);
    assert_eq!(health["msg"], "ok");
    assert_eq!(health["data"]["input_policy"], "strict");
    assert_eq!(health["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(health["data"]["timestamp_ms"].as_u64().unwrap() > 0);
    assert!(health["data"]["uptime_ms"].is_u64());
}

#[tokio::test]
async fn openapi_document_served() {
    let (status, body) = get(InputPolicy::Lenient, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let spec: Value = serde_json::from_str(&body).unwrap();
    assert!(spec["paths"]["/multiply"]["get"].is_object());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = get(InputPolicy::Lenient, "/divide?x=1&y=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"code":4004,"msg":"route not found"}"#);
}

#[tokio::test]
async fn post_is_method_not_allowed() {
    let (status, _) = send(app(InputPolicy::Lenient), "POST", "/add?x=1&y=2").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
