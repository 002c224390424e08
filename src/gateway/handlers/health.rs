//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ApiResponse;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    /// Milliseconds since the gateway started
    pub uptime_ms: u64,
    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Active input policy: "lenient" or "strict"
    #[schema(example = "lenient")]
    pub input_policy: String,
}

/// Health check endpoint
///
/// The service has no dependencies, so it is healthy whenever it answers.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthResponse>> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(ApiResponse::success(HealthResponse {
        timestamp_ms,
        uptime_ms: state.uptime_ms(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        input_policy: state.input_policy.as_str().to_string(),
    }))
}
