//! HTTP handlers

pub mod arith;
pub mod health;

use axum::{Json, http::StatusCode};
use utoipa::OpenApi;

use super::openapi::ApiDoc;
use super::types::{ApiResponse, error_codes};

pub use arith::{add, multiply, subtract};
pub use health::{HealthResponse, health_check};

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(
            error_codes::ROUTE_NOT_FOUND,
            "route not found",
        )),
    )
}
