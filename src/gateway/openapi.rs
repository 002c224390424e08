//! OpenAPI documentation
//!
//! Served at `/api-docs/openapi.json`; also exported by the
//! `export_openapi` binary.

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CalcResponse, ErrorBody};
use crate::math::Operation;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arith API",
        version = "1.0.0",
        description = "Add, subtract and multiply two numbers passed as query parameters.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::arith::add,
        crate::gateway::handlers::arith::subtract,
        crate::gateway::handlers::arith::multiply,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            CalcResponse,
            ErrorBody,
            HealthResponse,
            Operation,
        )
    ),
    tags(
        (name = "Arithmetic", description = "Binary arithmetic on query parameters x and y"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
