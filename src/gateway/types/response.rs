//! API Response types and error codes
//!
//! - `CalcResponse`: `{"result": <number|null>}` body of the arithmetic routes
//! - `ApiResponse<T>`: Unified envelope for health and error responses
//! - `error_codes`: Standard error code constants

use serde::Serialize;
use utoipa::ToSchema;

// ============================================================================
// Arithmetic Result
// ============================================================================

/// Largest magnitude below which every integral f64 is an exact i64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A computed value as it appears on the wire.
///
/// - Integral values inside the safe-integer range serialize as JSON
///   integers (`5`, not `5.0`)
/// - Other finite values serialize as JSON floats
/// - NaN and ±Infinity serialize as `null`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcResult(pub f64);

impl CalcResult {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_null(self) -> bool {
        !self.0.is_finite()
    }
}

impl Serialize for CalcResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let v = self.0;
        if !v.is_finite() {
            return serializer.serialize_none();
        }
        if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            // -0.0 lands here too and becomes 0
            return serializer.serialize_i64(v as i64);
        }
        serializer.serialize_f64(v)
    }
}

/// Arithmetic route response body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalcResponse {
    /// Computed value, `null` when the result is not a finite number
    #[schema(value_type = Option<f64>, example = 5)]
    pub result: CalcResult,
}

impl CalcResponse {
    pub fn new(value: f64) -> Self {
        Self {
            result: CalcResult(value),
        }
    }
}

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Error envelope as documented in OpenAPI
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 1001)]
    pub code: i32,
    #[schema(example = "missing query parameter `x`")]
    pub msg: String,
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const ROUTE_NOT_FOUND: i32 = 4004;
}
