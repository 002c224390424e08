//! Operand parsing for the arithmetic routes
//!
//! - `coerce_number`: string-to-number coercion for a single raw value
//! - `OperandPair`: the `x` / `y` pair after parsing
//! - `Operands`: Axum extractor applying the configured `InputPolicy`

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, Uri, request::Parts},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::response::{ApiResponse, error_codes};
use crate::config::InputPolicy;
use crate::gateway::state::AppState;

pub const PARAM_X: &str = "x";
pub const PARAM_Y: &str = "y";

// ============================================================================
// Numeric Coercion
// ============================================================================

/// Whitespace and line terminators, plus the BOM. NEL (U+0085) is not one.
fn is_trim_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Unsigned `0x` / `0o` / `0b` literal. No sign, at least one digit.
fn parse_prefixed_integer(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    // u128 -> f64 rounds once, to nearest
    if let Ok(v) = u128::from_str_radix(digits, radix) {
        return Some(Some(v as f64));
    }
    let value = digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value)
}

/// Convert a raw query value to a number.
///
/// Returns `None` when the value is not a number. Surrounding whitespace is
/// ignored and a blank value coerces to `0`. Decimal literals (with optional
/// sign, fraction and exponent), unsigned hex/octal/binary integers and the
/// `Infinity` keyword are accepted.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim_matches(is_trim_char);
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(value) = parse_prefixed_integer(s) {
        return value;
    }
    // Keeps out `inf`, `NaN`, `infinity` and friends that f64::from_str accepts.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

// ============================================================================
// OperandError / OperandPair
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperandError {
    #[error("missing query parameter `{0}`")]
    Missing(&'static str),

    #[error("query parameter `{0}` given more than once")]
    Repeated(&'static str),

    #[error("query parameter `{0}` is not a number: {1:?}")]
    Invalid(&'static str, String),

    #[error("query parameter `{0}` is not finite: {1:?}")]
    NonFinite(&'static str, String),

    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}

/// The two operands of an arithmetic request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    pub x: f64,
    pub y: f64,
}

/// All raw values for `name`, in query order.
fn values<'a>(pairs: &'a [(String, String)], name: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .collect()
}

fn parse_strict_one(pairs: &[(String, String)], name: &'static str) -> Result<f64, OperandError> {
    let raw = match values(pairs, name).as_slice() {
        [] => return Err(OperandError::Missing(name)),
        [raw] => *raw,
        _ => return Err(OperandError::Repeated(name)),
    };
    if raw.trim_matches(is_trim_char).is_empty() {
        return Err(OperandError::Invalid(name, raw.to_string()));
    }
    let value = coerce_number(raw).ok_or_else(|| OperandError::Invalid(name, raw.to_string()))?;
    if !value.is_finite() {
        return Err(OperandError::NonFinite(name, raw.to_string()));
    }
    Ok(value)
}

fn coerce_lenient_one(pairs: &[(String, String)], name: &str) -> f64 {
    match values(pairs, name).as_slice() {
        [raw] => coerce_number(raw).unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

impl OperandPair {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both operands NaN.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Validate decoded query pairs. Every problem is an error.
    pub fn parse_strict(pairs: &[(String, String)]) -> Result<Self, OperandError> {
        let x = parse_strict_one(pairs, PARAM_X)?;
        let y = parse_strict_one(pairs, PARAM_Y)?;
        Ok(Self::new(x, y))
    }

    /// Coerce decoded query pairs. Absent, repeated or non-numeric
    /// parameters become NaN.
    pub fn coerce_lenient(pairs: &[(String, String)]) -> Self {
        Self::new(
            coerce_lenient_one(pairs, PARAM_X),
            coerce_lenient_one(pairs, PARAM_Y),
        )
    }

    /// Parse the query of `uri` under `policy`.
    pub fn from_uri(uri: &Uri, policy: InputPolicy) -> Result<Self, OperandError> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .map_err(|e| OperandError::MalformedQuery(e.body_text()));

        match policy {
            InputPolicy::Lenient => Ok(pairs
                .map(|p| Self::coerce_lenient(&p))
                .unwrap_or_else(|_| Self::nan())),
            InputPolicy::Strict => Self::parse_strict(&pairs?),
        }
    }
}

// ============================================================================
// Operands: Axum Framework Integration
// ============================================================================

/// Operands extractor - applies the gateway's `InputPolicy` before the
/// handler runs. Only rejects in strict mode.
#[derive(Debug)]
pub struct Operands(pub OperandPair);

/// Rejection type for `Operands`
#[derive(Debug)]
pub struct OperandRejection(pub OperandError);

impl From<OperandError> for OperandRejection {
    fn from(err: OperandError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OperandRejection {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(
            error_codes::INVALID_PARAMETER,
            self.0.to_string(),
        ));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl FromRequestParts<Arc<AppState>> for Operands {
    type Rejection = OperandRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        OperandPair::from_uri(&parts.uri, state.input_policy)
            .map(Operands)
            .map_err(|e| {
                tracing::warn!(path = %parts.uri.path(), error = %e, "rejected operands");
                OperandRejection(e)
            })
    }
}
