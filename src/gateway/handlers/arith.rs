//! Arithmetic handlers
//!
//! `GET /add`, `GET /subtract`, `GET /multiply`, each taking `x` and `y`
//! as query parameters and answering `{"result": <number|null>}`.

use axum::Json;
use utoipa::IntoParams;

use super::super::types::{CalcResponse, ErrorBody, OperandPair, Operands};
use crate::math::Operation;

/// Query parameters shared by the arithmetic routes
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct OperandParams {
    /// Left operand
    #[param(example = "2")]
    x: Option<String>,
    /// Right operand
    #[param(example = "3")]
    y: Option<String>,
}

fn compute(op: Operation, pair: OperandPair) -> Json<CalcResponse> {
    let value = op.apply(pair.x, pair.y);
    tracing::debug!(
        operation = %op,
        x = pair.x,
        y = pair.y,
        result = value,
        "{} {} {} = {}",
        pair.x,
        op.symbol(),
        pair.y,
        value
    );
    Json(CalcResponse::new(value))
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/add",
    params(OperandParams),
    responses(
        (status = 200, description = "Sum of x and y, null when not a finite number", body = CalcResponse),
        (status = 400, description = "Invalid operands (strict input policy only)", body = ErrorBody)
    ),
    tag = "Arithmetic"
)]
pub async fn add(Operands(pair): Operands) -> Json<CalcResponse> {
    compute(Operation::Add, pair)
}

/// Subtract y from x
#[utoipa::path(
    get,
    path = "/subtract",
    params(OperandParams),
    responses(
        (status = 200, description = "Difference x - y, null when not a finite number", body = CalcResponse),
        (status = 400, description = "Invalid operands (strict input policy only)", body = ErrorBody)
    ),
    tag = "Arithmetic"
)]
pub async fn subtract(Operands(pair): Operands) -> Json<CalcResponse> {
    compute(Operation::Subtract, pair)
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/multiply",
    params(OperandParams),
    responses(
        (status = 200, description = "Product of x and y, null when not a finite number", body = CalcResponse),
        (status = 400, description = "Invalid operands (strict input policy only)", body = ErrorBody)
    ),
    tag = "Arithmetic"
)]
pub async fn multiply(Operands(pair): Operands) -> Json<CalcResponse> {
    compute(Operation::Multiply, pair)
}
