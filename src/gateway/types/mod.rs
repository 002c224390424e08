//! Gateway types module
//!
//! ## Input Types
//! - [`OperandPair`]: The parsed `x` / `y` pair
//! - [`Operands`]: Axum extractor that applies the configured input policy
//!
//! ## Output Types
//! - [`CalcResponse`]: `{"result": ...}` body of the arithmetic routes
//! - [`ApiResponse<T>`]: Unified envelope for health and error responses

pub mod operands;
pub mod response;

pub use operands::{OperandError, OperandPair, OperandRejection, Operands, coerce_number};
pub use response::{ApiResponse, CalcResponse, CalcResult, ErrorBody, error_codes};
