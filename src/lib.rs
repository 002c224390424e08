//! Arith API - add, subtract and multiply over HTTP
//!
//! # Modules
//!
//! - [`math`] - Arithmetic primitives and the [`Operation`] enum
//! - [`gateway`] - Axum router, handlers, operand parsing and [`Server`]
//! - [`config`] - YAML / environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod math;

// Convenient re-exports at crate root
pub use config::{AppConfig, GatewayConfig, InputPolicy};
pub use gateway::Server;
pub use gateway::types::{CalcResponse, OperandError, OperandPair};
pub use math::{Operation, add, multiply, subtract};
