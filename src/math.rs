//! Arithmetic primitives
//!
//! Plain IEEE-754 double arithmetic. No validation happens here: NaN
//! propagates and overflow saturates to infinity. Input checking belongs
//! to the gateway layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// The three supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Add => add(x, y),
            Operation::Subtract => subtract(x, y),
            Operation::Multiply => multiply(x, y),
        }
    }

    /// Route path the operation is served on.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "/add",
            Operation::Subtract => "/subtract",
            Operation::Multiply => "/multiply",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(7.0, 4.0), 3.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 5.0), 15.0);
        assert_eq!(multiply(-2.0, 5.0), -10.0);
    }

    #[test]
    fn test_identities() {
        let pairs = [(2.0, 3.0), (-1.5, 4.25), (0.0, -7.0), (1e10, 3e-3)];
        for (x, y) in pairs {
            assert_eq!(add(x, y), add(y, x));
            assert_eq!(multiply(x, y), multiply(y, x));
            assert_eq!(subtract(x, y), -subtract(y, x));
        }
    }

    #[test]
    fn test_nan_propagates() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(subtract(1.0, f64::NAN).is_nan());
        assert!(multiply(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(multiply(1e308, 10.0), f64::INFINITY);
        assert_eq!(subtract(-1e308, 1e308), f64::NEG_INFINITY);
    }

    #[test]
    fn test_operation_dispatch() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(7.0, 4.0), 3.0);
        assert_eq!(Operation::Multiply.apply(3.0, 5.0), 15.0);
    }

    #[test]
    fn test_operation_paths_are_distinct() {
        let paths: Vec<_> = Operation::ALL.iter().map(|op| op.path()).collect();
        assert_eq!(paths, ["/add", "/subtract", "/multiply"]);
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(Operation::Subtract.symbol(), '-');
    }
}
