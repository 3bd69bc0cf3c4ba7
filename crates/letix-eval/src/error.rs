//! Evaluation failure reporting.

use std::error::Error;
use std::fmt;

use crate::value::Value;

/// Result alias for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;

/// A failed evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was used without a surrounding `let` binding it.
    UndefinedVariable {
        /// The unbound name.
        name: String,
    },

    /// Division with a zero divisor.
    DivisionByZero,

    /// An operator met a value of the wrong type. Unreachable for
    /// programs the type checker accepted.
    TypeMismatch {
        /// The type the operator needed.
        expected: &'static str,
        /// The value it got instead.
        found: Value,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name } => {
                write!(f, "undefined variable `{name}`")
            }
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {} `{found}`", found.type_name())
            }
        }
    }
}

impl Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EvalError::UndefinedVariable { name: "x".into() };
        assert_eq!(err.to_string(), "undefined variable `x`");
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        let err = EvalError::TypeMismatch { expected: "int", found: Value::Bool(true) };
        assert_eq!(err.to_string(), "expected int, found bool `true`");
    }
}
