//! The expression evaluator.
//!
//! A straightforward environment-passing interpreter. `and` and `or`
//! short-circuit, so their right operand is never evaluated when the
//! left one decides the answer. Arithmetic wraps on overflow; the one
//! arithmetic fault surfaced as an error is a zero divisor.

use fxhash::FxHashMap;

use letix_syntax::{BinaryOp, Expr, UnaryOp};

use crate::error::{EvalError, Result};
use crate::value::Value;

/// Evaluates a closed expression.
///
/// # Errors
///
/// [`EvalError::UndefinedVariable`] for a free variable,
/// [`EvalError::DivisionByZero`] for a zero divisor, and
/// [`EvalError::TypeMismatch`] when an operator meets the wrong kind
/// of value (unreachable after a successful type check).
pub fn eval(expr: &Expr) -> Result<Value> {
    eval_in(expr, &mut FxHashMap::default())
}

fn eval_in(expr: &Expr, env: &mut FxHashMap<String, Value>) -> Result<Value> {
    match expr {
        Expr::IntLiteral { value, .. } => Ok(Value::Int(*value)),
        Expr::BoolLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::Variable { name, .. } => {
            env.get(name).copied().ok_or_else(|| EvalError::UndefinedVariable {
                name: name.clone(),
            })
        }
        Expr::Let { name, bound, body, .. } => {
            let bound_value = eval_in(bound, env)?;
            // Save any outer binding so the body sees the inner one
            // and the outer scope gets it back afterwards.
            let shadowed = env.insert(name.clone(), bound_value);
            let result = eval_in(body, env);
            match shadowed {
                Some(previous) => {
                    env.insert(name.clone(), previous);
                }
                None => {
                    env.remove(name);
                }
            }
            result
        }
        Expr::IfThenElse { cond, then_branch, else_branch, .. } => {
            if expect_bool(eval_in(cond, env)?)? {
                eval_in(then_branch, env)
            } else {
                eval_in(else_branch, env)
            }
        }
        Expr::Unary { op, operand, .. } => {
            let value = eval_in(operand, env)?;
            match op {
                UnaryOp::Neg => Ok(Value::Int(expect_int(value)?.wrapping_neg())),
                UnaryOp::Not => Ok(Value::Bool(!expect_bool(value)?)),
            }
        }
        Expr::Binary { op, left, right, .. } => match op {
            BinaryOp::And => {
                if expect_bool(eval_in(left, env)?)? {
                    Ok(Value::Bool(expect_bool(eval_in(right, env)?)?))
                } else {
                    Ok(Value::Bool(false))
                }
            }
            BinaryOp::Or => {
                if expect_bool(eval_in(left, env)?)? {
                    Ok(Value::Bool(true))
                } else {
                    Ok(Value::Bool(expect_bool(eval_in(right, env)?)?))
                }
            }
            BinaryOp::Eql => {
                let lhs = eval_in(left, env)?;
                let rhs = eval_in(right, env)?;
                match (lhs, rhs) {
                    (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a == b)),
                    (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a == b)),
                    (Value::Int(_), other) => Err(EvalError::TypeMismatch {
                        expected: "int",
                        found: other,
                    }),
                    (Value::Bool(_), other) => Err(EvalError::TypeMismatch {
                        expected: "bool",
                        found: other,
                    }),
                }
            }
            _ => {
                let lhs = expect_int(eval_in(left, env)?)?;
                let rhs = expect_int(eval_in(right, env)?)?;
                match op {
                    BinaryOp::Add => Ok(Value::Int(lhs.wrapping_add(rhs))),
                    BinaryOp::Sub => Ok(Value::Int(lhs.wrapping_sub(rhs))),
                    BinaryOp::Mul => Ok(Value::Int(lhs.wrapping_mul(rhs))),
                    BinaryOp::Div => {
                        if rhs == 0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(Value::Int(lhs.wrapping_div(rhs)))
                        }
                    }
                    BinaryOp::Lt => Ok(Value::Bool(lhs < rhs)),
                    BinaryOp::Le => Ok(Value::Bool(lhs <= rhs)),
                    BinaryOp::Gt => Ok(Value::Bool(lhs > rhs)),
                    BinaryOp::Ge => Ok(Value::Bool(lhs >= rhs)),
                    BinaryOp::And | BinaryOp::Or | BinaryOp::Eql => unreachable!(),
                }
            }
        },
    }
}

fn expect_int(value: Value) -> Result<i64> {
    value.as_int().ok_or(EvalError::TypeMismatch { expected: "int", found: value })
}

fn expect_bool(value: Value) -> Result<bool> {
    value.as_bool().ok_or(EvalError::TypeMismatch { expected: "bool", found: value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use letix_syntax::parse;

    fn eval_source(source: &str) -> Result<Value> {
        eval(&parse(source).unwrap())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_source("2 * 3 + 4").unwrap(), Value::Int(10));
        assert_eq!(eval_source("7 / 2").unwrap(), Value::Int(3));
        assert_eq!(eval_source("~5 + 1").unwrap(), Value::Int(-4));
    }

    #[test]
    fn test_comparisons_and_equality() {
        assert_eq!(eval_source("1 < 2").unwrap(), Value::Bool(true));
        assert_eq!(eval_source("2 <= 2").unwrap(), Value::Bool(true));
        assert_eq!(eval_source("1 > 2").unwrap(), Value::Bool(false));
        assert_eq!(eval_source("2 >= 3").unwrap(), Value::Bool(false));
        assert_eq!(eval_source("1 + 1 = 2").unwrap(), Value::Bool(true));
        assert_eq!(eval_source("true = false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_let_binds_and_shadows() {
        assert_eq!(
            eval_source("let x <- 1 in let x <- x + 1 in x * 10 end end").unwrap(),
            Value::Int(20)
        );
        // The outer binding is visible again after the inner body.
        assert_eq!(
            eval_source("let x <- 1 in (let x <- 2 in x end) + x end").unwrap(),
            Value::Int(3)
        );
    }

    #[test]
    fn test_if_selects_a_branch() {
        assert_eq!(eval_source("if 1 < 2 then 10 else 20").unwrap(), Value::Int(10));
        assert_eq!(eval_source("if not true then 10 else 20").unwrap(), Value::Int(20));
    }

    #[test]
    fn test_and_or_short_circuit() {
        // The right operand would divide by zero if evaluated.
        assert_eq!(
            eval_source("false and 1 / 0 = 1").unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eval_source("true or 1 / 0 = 1").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eval_source("true and 1 / 0 = 1").unwrap_err(),
            EvalError::DivisionByZero
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_source("1 / 0").unwrap_err(), EvalError::DivisionByZero);
        assert_eq!(
            eval_source("if false then 1 / 0 else 9").unwrap(),
            Value::Int(9)
        );
    }

    #[test]
    fn test_undefined_variable() {
        assert_eq!(
            eval_source("x + 1").unwrap_err(),
            EvalError::UndefinedVariable { name: "x".into() }
        );
        // Out of scope once its let body ends.
        assert_eq!(
            eval_source("(let x <- 1 in x end) + x").unwrap_err(),
            EvalError::UndefinedVariable { name: "x".into() }
        );
    }

    #[test]
    fn test_ill_typed_tree_reports_a_mismatch() {
        assert_eq!(
            eval_source("1 + true").unwrap_err(),
            EvalError::TypeMismatch { expected: "int", found: Value::Bool(true) }
        );
    }
}
