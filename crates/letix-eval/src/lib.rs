//! letix evaluation.
//!
//! Runs type-checked expression trees. The evaluator is independent of
//! the type checker; it re-checks value kinds at run time only so that
//! an unchecked tree fails with a proper error instead of nonsense.
//!
//! # Modules
//!
//! - [`value`] - Runtime values
//! - [`eval`] - The interpreter
//! - [`usedef`] - Free-variable analysis
//! - [`error`] - Evaluation failure type
//!
//! # Example
//!
//! ```
//! use letix_eval::{Value, eval};
//! use letix_syntax::parse;
//!
//! let expr = parse("let v <- 6 in v * 7 end").unwrap();
//! assert_eq!(eval(&expr).unwrap(), Value::Int(42));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod usedef;
pub mod value;

pub use error::{EvalError, Result};
pub use eval::eval;
pub use usedef::undefined_names;
pub use value::Value;
