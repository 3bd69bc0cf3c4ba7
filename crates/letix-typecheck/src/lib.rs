//! letix type inference.
//!
//! Monomorphic constraint-based inference for the two-type expression
//! language: every expression is `int` or `bool`, decided by one pass
//! of constraint generation, unification, and resolution.
//!
//! # Modules
//!
//! - [`term`] - Type terms and the fresh-variable source
//! - [`constrain`] - Constraint generation over the AST
//! - [`unify`] - Disjoint-set unification
//! - [`resolve`] - Class resolution to ground types
//! - [`error`] - Inference failure type
//!
//! # Example
//!
//! ```
//! use letix_syntax::parse;
//! use letix_typecheck::{ConcreteType, infer};
//!
//! let expr = parse("let v <- 40 + 2 in v = 42 end").unwrap();
//! let types = infer(&expr).unwrap();
//! assert_eq!(types.type_of_name("v"), Some(ConcreteType::Int));
//!
//! let expr = parse("1 + true").unwrap();
//! assert_eq!(infer(&expr).unwrap_err().to_string(), "Type error");
//! ```

#![warn(missing_docs)]

pub mod constrain;
pub mod error;
pub mod resolve;
pub mod term;
pub mod unify;

pub use constrain::{Constraint, ConstraintGen};
pub use error::{Result, TypeError, TypeErrorKind};
pub use resolve::{TypeMap, resolve};
pub use term::{ConcreteType, FreshVars, Term, TypeVarId};
pub use unify::{Classes, unify};

use letix_syntax::Expr;

/// Infers the type of every term in `expr`.
///
/// Runs the full pipeline: generate constraints, unify them into
/// equivalence classes, resolve each class to a ground type. The run
/// is self-contained, so repeated calls on the same tree produce the
/// same map.
///
/// # Errors
///
/// Returns a [`TypeError`] when any class resolves to no ground type
/// or to both of them.
pub fn infer(expr: &Expr) -> Result<TypeMap> {
    let (_root, constraints) = ConstraintGen::new().generate(expr);
    let mut classes = unify(&constraints);
    resolve(&mut classes)
}
