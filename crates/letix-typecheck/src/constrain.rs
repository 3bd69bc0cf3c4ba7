//! Constraint generation.
//!
//! One post-order walk of the expression tree assigns every node a
//! [`Term`] and emits equality [`Constraint`]s between terms. The walk
//! never judges types itself; every requirement the language places on
//! an expression becomes a constraint for the unifier to settle.
//!
//! There is no scope map. A variable's name *is* its type term
//! ([`Term::Name`]), so a `let` binder and every later reference to the
//! name meet in the same equivalence class. Two `let`s binding the same
//! name therefore share one term, and shadowing a name at a different
//! type surfaces as a conflict.

use std::fmt;

use letix_syntax::{BinaryOp, Expr, UnaryOp};

use crate::term::{FreshVars, Term};

/// An equality constraint between two type terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Left-hand term.
    pub lhs: Term,
    /// Right-hand term.
    pub rhs: Term,
}

impl Constraint {
    /// Builds a constraint equating two terms.
    #[must_use]
    pub fn new(lhs: Term, rhs: Term) -> Self {
        Self { lhs, rhs }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Walks an expression and collects its constraints.
#[derive(Debug, Default)]
pub struct ConstraintGen {
    fresh: FreshVars,
    constraints: Vec<Constraint>,
}

impl ConstraintGen {
    /// Creates a generator with its own fresh-variable source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the constraint set for `expr`.
    ///
    /// Returns the term assigned to the root node together with every
    /// constraint emitted, in emission order.
    pub fn generate(mut self, expr: &Expr) -> (Term, Vec<Constraint>) {
        let root = self.visit(expr);
        (root, self.constraints)
    }

    fn emit(&mut self, lhs: Term, rhs: Term) {
        self.constraints.push(Constraint::new(lhs, rhs));
    }

    fn visit(&mut self, expr: &Expr) -> Term {
        match expr {
            Expr::IntLiteral { .. } => Term::Int,
            Expr::BoolLiteral { .. } => Term::Bool,
            Expr::Variable { name, .. } => Term::name(name.clone()),
            Expr::Let { name, bound, body, .. } => {
                let bound_term = self.visit(bound);
                self.emit(Term::name(name.clone()), bound_term);
                let body_term = self.visit(body);
                let result = self.fresh.next();
                self.emit(result.clone(), body_term);
                result
            }
            Expr::IfThenElse { cond, then_branch, else_branch, .. } => {
                let cond_term = self.visit(cond);
                self.emit(cond_term, Term::Bool);
                let then_term = self.visit(then_branch);
                let else_term = self.visit(else_branch);
                self.emit(then_term.clone(), else_term);
                then_term
            }
            Expr::Unary { op, operand, .. } => {
                let operand_term = self.visit(operand);
                match op {
                    UnaryOp::Neg => {
                        self.emit(operand_term, Term::Int);
                        Term::Int
                    }
                    UnaryOp::Not => {
                        self.emit(operand_term, Term::Bool);
                        Term::Bool
                    }
                }
            }
            Expr::Binary { op, left, right, .. } => {
                let left_term = self.visit(left);
                let right_term = self.visit(right);
                match op {
                    BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                        self.emit(left_term, Term::Int);
                        self.emit(right_term, Term::Int);
                        Term::Int
                    }
                    BinaryOp::And | BinaryOp::Or => {
                        self.emit(left_term, Term::Bool);
                        self.emit(right_term, Term::Bool);
                        Term::Bool
                    }
                    BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
                        self.emit(left_term, Term::Int);
                        self.emit(right_term, Term::Int);
                        Term::Bool
                    }
                    BinaryOp::Eql => {
                        // Equality compares any two values of one
                        // type, so both sides meet at a fresh variable
                        // rather than at a ground type.
                        let shared = self.fresh.next();
                        self.emit(left_term, shared.clone());
                        self.emit(right_term, shared);
                        Term::Bool
                    }
                }
            }
        }
    }
}
