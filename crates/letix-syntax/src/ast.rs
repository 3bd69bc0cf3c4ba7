//! AST definitions for the letix language.
//!
//! The tree is a closed sum over exactly the node shapes the type
//! checker understands, so the compiler enforces that every consumer
//! handles every node kind exhaustively. Nodes are built once by the
//! parser and are read-only afterwards; children are `Box`ed.

use crate::span::{Span, Spanned};
use std::fmt;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation: `~e`
    Neg,
    /// Boolean negation: `not e`
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "~"),
            UnaryOp::Not => write!(f, "not "),
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (integer division)
    Div,
    /// `and` (short-circuiting)
    And,
    /// `or` (short-circuiting)
    Or,
    /// `=` — equality over either ground type
    Eql,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Eql => "=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        };
        write!(f, "{text}")
    }
}

/// An expression in the letix language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal: `42`
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Source location.
        span: Span,
    },

    /// Boolean literal: `true` or `false`
    BoolLiteral {
        /// The literal value.
        value: bool,
        /// Source location.
        span: Span,
    },

    /// Variable reference: `x`
    Variable {
        /// The referenced name.
        name: String,
        /// Source location.
        span: Span,
    },

    /// Binding: `let name <- bound in body end`
    ///
    /// The binding is monomorphic: every use of `name` in `body`
    /// shares one type.
    Let {
        /// The bound name.
        name: String,
        /// The expression bound to `name`.
        bound: Box<Expr>,
        /// The expression in which `name` is visible.
        body: Box<Expr>,
        /// Source location.
        span: Span,
    },

    /// Conditional: `if cond then then_branch else else_branch`
    ///
    /// Both branches are always present; the branches must agree on
    /// one type.
    IfThenElse {
        /// The condition (must be boolean).
        cond: Box<Expr>,
        /// Value when the condition holds.
        then_branch: Box<Expr>,
        /// Value otherwise.
        else_branch: Box<Expr>,
        /// Source location.
        span: Span,
    },

    /// Prefix operation: `~e`, `not e`
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
        /// Source location.
        span: Span,
    },

    /// Infix operation: `a + b`, `x = y`, ...
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// Source location.
        span: Span,
    },
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::IntLiteral { span, .. }
            | Expr::BoolLiteral { span, .. }
            | Expr::Variable { span, .. }
            | Expr::Let { span, .. }
            | Expr::IfThenElse { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }
}

impl fmt::Display for Expr {
    /// Renders source-like text. Operator subexpressions are fully
    /// parenthesized rather than reconstructing precedence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLiteral { value, .. } => write!(f, "{value}"),
            Expr::BoolLiteral { value, .. } => write!(f, "{value}"),
            Expr::Variable { name, .. } => write!(f, "{name}"),
            Expr::Let { name, bound, body, .. } => {
                write!(f, "let {name} <- {bound} in {body} end")
            }
            Expr::IfThenElse { cond, then_branch, else_branch, .. } => {
                write!(f, "if {cond} then {then_branch} else {else_branch}")
            }
            Expr::Unary { op, operand, .. } => write!(f, "({op}{operand})"),
            Expr::Binary { op, left, right, .. } => {
                write!(f, "({left} {op} {right})")
            }
        }
    }
}
