//! Recursive descent parser for the letix language.
//!
//! Expressions are parsed with precedence climbing over the table in
//! [`TokenKind::precedence`]. The `let` and `if` forms sit below every
//! infix operator, so they can only appear as operands when
//! parenthesized; their own sub-expressions are full expressions, which
//! is what lets `if if x then a else b then c else d` parse without
//! parentheses.
//!
//! # Grammar
//!
//! ```text
//! expr    := 'let' IDENT '<-' expr 'in' expr 'end'
//!          | 'if' expr 'then' expr 'else' expr
//!          | binary
//! binary  := unary (INFIX_OP unary)*        -- precedence climbing
//! unary   := ('~' | 'not') unary | primary
//! primary := INT | 'true' | 'false' | IDENT | '(' expr ')'
//! ```

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{ParserError, ParserResult};
use crate::span::{Span, Spanned};
use crate::token::{Token, TokenKind};

/// Lowest binding power that still parses an operator.
const MIN_PRECEDENCE: u8 = 1;

/// Parser over a token stream produced by the lexer.
pub struct Parser {
    /// Token stream, terminated by an `Eof` token.
    tokens: Vec<Token>,
    /// Current position in the stream.
    pos: usize,
}

impl Parser {
    /// Creates a parser over the given tokens.
    ///
    /// The stream is expected to end with [`TokenKind::Eof`], as the
    /// lexer guarantees.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the whole stream as one expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] if the stream is not exactly one
    /// well-formed expression.
    pub fn parse(mut self) -> ParserResult<Expr> {
        let expr = self.parse_expr()?;
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            Ok(expr)
        } else {
            Err(ParserError::TrailingInput {
                found: token.kind.clone(),
                span: token.span,
            })
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> &Token {
        // The Eof token is never consumed, so this cannot run off the end.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Consumes and returns the current token.
    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of the given kind or fails.
    fn expect(&mut self, kind: TokenKind) -> ParserResult<Token> {
        if self.peek().kind == kind {
            Ok(self.bump())
        } else {
            let token = self.peek();
            Err(ParserError::UnexpectedToken {
                expected: format!("'{kind}'"),
                found: token.kind.clone(),
                span: token.span,
            })
        }
    }

    /// Consumes an identifier token or fails.
    fn expect_ident(&mut self) -> ParserResult<(String, Span)> {
        match &self.peek().kind {
            TokenKind::Ident(_) => {
                let token = self.bump();
                let TokenKind::Ident(name) = token.kind else {
                    unreachable!("peeked an identifier");
                };
                Ok((name, token.span))
            }
            other => Err(ParserError::UnexpectedToken {
                expected: "identifier".to_string(),
                found: other.clone(),
                span: self.peek().span,
            }),
        }
    }

    /// Parses one expression, including the `let` and `if` forms.
    fn parse_expr(&mut self) -> ParserResult<Expr> {
        match self.peek().kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::If => self.parse_if(),
            _ => self.parse_binary(MIN_PRECEDENCE),
        }
    }

    /// Parses `let IDENT <- expr in expr end`.
    fn parse_let(&mut self) -> ParserResult<Expr> {
        let let_token = self.expect(TokenKind::Let)?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let bound = self.parse_expr()?;
        self.expect(TokenKind::In)?;
        let body = self.parse_expr()?;
        let end_token = self.expect(TokenKind::End)?;

        Ok(Expr::Let {
            name,
            bound: Box::new(bound),
            body: Box::new(body),
            span: Span::merge(let_token.span, end_token.span),
        })
    }

    /// Parses `if expr then expr else expr`.
    fn parse_if(&mut self) -> ParserResult<Expr> {
        let if_token = self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;

        let span = Span::merge(if_token.span, else_branch.span());
        Ok(Expr::IfThenElse {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            span,
        })
    }

    /// Parses infix chains at or above the given binding power.
    fn parse_binary(&mut self, min_precedence: u8) -> ParserResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let Some(precedence) = self.peek().kind.precedence() else {
                break;
            };
            if precedence < min_precedence {
                break;
            }

            let op = Self::binary_op(&self.bump().kind);
            // Left associativity: the right operand only takes
            // strictly tighter operators.
            let right = self.parse_binary(precedence + 1)?;
            let span = Span::merge(left.span(), right.span());
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }

        Ok(left)
    }

    /// Maps an infix token to its AST operator.
    ///
    /// Only called with tokens for which `precedence()` is `Some`.
    fn binary_op(kind: &TokenKind) -> BinaryOp {
        match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::Eql => BinaryOp::Eql,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Le => BinaryOp::Le,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::Ge => BinaryOp::Ge,
            other => unreachable!("'{other}' is not an infix operator"),
        }
    }

    /// Parses prefix operators, which bind tighter than any infix.
    fn parse_unary(&mut self) -> ParserResult<Expr> {
        let token = self.peek().clone();
        let op = match token.kind {
            TokenKind::Tilde => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            _ => return self.parse_primary(),
        };

        self.bump();
        let operand = self.parse_unary()?;
        let span = Span::merge(token.span, operand.span());
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            span,
        })
    }

    /// Parses literals, variables, and parenthesized expressions.
    fn parse_primary(&mut self) -> ParserResult<Expr> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Int(value) => {
                self.bump();
                Ok(Expr::IntLiteral { value, span: token.span })
            }
            TokenKind::True => {
                self.bump();
                Ok(Expr::BoolLiteral { value: true, span: token.span })
            }
            TokenKind::False => {
                self.bump();
                Ok(Expr::BoolLiteral { value: false, span: token.span })
            }
            TokenKind::Ident(name) => {
                self.bump();
                Ok(Expr::Variable { name, span: token.span })
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            kind => Err(ParserError::ExpectedExpression {
                found: kind,
                span: token.span,
            }),
        }
    }
}
