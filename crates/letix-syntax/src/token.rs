//! Token kinds and lexical tokens for the letix language.
//!
//! The concrete syntax is small: `let`/`in`/`end` bindings,
//! `if`/`then`/`else`, the literals `true`/`false` and decimal
//! integers, and a handful of infix/prefix operators. Comments
//! (`-- line` and `(* block *)`) and whitespace never reach the
//! token stream.

use crate::span::{Span, Spanned};
use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ===== Keywords =====
    /// `let`
    Let,
    /// `in`
    In,
    /// `end`
    End,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,

    // ===== Literals =====
    /// Identifier: `x`, `sum2`
    Ident(String),
    /// Decimal integer literal: `42`
    Int(i64),
    /// `true`
    True,
    /// `false`
    False,

    // ===== Operators =====
    /// `<-` (let binding)
    Assign,
    /// `=` (polymorphic equality)
    Eql,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `~` (arithmetic negation)
    Tilde,

    // ===== Delimiters =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Binding power of this token as an infix operator, or `None` if
    /// it is not one. Higher binds tighter. All infix operators are
    /// left-associative.
    ///
    /// Tightest to loosest: `* /`, `+ -`, `< <= > >=`, `=`, `and`, `or`.
    #[must_use]
    pub fn precedence(&self) -> Option<u8> {
        match self {
            TokenKind::Star | TokenKind::Slash => Some(60),
            TokenKind::Plus | TokenKind::Minus => Some(50),
            TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge => Some(40),
            TokenKind::Eql => Some(30),
            TokenKind::And => Some(20),
            TokenKind::Or => Some(10),
            _ => None,
        }
    }

    /// Maps a full identifier to its keyword kind, if it is one.
    #[must_use]
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        match ident {
            "let" => Some(TokenKind::Let),
            "in" => Some(TokenKind::In),
            "end" => Some(TokenKind::End),
            "if" => Some(TokenKind::If),
            "then" => Some(TokenKind::Then),
            "else" => Some(TokenKind::Else),
            "not" => Some(TokenKind::Not),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Let => write!(f, "let"),
            TokenKind::In => write!(f, "in"),
            TokenKind::End => write!(f, "end"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Then => write!(f, "then"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::Not => write!(f, "not"),
            TokenKind::And => write!(f, "and"),
            TokenKind::Or => write!(f, "or"),
            TokenKind::Ident(name) => write!(f, "{name}"),
            TokenKind::Int(value) => write!(f, "{value}"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Assign => write!(f, "<-"),
            TokenKind::Eql => write!(f, "="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Le => write!(f, "<="),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Ge => write!(f, ">="),
            TokenKind::Tilde => write!(f, "~"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token: a kind plus its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it was lexed from.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::keyword("letx"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_precedence_ordering() {
        let mul = TokenKind::Star.precedence().unwrap();
        let add = TokenKind::Plus.precedence().unwrap();
        let cmp = TokenKind::Lt.precedence().unwrap();
        let eql = TokenKind::Eql.precedence().unwrap();
        let and = TokenKind::And.precedence().unwrap();
        let or = TokenKind::Or.precedence().unwrap();

        assert!(mul > add);
        assert!(add > cmp);
        assert!(cmp > eql);
        assert!(eql > and);
        assert!(and > or);
    }

    #[test]
    fn test_non_operators_have_no_precedence() {
        assert_eq!(TokenKind::Not.precedence(), None);
        assert_eq!(TokenKind::LParen.precedence(), None);
        assert_eq!(TokenKind::Assign.precedence(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Assign.to_string(), "<-");
        assert_eq!(TokenKind::Ident("abc".into()).to_string(), "abc");
        assert_eq!(TokenKind::Int(42).to_string(), "42");
    }
}
