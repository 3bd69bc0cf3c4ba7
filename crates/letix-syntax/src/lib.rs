//! letix syntax: lexer, parser, and AST.
//!
//! This crate is the language front end. It turns source text into the
//! closed [`ast::Expr`] tree that the type checker and evaluator
//! consume; neither of those crates knows anything about tokens or
//! grammar.
//!
//! # Modules
//!
//! - [`span`] - Source location tracking
//! - [`token`] - Token kinds and spanned tokens
//! - [`lexer`] - Single-pass tokenizer
//! - [`ast`] - Expression tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`error`] - Lexer and parser error types
//!
//! # Example
//!
//! ```
//! use letix_syntax::parse;
//!
//! let expr = parse("let v <- 40 + 2 in v * v end").unwrap();
//! assert_eq!(expr.to_string(), "let v <- (40 + 2) in (v * v) end");
//! ```

#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::{
    LexerError, LexerResult, ParserError, ParserResult, SyntaxError, SyntaxResult,
};
pub use lexer::Lexer;
pub use parser::Parser;
pub use span::{Span, Spanned};
pub use token::{Token, TokenKind};

/// Lexes and parses source text in one step.
///
/// # Errors
///
/// Returns a [`SyntaxError`] wrapping whichever stage rejected the
/// input.
pub fn parse(source: &str) -> SyntaxResult<Expr> {
    let tokens = Lexer::new(source).lex()?;
    let expr = Parser::new(tokens).parse()?;
    Ok(expr)
}
