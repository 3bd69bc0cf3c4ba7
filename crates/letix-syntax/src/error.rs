//! Error types for the lexer and parser.

use crate::span::Span;
use crate::token::TokenKind;
use std::fmt;

/// Errors produced during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A character with no meaning in the language.
    UnknownChar {
        /// The offending character.
        ch: char,
        /// Where it occurred.
        span: Span,
    },

    /// A `(*` block comment that never closes.
    UnterminatedComment {
        /// Where the comment opened.
        start: Span,
    },

    /// An integer literal that does not fit in `i64`.
    IntOutOfRange {
        /// The literal text.
        literal: String,
        /// Where it occurred.
        span: Span,
    },
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChar { ch, span } => {
                write!(f, "unknown character '{ch}' at {span}")
            }
            Self::UnterminatedComment { start } => {
                write!(f, "unterminated block comment starting at {start}")
            }
            Self::IntOutOfRange { literal, span } => {
                write!(f, "integer literal '{literal}' out of range at {span}")
            }
        }
    }
}

impl std::error::Error for LexerError {}

/// Errors produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// A token other than the expected one.
    UnexpectedToken {
        /// What the parser would have accepted.
        expected: String,
        /// What it found instead.
        found: TokenKind,
        /// Where it found it.
        span: Span,
    },

    /// No expression where one was required.
    ExpectedExpression {
        /// The token that is not the start of any expression.
        found: TokenKind,
        /// Where it occurred.
        span: Span,
    },

    /// Tokens left over after a complete expression.
    TrailingInput {
        /// The first leftover token.
        found: TokenKind,
        /// Where it occurred.
        span: Span,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, span } => {
                write!(f, "expected {expected}, found '{found}' at {span}")
            }
            Self::ExpectedExpression { found, span } => {
                write!(f, "expected expression, found '{found}' at {span}")
            }
            Self::TrailingInput { found, span } => {
                write!(f, "unexpected '{found}' after expression at {span}")
            }
        }
    }
}

impl std::error::Error for ParserError {}

/// Either kind of front-end error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The lexer rejected the input.
    Lexer(LexerError),
    /// The parser rejected the token stream.
    Parser(ParserError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexer(err) => write!(f, "lexer error: {err}"),
            Self::Parser(err) => write!(f, "parser error: {err}"),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl From<LexerError> for SyntaxError {
    fn from(err: LexerError) -> Self {
        Self::Lexer(err)
    }
}

impl From<ParserError> for SyntaxError {
    fn from(err: ParserError) -> Self {
        Self::Parser(err)
    }
}

/// Result alias for lexer operations.
pub type LexerResult<T> = Result<T, LexerError>;

/// Result alias for parser operations.
pub type ParserResult<T> = Result<T, ParserError>;

/// Result alias for whole-front-end operations.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_display() {
        let err = LexerError::UnknownChar {
            ch: '@',
            span: Span::new(4, 5, 1, 5),
        };
        assert_eq!(err.to_string(), "unknown character '@' at 1:5");
    }

    #[test]
    fn test_parser_error_display() {
        let err = ParserError::UnexpectedToken {
            expected: "'then'".to_string(),
            found: TokenKind::Else,
            span: Span::new(10, 14, 2, 1),
        };
        assert_eq!(err.to_string(), "expected 'then', found 'else' at 2:1");
    }

    #[test]
    fn test_syntax_error_from() {
        let err: SyntaxError = LexerError::UnterminatedComment {
            start: Span::new(0, 2, 1, 1),
        }
        .into();
        assert!(matches!(err, SyntaxError::Lexer(_)));
        assert!(err.to_string().starts_with("lexer error:"));
    }
}
