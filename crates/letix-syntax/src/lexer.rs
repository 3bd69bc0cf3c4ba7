//! Lexical analysis for the letix language.
//!
//! The lexer is a single pass over the source text with one character
//! of lookahead. It produces spanned tokens and silently discards
//! whitespace, `-- line` comments, and `(* block *)` comments, so the
//! parser only ever sees meaningful tokens. The stream always ends
//! with a single [`TokenKind::Eof`] token.
//!
//! # Examples
//!
//! ```
//! use letix_syntax::lexer::Lexer;
//! use letix_syntax::token::TokenKind;
//!
//! let tokens = Lexer::new("let v <- 2 in v end").lex().unwrap();
//! let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Let,
//!         TokenKind::Ident("v".into()),
//!         TokenKind::Assign,
//!         TokenKind::Int(2),
//!         TokenKind::In,
//!         TokenKind::Ident("v".into()),
//!         TokenKind::End,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use crate::error::{LexerError, LexerResult};
use crate::span::Span;
use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

/// Lexer for letix source code.
pub struct Lexer<'input> {
    /// Character stream with one token of lookahead.
    chars: Peekable<Chars<'input>>,

    /// Current byte offset.
    position: usize,

    /// Current line (1-indexed).
    line: usize,

    /// Current column in bytes (1-indexed).
    column: usize,
}

impl<'input> Lexer<'input> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexerError`] encountered; the language is
    /// small enough that recovery buys nothing over stopping early.
    pub fn lex(mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia()?;

            let Some(&ch) = self.chars.peek() else {
                tokens.push(Token::new(
                    TokenKind::Eof,
                    Span::point(self.position, self.line, self.column),
                ));
                return Ok(tokens);
            };

            let token = match ch {
                '0'..='9' => self.lex_number()?,
                ch if ch.is_alphabetic() || ch == '_' => self.lex_word(),
                _ => self.lex_operator()?,
            };
            tokens.push(token);
        }
    }

    /// Consumes one character, updating position bookkeeping.
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += ch.len_utf8();
        }
        Some(ch)
    }

    /// Marks the start of a token.
    fn start(&self) -> (usize, usize, usize) {
        (self.position, self.line, self.column)
    }

    /// Builds the span from a recorded start to the current position.
    fn span_from(&self, start: (usize, usize, usize)) -> Span {
        Span::new(start.0, self.position, start.1, start.2)
    }

    /// Skips whitespace and both comment forms.
    ///
    /// `--` runs to the end of the line. `(*` runs to the matching
    /// `*)` and may span lines; it does not nest.
    fn skip_trivia(&mut self) -> LexerResult<()> {
        loop {
            match self.chars.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('-') => {
                    // Only a comment if followed by a second '-'.
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    if lookahead.peek() != Some(&'-') {
                        return Ok(());
                    }
                    while let Some(&ch) = self.chars.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some('(') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    if lookahead.peek() != Some(&'*') {
                        return Ok(());
                    }
                    let start = self.start();
                    self.bump(); // (
                    self.bump(); // *
                    loop {
                        match self.bump() {
                            Some('*') if self.chars.peek() == Some(&')') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(LexerError::UnterminatedComment {
                                    start: self.span_from(start),
                                });
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Lexes a decimal integer literal.
    fn lex_number(&mut self) -> LexerResult<Token> {
        let start = self.start();
        let mut text = String::new();

        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.bump();
        }

        let span = self.span_from(start);
        let value = text
            .parse::<i64>()
            .map_err(|_| LexerError::IntOutOfRange {
                literal: text,
                span,
            })?;
        Ok(Token::new(TokenKind::Int(value), span))
    }

    /// Lexes an identifier or keyword.
    fn lex_word(&mut self) -> Token {
        let start = self.start();
        let mut text = String::new();

        while let Some(&ch) = self.chars.peek() {
            if !(ch.is_alphanumeric() || ch == '_') {
                break;
            }
            text.push(ch);
            self.bump();
        }

        let span = self.span_from(start);
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident(text));
        Token::new(kind, span)
    }

    /// Lexes a single- or double-character operator or delimiter.
    fn lex_operator(&mut self) -> LexerResult<Token> {
        let start = self.start();
        let ch = self.bump().expect("caller checked peek");

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Eql,
            '~' => TokenKind::Tilde,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '<' => match self.chars.peek() {
                Some('-') => {
                    self.bump();
                    TokenKind::Assign
                }
                Some('=') => {
                    self.bump();
                    TokenKind::Le
                }
                _ => TokenKind::Lt,
            },
            '>' => match self.chars.peek() {
                Some('=') => {
                    self.bump();
                    TokenKind::Ge
                }
                _ => TokenKind::Gt,
            },
            other => {
                return Err(LexerError::UnknownChar {
                    ch: other,
                    span: self.span_from(start),
                });
            }
        };

        Ok(Token::new(kind, self.span_from(start)))
    }
}
