//! Tokenizer for the expression evaluator.
//!
//! Skips leading whitespace and emits a run of tokens from an input
//! byte stream: numbers, identifiers (resolved later, against variables
//! first and the operator table second), and punctuation, matched
//! longest-prefix-first so `"<="` is not split into `"<"` then a bare `"="`.

use crate::error::{EvalError, EvalResult};
use crate::q::Q;

/// A single lexical token. Identifiers are returned unresolved; the
/// parser decides whether each one names a variable or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A numeric literal, already parsed into a [`Q`].
    Number(Q),
    /// A punctuation or symbolic operator token (`"+"`, `"<="`, `"("`, ...).
    Symbol(&'static str),
    /// A letter/underscore-led identifier, not yet resolved.
    Ident(&'a str),
}

/// Scans an input string into a sequence of [`Token`]s on demand.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, bytes: input.as_bytes(), pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b == b' ' || b == b'\t' || b == b'\n' || b == b'\r') {
            self.pos += 1;
        }
    }

    fn lex_number(&mut self) -> EvalResult<Token<'a>> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text = self.input.get(start..self.pos).unwrap_or("0");
        let value = crate::text::parse(text, 10)
            .map_err(|_| EvalError::Precondition { operator: "number", expected: "value representable in Q16.16" })?;
        Ok(Token::Number(value))
    }

    fn lex_ident(&mut self) -> Token<'a> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        let text = self.input.get(start..self.pos).unwrap_or("");
        Token::Ident(text)
    }

    fn lex_symbol(&mut self) -> EvalResult<Token<'a>> {
        let c0 = self.peek().ok_or(EvalError::UnknownToken)?;
        let c1 = self.peek_at(1);
        let (sym, len): (&'static str, usize) = match (c0, c1) {
            (b'!', Some(b'=')) => ("!=", 2),
            (b'*', Some(b'*')) => ("**", 2),
            (b'<', Some(b'<')) => ("<<", 2),
            (b'<', Some(b'=')) => ("<=", 2),
            (b'=', Some(b'=')) => ("==", 2),
            (b'>', Some(b'=')) => (">=", 2),
            (b'>', Some(b'>')) => (">>", 2),
            (b'%', _) => ("%", 1),
            (b'&', _) => ("&", 1),
            (b'*', _) => ("*", 1),
            (b'+', _) => ("+", 1),
            (b'-', _) => ("-", 1),
            (b'/', _) => ("/", 1),
            (b'<', _) => ("<", 1),
            (b'>', _) => (">", 1),
            (b'^', _) => ("^", 1),
            (b'|', _) => ("|", 1),
            (b'~', _) => ("~", 1),
            (b'(', _) => ("(", 1),
            (b')', _) => (")", 1),
            _ => return Err(EvalError::UnknownToken),
        };
        self.pos += len;
        Ok(Token::Symbol(sym))
    }

    /// Produces the next token, or `None` at end of input.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownToken`] on a character that starts none
    /// of number/identifier/punctuation, or a malformed numeric literal.
    pub fn next_token(&mut self) -> EvalResult<Option<Token<'a>>> {
        self.skip_whitespace();
        match self.peek() {
            None => Ok(None),
            Some(b) if b.is_ascii_digit() => self.lex_number().map(Some),
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => Ok(Some(self.lex_ident())),
            Some(_) => self.lex_symbol().map(Some),
        }
    }
}
