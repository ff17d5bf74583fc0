//! The two-stack shunting-yard evaluator.
//!
//! An [`Evaluator`] owns two bounded, fixed-capacity stacks (no heap, no
//! `alloc`) and a bounded table of named variables, each stored as one
//! small fixed-size buffer. `evaluate` walks an expression left to right,
//! pushing numbers straight to the number stack and popping-and-applying
//! operators from the operator stack according to precedence and
//! associativity, exactly as in a textbook shunting-yard parser.

use crate::error::{EvalError, EvalResult};
use crate::eval::lexer::{Lexer, Token};
use crate::eval::operators::{self, Arity, Associativity, Operator};
use crate::q::Q;

/// Capacity of the operator stack and the number stack.
pub const MAX_STACK: usize = 64;
/// Maximum number of named variables an [`Evaluator`] can hold at once.
pub const MAX_VARIABLES: usize = 32;
/// Maximum byte length of a variable name; longer names are truncated.
pub const MAX_NAME_LEN: usize = 24;

#[derive(Clone, Copy)]
struct Variable {
    name: [u8; MAX_NAME_LEN],
    name_len: u8,
    value: Q,
}

impl Variable {
    fn matches(&self, name: &str) -> bool {
        self.name.get(..usize::from(self.name_len)).is_some_and(|stored| stored == name.as_bytes())
    }
}

#[derive(Clone, Copy)]
enum StackEntry {
    LeftParen,
    Op(&'static Operator),
}

/// Reusable shunting-yard expression evaluator over bounded, fixed-size
/// storage. Construct once, optionally populate with [`set_variable`],
/// and call [`evaluate`] once per expression.
///
/// [`set_variable`]: Evaluator::set_variable
/// [`evaluate`]: Evaluator::evaluate
pub struct Evaluator {
    op_stack: [Option<StackEntry>; MAX_STACK],
    op_len: usize,
    num_stack: [Q; MAX_STACK],
    num_len: usize,
    variables: [Variable; MAX_VARIABLES],
    var_len: usize,
    error: Option<EvalError>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an empty evaluator with no variables defined.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            op_stack: [None; MAX_STACK],
            op_len: 0,
            num_stack: [Q::ZERO; MAX_STACK],
            num_len: 0,
            variables: [Variable { name: [0; MAX_NAME_LEN], name_len: 0, value: Q::ZERO }; MAX_VARIABLES],
            var_len: 0,
            error: None,
        }
    }

    /// Defines or redefines a named variable, usable in subsequent
    /// expressions passed to [`evaluate`](Self::evaluate). Names longer
    /// than [`MAX_NAME_LEN`] are truncated.
    ///
    /// # Errors
    /// Returns [`EvalError::TooManyVariables`] if the variable table is
    /// full and `name` does not match an existing entry.
    pub fn set_variable(&mut self, name: &str, value: Q) -> EvalResult<()> {
        let cut = name.len().min(MAX_NAME_LEN);
        let truncated = name.as_bytes().get(..cut).unwrap_or(&[]);
        if let Some(existing) =
            self.variables.get_mut(..self.var_len).unwrap_or(&mut []).iter_mut().find(|v| v.matches(name))
        {
            existing.value = value;
            return Ok(());
        }
        let slot = self.variables.get_mut(self.var_len).ok_or(EvalError::TooManyVariables)?;
        let mut buf = [0u8; MAX_NAME_LEN];
        if let Some(dest) = buf.get_mut(..truncated.len()) {
            dest.copy_from_slice(truncated);
        }
        #[allow(clippy::cast_possible_truncation, reason = "truncated is at most MAX_NAME_LEN bytes")]
        let name_len = truncated.len() as u8;
        *slot = Variable { name: buf, name_len, value };
        self.var_len += 1;
        Ok(())
    }

    fn lookup_variable(&self, name: &str) -> Option<Q> {
        self.variables.get(..self.var_len)?.iter().find(|v| v.matches(name)).map(|v| v.value)
    }

    /// The error recorded by the most recent [`evaluate`](Self::evaluate)
    /// call, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<EvalError> {
        self.error
    }

    fn reset(&mut self) {
        self.op_len = 0;
        self.num_len = 0;
        self.error = None;
    }

    fn push_number(&mut self, value: Q) -> EvalResult<()> {
        let slot = self.num_stack.get_mut(self.num_len).ok_or(EvalError::StackExhausted)?;
        *slot = value;
        self.num_len += 1;
        Ok(())
    }

    fn pop_number(&mut self) -> EvalResult<Q> {
        let new_len = self.num_len.checked_sub(1).ok_or(EvalError::MalformedExpression)?;
        let value = *self.num_stack.get(new_len).ok_or(EvalError::MalformedExpression)?;
        self.num_len = new_len;
        Ok(value)
    }

    fn push_entry(&mut self, entry: StackEntry) -> EvalResult<()> {
        let slot = self.op_stack.get_mut(self.op_len).ok_or(EvalError::StackExhausted)?;
        *slot = Some(entry);
        self.op_len += 1;
        Ok(())
    }

    fn pop_entry(&mut self) -> Option<StackEntry> {
        let new_len = self.op_len.checked_sub(1)?;
        let entry = self.op_stack.get_mut(new_len)?.take();
        self.op_len = new_len;
        entry
    }

    fn peek_entry(&self) -> Option<StackEntry> {
        let idx = self.op_len.checked_sub(1)?;
        self.op_stack.get(idx).copied().flatten()
    }

    /// Pops one operator from the operator stack and applies it to
    /// operands popped from the number stack, pushing the result back.
    fn pop_evaluate(&mut self) -> EvalResult<()> {
        match self.pop_entry() {
            None | Some(StackEntry::LeftParen) => Err(EvalError::MalformedExpression),
            Some(StackEntry::Op(op)) => {
                let result = match op.arity() {
                    Arity::Unary => {
                        let a = self.pop_number()?;
                        op.apply_unary(a)?
                    }
                    Arity::Binary => {
                        let b = self.pop_number()?;
                        let a = self.pop_number()?;
                        op.apply_binary(a, b)?
                    }
                };
                self.push_number(result)
            }
        }
    }

    /// Pushes `op` onto the operator stack, first popping-and-evaluating
    /// any operators already on top that bind at least as tightly (left
    /// associative) or strictly more tightly (right associative).
    fn push_operator(&mut self, op: &'static Operator) -> EvalResult<()> {
        loop {
            let Some(StackEntry::Op(top)) = self.peek_entry() else { break };
            let should_pop = match op.associativity {
                Associativity::Right => top.precedence > op.precedence,
                Associativity::Left | Associativity::None => top.precedence >= op.precedence,
            };
            if !should_pop {
                break;
            }
            self.pop_evaluate()?;
        }
        self.push_entry(StackEntry::Op(op))
    }

    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.peek_entry() {
                None => return Err(EvalError::UnmatchedRightParen),
                Some(StackEntry::LeftParen) => {
                    self.pop_entry();
                    return Ok(());
                }
                Some(StackEntry::Op(_)) => self.pop_evaluate()?,
            }
        }
    }

    fn run(&mut self, expr: &str) -> EvalResult<Q> {
        self.reset();
        let mut lexer = Lexer::new(expr);
        // True when the next token, if a sign, should be read as unary:
        // at the start of input, right after '(', or right after another
        // operator.
        let mut expect_operand = true;

        while let Some(token) = lexer.next_token()? {
            match token {
                Token::Number(value) => {
                    self.push_number(value)?;
                    expect_operand = false;
                }
                Token::Ident(name) => {
                    if let Some(value) = self.lookup_variable(name) {
                        self.push_number(value)?;
                        expect_operand = false;
                    } else if let Some(op) = operators::find_operator(name) {
                        self.push_operator(op)?;
                        expect_operand = true;
                    } else {
                        return Err(EvalError::UnknownToken);
                    }
                }
                Token::Symbol("(") => {
                    self.push_entry(StackEntry::LeftParen)?;
                    expect_operand = true;
                }
                Token::Symbol(")") => {
                    self.close_paren()?;
                    expect_operand = false;
                }
                Token::Symbol("-") if expect_operand => {
                    self.push_operator(operators::unary_negate())?;
                    expect_operand = true;
                }
                Token::Symbol(sym) => {
                    let op = operators::find_operator(sym).ok_or(EvalError::UnknownToken)?;
                    self.push_operator(op)?;
                    expect_operand = true;
                }
            }
        }

        while self.peek_entry().is_some() {
            match self.peek_entry() {
                Some(StackEntry::LeftParen) => return Err(EvalError::UnmatchedLeftParen),
                _ => self.pop_evaluate()?,
            }
        }

        if self.num_len != 1 {
            return Err(EvalError::MalformedExpression);
        }
        self.pop_number()
    }

    /// Evaluates `expr`, returning the resulting value.
    ///
    /// Per the first-error-wins policy, as soon as any step fails the
    /// evaluator stops walking the token stream and returns that error;
    /// the two stacks are left in whatever state they were in at the
    /// point of failure. [`error`](Self::error) reports the same error
    /// afterward. Named variables set via [`set_variable`](Self::set_variable)
    /// persist across calls; the stacks are cleared at the start of
    /// every call.
    ///
    /// # Errors
    /// See [`EvalError`] for the cases this can report.
    pub fn evaluate(&mut self, expr: &str) -> EvalResult<Q> {
        match self.run(expr) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }
}
