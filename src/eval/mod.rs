//! A bounded, allocation-free shunting-yard expression evaluator over
//! [`Q`](crate::q::Q) values.
//!
//! # Example
//!
//! ```
//! use fixed_analytics::eval::Evaluator;
//! use fixed_analytics::Q;
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.set_variable("x", Q::from_i32(3)).unwrap();
//! let result = evaluator.evaluate("x * (2 + 1)").unwrap();
//! assert_eq!(result, Q::from_i32(9));
//! ```
//!
//! Numbers are decimal (`"3.14159"`); operators are either punctuation
//! (`+ - * / % rem ** < <= > >= == != & | ^ ~ << >>`) or identifiers
//! (`sin`, `atan2`, `is_odd`, ...), looked up first as a named variable
//! and then in the operator table. Both `sin(x)` and `sin x` parse to the
//! same call, since unary operators and parenthesized groups share the
//! same high, right-associative precedence.

pub mod lexer;
pub mod operators;
pub mod parser;

pub use lexer::{Lexer, Token};
pub use operators::{find_operator, visible_operators, Arity, Associativity, OpEval, Operator, OPERATORS};
pub use parser::{Evaluator, MAX_NAME_LEN, MAX_STACK, MAX_VARIABLES};
