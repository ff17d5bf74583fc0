//! The operator table: name, arity, precedence, associativity, and the
//! function each operator dispatches to.
//!
//! Grounded on the arity-tagged instruction/operator idiom (a sum type
//! carrying the function, with a `name()`-style lookup) rather than a
//! big dispatch `match` on raw strings at call time; here the "instruction"
//! is a plain operator entry in a table sorted by name, found by binary
//! search instead of decoded from a bytecode stream.

use crate::error::{EvalError, EvalResult};
use crate::ops;
use crate::q::Q;

/// How many values an [`Operator`] consumes from the number stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Consumes one value.
    Unary,
    /// Consumes two values.
    Binary,
}

/// Associativity, used to decide whether equal-precedence operators on
/// the stack are popped before a new one of the same precedence is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Pop equal-precedence operators before pushing (`a - b - c = (a-b)-c`).
    Left,
    /// Keep equal-precedence operators on the stack (`a ** b ** c = a**(b**c)`).
    Right,
    /// Non-chaining (comparisons); treated like [`Associativity::Left`] for
    /// stack discipline, since shunting-yard requires a choice either way.
    None,
}

/// The function an operator dispatches to, tagged by how many operands
/// it takes.
#[derive(Clone, Copy)]
pub enum OpEval {
    /// A one-operand function.
    Unary(fn(Q) -> EvalResult<Q>),
    /// A two-operand function, `(left, right)`.
    Binary(fn(Q, Q) -> EvalResult<Q>),
}

/// A single entry in the operator table.
#[derive(Clone, Copy)]
pub struct Operator {
    /// The token text that names this operator (`"+"`, `"atan2"`, `"sin"`, ...).
    pub name: &'static str,
    /// The function this operator evaluates to.
    pub eval: OpEval,
    /// Binding strength: higher binds tighter.
    pub precedence: u8,
    /// Parse direction for chained uses of this operator at equal precedence.
    pub associativity: Associativity,
    /// Whether this operator is omitted from a listing of available
    /// operators when the "hide internals" configuration is set. A hidden
    /// operator is still fully usable by name; it is only absent from
    /// introspection.
    pub hidden: bool,
}

impl Operator {
    /// Arity, derived from which [`OpEval`] variant this operator carries.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.eval {
            OpEval::Unary(_) => Arity::Unary,
            OpEval::Binary(_) => Arity::Binary,
        }
    }

    /// Applies this operator to one operand.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedExpression`] if this is a binary
    /// operator, or whatever error the underlying function returns.
    pub fn apply_unary(&self, a: Q) -> EvalResult<Q> {
        match self.eval {
            OpEval::Unary(f) => f(a),
            OpEval::Binary(_) => Err(EvalError::MalformedExpression),
        }
    }

    /// Applies this operator to two operands, `(left, right)`.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedExpression`] if this is a unary
    /// operator, or whatever error the underlying function returns.
    pub fn apply_binary(&self, a: Q, b: Q) -> EvalResult<Q> {
        match self.eval {
            OpEval::Binary(f) => f(a, b),
            OpEval::Unary(_) => Err(EvalError::MalformedExpression),
        }
    }
}

const fn bool_to_q(b: bool) -> Q {
    if b {
        Q::ONE
    } else {
        Q::ZERO
    }
}

fn require_nonzero(operator: &'static str, rhs: Q) -> EvalResult<()> {
    if rhs == Q::ZERO {
        Err(EvalError::Precondition { operator, expected: "non-zero right operand" })
    } else {
        Ok(())
    }
}

#[allow(clippy::cast_sign_loss, reason = "clamped to 0..=31 before the cast")]
fn shift_amount(b: Q) -> u32 {
    b.to_i64().clamp(0, 31) as u32
}

fn ev_ne(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a != b))
}
fn ev_modulo(a: Q, b: Q) -> EvalResult<Q> {
    require_nonzero("%", b)?;
    Ok(a.modulo(b))
}
fn ev_bit_and(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.bit_and(b))
}
fn ev_mul(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.mul(b))
}
fn ev_pow(a: Q, b: Q) -> EvalResult<Q> {
    ops::pow(a, b).map_err(Into::into)
}
fn ev_add(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.add(b))
}
fn ev_sub(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.sub(b))
}
fn ev_div(a: Q, b: Q) -> EvalResult<Q> {
    require_nonzero("/", b)?;
    Ok(a.div(b))
}
fn ev_lt(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a < b))
}
fn ev_shl(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.arithmetic_shift_left(shift_amount(b)))
}
fn ev_le(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a <= b))
}
fn ev_eq(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a == b))
}
fn ev_gt(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a > b))
}
fn ev_ge(a: Q, b: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a >= b))
}
fn ev_shr(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.arithmetic_shift_right(shift_amount(b)))
}
fn ev_bit_xor(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.bit_xor(b))
}
fn ev_abs(a: Q) -> EvalResult<Q> {
    Ok(a.abs())
}
fn ev_acos(a: Q) -> EvalResult<Q> {
    ops::acos(a).map_err(Into::into)
}
fn ev_acosh(a: Q) -> EvalResult<Q> {
    ops::acosh(a).map_err(Into::into)
}
fn ev_acoth(a: Q) -> EvalResult<Q> {
    ops::acoth(a).map_err(Into::into)
}
fn ev_asin(a: Q) -> EvalResult<Q> {
    ops::asin(a).map_err(Into::into)
}
fn ev_asinh(a: Q) -> EvalResult<Q> {
    Ok(ops::asinh(a))
}
fn ev_atan(a: Q) -> EvalResult<Q> {
    Ok(ops::atan(a))
}
fn ev_atan2(a: Q, b: Q) -> EvalResult<Q> {
    Ok(ops::atan2(a, b))
}
fn ev_atanh(a: Q) -> EvalResult<Q> {
    ops::atanh(a).map_err(Into::into)
}
fn ev_ceil(a: Q) -> EvalResult<Q> {
    Ok(a.ceil())
}
fn ev_copysign(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.copysign(b))
}
fn ev_cos(a: Q) -> EvalResult<Q> {
    Ok(ops::cos(a))
}
fn ev_cosh(a: Q) -> EvalResult<Q> {
    Ok(ops::cosh(a))
}
fn ev_cot(a: Q) -> EvalResult<Q> {
    ops::cot(a).map_err(Into::into)
}
fn ev_coth(a: Q) -> EvalResult<Q> {
    ops::coth(a).map_err(Into::into)
}
fn ev_deg2rad(a: Q) -> EvalResult<Q> {
    Ok(ops::deg2rad(a))
}
fn ev_exp(a: Q) -> EvalResult<Q> {
    Ok(ops::exp(a))
}
fn ev_floor(a: Q) -> EvalResult<Q> {
    Ok(a.floor())
}
fn ev_hypot(a: Q, b: Q) -> EvalResult<Q> {
    Ok(ops::hypot(a, b))
}
fn ev_is_even(a: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a.is_even()))
}
fn ev_is_integer(a: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a.is_integer()))
}
fn ev_is_negative(a: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a.is_negative()))
}
fn ev_is_odd(a: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a.is_odd()))
}
fn ev_is_positive(a: Q) -> EvalResult<Q> {
    Ok(bool_to_q(a.is_positive()))
}
fn ev_ln(a: Q) -> EvalResult<Q> {
    ops::ln(a).map_err(Into::into)
}
fn ev_log10(a: Q) -> EvalResult<Q> {
    ops::log10(a).map_err(Into::into)
}
fn ev_log2(a: Q) -> EvalResult<Q> {
    ops::log2(a).map_err(Into::into)
}
fn ev_max(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.max(b))
}
fn ev_min(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.min(b))
}
fn ev_neg(a: Q) -> EvalResult<Q> {
    Ok(a.neg())
}
fn ev_rad2deg(a: Q) -> EvalResult<Q> {
    Ok(ops::rad2deg(a))
}
fn ev_rem(a: Q, b: Q) -> EvalResult<Q> {
    require_nonzero("rem", b)?;
    Ok(a.rem(b))
}
fn ev_round(a: Q) -> EvalResult<Q> {
    Ok(a.round())
}
fn ev_sin(a: Q) -> EvalResult<Q> {
    Ok(ops::sin(a))
}
fn ev_sinh(a: Q) -> EvalResult<Q> {
    Ok(ops::sinh(a))
}
fn ev_sqrt(a: Q) -> EvalResult<Q> {
    ops::sqrt(a).map_err(Into::into)
}
fn ev_tan(a: Q) -> EvalResult<Q> {
    Ok(ops::tan(a))
}
fn ev_tanh(a: Q) -> EvalResult<Q> {
    Ok(ops::tanh(a))
}
fn ev_trunc(a: Q) -> EvalResult<Q> {
    Ok(a.trunc())
}
fn ev_bit_or(a: Q, b: Q) -> EvalResult<Q> {
    Ok(a.bit_or(b))
}
fn ev_bit_not(a: Q) -> EvalResult<Q> {
    Ok(a.bit_not())
}

const P_CMP: u8 = 2;
const P_OR: u8 = 3;
const P_XOR: u8 = 4;
const P_AND: u8 = 5;
const P_SHIFT: u8 = 6;
const P_ADD: u8 = 7;
const P_MUL: u8 = 8;
const P_POW: u8 = 9;
const P_CALL: u8 = 9;
const P_UNARY: u8 = 10;

/// The sentinel name used internally for unary negate, distinct from the
/// binary-minus entry named `"-"`. The parser swaps a lexed `"-"` token's
/// operator pointer over to this entry when the surrounding context calls
/// for a unary sign rather than a subtraction.
pub const UNARY_NEGATE_NAME: &str = "neg";
/// The sentinel name for binary subtraction.
pub const BINARY_MINUS_NAME: &str = "-";
/// The sentinel name for a left parenthesis (never looked up; used for
/// doc cross-reference from the parser).
pub const LEFT_PAREN_NAME: &str = "(";
/// The sentinel name for a right parenthesis.
pub const RIGHT_PAREN_NAME: &str = ")";

/// The unary-negate table entry, named directly rather than found by a
/// fallible lookup, since [`unary_negate`] must never fail.
const UNARY_NEGATE: Operator = Operator {
    name: UNARY_NEGATE_NAME,
    eval: OpEval::Unary(ev_neg),
    precedence: P_UNARY,
    associativity: Associativity::Right,
    hidden: false,
};
/// The binary-minus table entry, named directly for the same reason as
/// [`UNARY_NEGATE`].
const BINARY_MINUS: Operator = Operator {
    name: BINARY_MINUS_NAME,
    eval: OpEval::Binary(ev_sub),
    precedence: P_ADD,
    associativity: Associativity::Left,
    hidden: false,
};

/// All operators known to the evaluator, sorted by [`Operator::name`] so
/// that [`find_operator`] can binary search in `O(log n)`.
pub static OPERATORS: &[Operator] = &[
    Operator { name: "!=", eval: OpEval::Binary(ev_ne), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: "%", eval: OpEval::Binary(ev_modulo), precedence: P_MUL, associativity: Associativity::Left, hidden: false },
    Operator { name: "&", eval: OpEval::Binary(ev_bit_and), precedence: P_AND, associativity: Associativity::Left, hidden: false },
    Operator { name: "*", eval: OpEval::Binary(ev_mul), precedence: P_MUL, associativity: Associativity::Left, hidden: false },
    Operator { name: "**", eval: OpEval::Binary(ev_pow), precedence: P_POW, associativity: Associativity::Right, hidden: false },
    Operator { name: "+", eval: OpEval::Binary(ev_add), precedence: P_ADD, associativity: Associativity::Left, hidden: false },
    BINARY_MINUS,
    Operator { name: "/", eval: OpEval::Binary(ev_div), precedence: P_MUL, associativity: Associativity::Left, hidden: false },
    Operator { name: "<", eval: OpEval::Binary(ev_lt), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: "<<", eval: OpEval::Binary(ev_shl), precedence: P_SHIFT, associativity: Associativity::Left, hidden: false },
    Operator { name: "<=", eval: OpEval::Binary(ev_le), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: "==", eval: OpEval::Binary(ev_eq), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: ">", eval: OpEval::Binary(ev_gt), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: ">=", eval: OpEval::Binary(ev_ge), precedence: P_CMP, associativity: Associativity::None, hidden: false },
    Operator { name: ">>", eval: OpEval::Binary(ev_shr), precedence: P_SHIFT, associativity: Associativity::Left, hidden: false },
    Operator { name: "^", eval: OpEval::Binary(ev_bit_xor), precedence: P_XOR, associativity: Associativity::Left, hidden: false },
    Operator { name: "abs", eval: OpEval::Unary(ev_abs), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "acos", eval: OpEval::Unary(ev_acos), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "acosh", eval: OpEval::Unary(ev_acosh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "acoth", eval: OpEval::Unary(ev_acoth), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "asin", eval: OpEval::Unary(ev_asin), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "asinh", eval: OpEval::Unary(ev_asinh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "atan", eval: OpEval::Unary(ev_atan), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "atan2", eval: OpEval::Binary(ev_atan2), precedence: P_CALL, associativity: Associativity::Left, hidden: false },
    Operator { name: "atanh", eval: OpEval::Unary(ev_atanh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "ceil", eval: OpEval::Unary(ev_ceil), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "copysign", eval: OpEval::Binary(ev_copysign), precedence: P_CALL, associativity: Associativity::Left, hidden: true },
    Operator { name: "cos", eval: OpEval::Unary(ev_cos), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "cosh", eval: OpEval::Unary(ev_cosh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "cot", eval: OpEval::Unary(ev_cot), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "coth", eval: OpEval::Unary(ev_coth), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "deg2rad", eval: OpEval::Unary(ev_deg2rad), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "exp", eval: OpEval::Unary(ev_exp), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "floor", eval: OpEval::Unary(ev_floor), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "hypot", eval: OpEval::Binary(ev_hypot), precedence: P_CALL, associativity: Associativity::Left, hidden: false },
    Operator { name: "is_even", eval: OpEval::Unary(ev_is_even), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "is_integer", eval: OpEval::Unary(ev_is_integer), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "is_negative", eval: OpEval::Unary(ev_is_negative), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "is_odd", eval: OpEval::Unary(ev_is_odd), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "is_positive", eval: OpEval::Unary(ev_is_positive), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "ln", eval: OpEval::Unary(ev_ln), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "log10", eval: OpEval::Unary(ev_log10), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "log2", eval: OpEval::Unary(ev_log2), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "max", eval: OpEval::Binary(ev_max), precedence: P_CALL, associativity: Associativity::Left, hidden: false },
    Operator { name: "min", eval: OpEval::Binary(ev_min), precedence: P_CALL, associativity: Associativity::Left, hidden: false },
    UNARY_NEGATE,
    Operator { name: "rad2deg", eval: OpEval::Unary(ev_rad2deg), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "rem", eval: OpEval::Binary(ev_rem), precedence: P_MUL, associativity: Associativity::Left, hidden: false },
    Operator { name: "round", eval: OpEval::Unary(ev_round), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "sin", eval: OpEval::Unary(ev_sin), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "sinh", eval: OpEval::Unary(ev_sinh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "sqrt", eval: OpEval::Unary(ev_sqrt), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "tan", eval: OpEval::Unary(ev_tan), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "tanh", eval: OpEval::Unary(ev_tanh), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "trunc", eval: OpEval::Unary(ev_trunc), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
    Operator { name: "|", eval: OpEval::Binary(ev_bit_or), precedence: P_OR, associativity: Associativity::Left, hidden: false },
    Operator { name: "~", eval: OpEval::Unary(ev_bit_not), precedence: P_UNARY, associativity: Associativity::Right, hidden: false },
];

/// Looks up an operator by name via binary search. `OPERATORS` must stay
/// sorted by name for this to be correct.
#[must_use]
pub fn find_operator(name: &str) -> Option<&'static Operator> {
    OPERATORS.binary_search_by(|op| op.name.cmp(name)).ok().map(|i| &OPERATORS[i])
}

/// The unary-negate sentinel, looked up once and reused by the parser.
#[must_use]
pub const fn unary_negate() -> &'static Operator {
    &UNARY_NEGATE
}

/// The binary-minus sentinel.
#[must_use]
pub const fn binary_minus() -> &'static Operator {
    &BINARY_MINUS
}

/// Iterates operators not marked [`Operator::hidden`], for listing
/// available operators to a user (e.g. a REPL's `help` command).
pub fn visible_operators() -> impl Iterator<Item = &'static Operator> {
    OPERATORS.iter().filter(|op| !op.hidden)
}
