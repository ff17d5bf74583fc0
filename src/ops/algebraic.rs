//! Algebraic functions: square root, hypotenuse, power, and polar/
//! rectangular conversion.

use crate::bounded::NonNegative;
use crate::error::{Error, Result};
use crate::kernel::{circular_gain_inv, cordic, Coordinate, Mode, DEFAULT_ITERATIONS};
use crate::ops::circular::{atan2, sin_cos};
use crate::ops::exponential::{exp, ln};
use crate::q::Q;

/// Relative-tolerance threshold for Newton-Raphson termination: `0x0010`
/// for `x <= 100`, `0x0100` otherwise, per `spec.md` §4.4.
const SMALL_EPSILON: Q = Q::from_bits(0x0010);
const LARGE_EPSILON: Q = Q::from_bits(0x0100);
const HUNDRED: Q = Q::from_bits(100 << 16);

/// Square root. Domain: `x >= 0`. Newton-Raphson iteration.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x < 0`.
#[must_use = "returns the square root result which should be handled"]
pub fn sqrt(x: Q) -> Result<Q> {
    NonNegative::new(x)
        .map(sqrt_nonneg)
        .ok_or_else(|| Error::domain("sqrt", "non-negative value"))
}

/// Infallible square root for non-negative values.
///
/// Takes a [`NonNegative`] wrapper, guaranteeing at the type level that
/// the input is valid, so callers with an already-established
/// non-negativity invariant (e.g. `1 + x^2`) skip the runtime check.
#[must_use]
pub fn sqrt_nonneg(x: NonNegative) -> Q {
    let x = x.get();

    if x == Q::ZERO {
        return Q::ZERO;
    }
    if x == Q::ONE {
        return Q::ONE;
    }

    // Initial guess: max(1, x/2), per spec.md §4.4.
    let mut guess = Q::ONE.max(x >> 1);
    let epsilon = if x <= HUNDRED { SMALL_EPSILON } else { LARGE_EPSILON };

    // Newton-Raphson: guess_{n+1} = (guess_n + x/guess_n) / 2.
    // Bounded at 32 iterations; convergence is quadratic and the epsilon
    // check below exits far sooner for any representable Q16.16 value.
    for _ in 0..32 {
        let quotient = x.div(guess);
        let new_guess = guess.add(quotient) >> 1;

        let diff = if new_guess > guess {
            new_guess.sub(guess)
        } else {
            guess.sub(new_guess)
        };

        guess = new_guess;
        if diff <= epsilon {
            break;
        }
    }

    guess
}

/// Hypotenuse: `sqrt(a^2 + b^2)`, computed via circular-vectoring CORDIC
/// rather than literal squaring, to avoid overflow for large `a`/`b`.
#[must_use]
pub fn hypot(a: Q, b: Q) -> Q {
    let mut cx = a.abs();
    let mut cy = b.abs();
    let mut cz = Q::ZERO;
    cordic(Coordinate::Circular, Mode::Vectoring, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
    cx.mul(circular_gain_inv())
}

/// `n` raised to the power `e`.
///
/// - `pow(0, 0) = 1` by convention.
/// - `pow(0, e)` for `e < 0` is a domain violation (division by zero).
/// - `pow(0, e)` for `e > 0` is `0`.
/// - `pow(n, e)` for `n < 0` computes `pow(|n|, e)`, negated if `e` is an
///   odd integer (the only case a negative base yields a real result
///   this implementation distinguishes).
/// - `pow(n, e)` for `e < 0` computes `1 / pow(n, |e|)`.
/// - Otherwise, `exp(e * ln(n))`.
///
/// # Errors
/// Returns [`Error::DomainError`] for `pow(0, e<0)` or if the underlying
/// `ln` call is out of domain.
#[must_use = "returns the power result which should be handled"]
pub fn pow(n: Q, e: Q) -> Result<Q> {
    if n == Q::ZERO {
        if e == Q::ZERO {
            return Ok(Q::ONE);
        }
        if e.is_negative() {
            return Err(Error::domain("pow", "non-negative exponent when base is 0"));
        }
        return Ok(Q::ZERO);
    }

    if n.is_negative() {
        let magnitude = pow(n.abs(), e)?;
        return Ok(if e.is_integer() && e.is_odd() {
            magnitude.neg()
        } else {
            magnitude
        });
    }

    if e.is_negative() {
        let positive_power = pow(n, e.neg())?;
        if positive_power == Q::ZERO {
            return Err(Error::domain("pow", "non-zero result for negative exponent"));
        }
        return Ok(Q::ONE.div(positive_power));
    }

    if e == Q::ZERO {
        return Ok(Q::ONE);
    }

    Ok(exp(e.mul(ln(n)?)))
}

/// Converts polar coordinates `(magnitude, angle)` to rectangular
/// coordinates, returned as `(sin(angle) * magnitude, cos(angle) * magnitude)`.
#[must_use]
pub fn pol2rec(magnitude: Q, angle: Q) -> (Q, Q) {
    let (s, c) = sin_cos(angle);
    (s.mul(magnitude), c.mul(magnitude))
}

/// Converts rectangular coordinates `(i, j)` to polar coordinates,
/// returned as `(hypot(i, j), atan2(i, j))`.
///
/// `(i, j)` is expected in the same `(sin`-like, `cos`-like`)` order
/// [`pol2rec`] returns, so that `rec2pol` is its exact inverse: `i` plays
/// the role of `atan2`'s `y` argument, `j` its `x` argument.
#[must_use]
pub fn rec2pol(i: Q, j: Q) -> (Q, Q) {
    (hypot(i, j), atan2(i, j))
}
