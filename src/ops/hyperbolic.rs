//! Hyperbolic functions via hyperbolic CORDIC.

use crate::bounded::{AtLeastOne, NonNegative, OpenUnitInterval};
use crate::error::{Error, Result};
use crate::kernel::{cordic, hyperbolic_gain_inv, Coordinate, Mode, DEFAULT_ITERATIONS};
use crate::ops::algebraic::sqrt_nonneg;
use crate::q::Q;

/// Hyperbolic CORDIC converges for `|x|` less than the sum of the atanh
/// table, `≈ 1.1182`.
const HYPERBOLIC_CONVERGENCE_LIMIT: Q = Q::from_bits(0x0001_1E42);

/// atanh argument-reduction threshold: `tanh(1.0) ≈ 0.762`; 0.75 keeps the
/// reduced argument inside CORDIC's convergence domain with margin.
const ATANH_REDUCTION_THRESHOLD: Q = Q::from_bits(0x0000_C000);

/// Hyperbolic sine and cosine. More efficient than separate calls since a
/// single CORDIC pass produces both.
#[must_use]
pub fn sinh_cosh(x: Q) -> (Q, Q) {
    if x.abs() > HYPERBOLIC_CONVERGENCE_LIMIT {
        // sinh(2a) = 2*sinh(a)*cosh(a); cosh(2a) = cosh(a)^2 + sinh(a)^2.
        let half_x = x >> 1;
        let (sh, ch) = sinh_cosh(half_x);
        let sinh_result = sh.mul(ch).mul(Q::TWO);
        let cosh_result = ch.mul(ch).add(sh.mul(sh));
        return (sinh_result, cosh_result);
    }

    let inv_gain = hyperbolic_gain_inv();
    let mut cx = inv_gain;
    let mut cy = Q::ZERO;
    let mut cz = x;
    cordic(Coordinate::Hyperbolic, Mode::Rotation, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
    (cy, cx)
}

/// Hyperbolic sine.
#[inline]
#[must_use]
pub fn sinh(x: Q) -> Q {
    sinh_cosh(x).0
}

/// Hyperbolic cosine. Always `>= 1`.
#[inline]
#[must_use]
pub fn cosh(x: Q) -> Q {
    sinh_cosh(x).1
}

/// Hyperbolic tangent. Result in `(-1, 1)`.
#[must_use]
pub fn tanh(x: Q) -> Q {
    let (s, c) = sinh_cosh(x);
    s.div(c)
}

/// Hyperbolic cotangent. Domain: `x != 0`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x = 0`.
#[must_use = "returns the hyperbolic cotangent result which should be handled"]
pub fn coth(x: Q) -> Result<Q> {
    if x == Q::ZERO {
        return Err(Error::domain("coth", "non-zero value"));
    }
    let (s, c) = sinh_cosh(x);
    Ok(c.div(s))
}

/// Inverse hyperbolic sine. Accepts any value.
#[must_use]
pub fn asinh(x: Q) -> Q {
    if x == Q::ZERO {
        return Q::ZERO;
    }

    // asinh(x) = atanh(x / sqrt(1 + x^2)); sqrt(1 + x^2) is always >= 1.
    let sqrt_term = sqrt_nonneg(NonNegative::one_plus_square(x));
    let arg = OpenUnitInterval::from_div_by_sqrt_one_plus_square(x, sqrt_term);
    atanh_open(arg)
}

/// Inverse hyperbolic cosine. Domain: `x >= 1`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x < 1`.
#[must_use = "returns the inverse hyperbolic cosine result which should be handled"]
pub fn acosh(x: Q) -> Result<Q> {
    let at_least_one = AtLeastOne::new(x).ok_or_else(|| Error::domain("acosh", "value >= 1"))?;

    if x == Q::ONE {
        return Ok(Q::ZERO);
    }

    // acosh(x) = atanh(sqrt(x^2 - 1) / x) for x > 1.
    let sqrt_term = sqrt_nonneg(NonNegative::square_minus_one(at_least_one));
    let arg = OpenUnitInterval::from_sqrt_square_minus_one_div(sqrt_term, at_least_one);
    Ok(atanh_open(arg))
}

/// Inverse hyperbolic tangent. Domain: `(-1, 1)`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `|x| >= 1`.
#[must_use = "returns the inverse hyperbolic tangent result which should be handled"]
pub fn atanh(x: Q) -> Result<Q> {
    OpenUnitInterval::new(x)
        .map(atanh_open)
        .ok_or_else(|| Error::domain("atanh", "value in range (-1, 1)"))
}

/// Infallible inverse hyperbolic tangent for values already known to be
/// in `(-1, 1)`.
#[must_use]
pub fn atanh_open(x: OpenUnitInterval) -> Q {
    atanh_core(x.get())
}

/// Core atanh implementation. Caller must ensure `|x| < 1`.
fn atanh_core(x: Q) -> Q {
    if x == Q::ZERO {
        return Q::ZERO;
    }

    if x.abs() <= ATANH_REDUCTION_THRESHOLD {
        let mut cx = Q::ONE;
        let mut cy = x;
        let mut cz = Q::ZERO;
        cordic(Coordinate::Hyperbolic, Mode::Vectoring, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
        return cz;
    }

    // atanh(x) = atanh(0.5) + atanh((|x| - 0.5) / (1 - 0.5*|x|)), sign-corrected.
    let half = Q::HALF;
    let atanh_half = Q::from_bits(crate::tables::hyperbolic::ATANH_HALF);
    let sign = if x.is_negative() { Q::ONE.neg() } else { Q::ONE };
    let abs_x = x.abs();

    let numerator = abs_x.sub(half);
    let denominator = Q::ONE.sub(half.mul(abs_x));
    let reduced = numerator.div(denominator);

    let atanh_reduced = atanh_core(reduced);
    sign.mul(atanh_half.add(atanh_reduced))
}

/// Inverse hyperbolic cotangent. Domain: `|x| > 1`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `|x| <= 1`.
#[must_use = "returns the inverse hyperbolic cotangent result which should be handled"]
pub fn acoth(x: Q) -> Result<Q> {
    if x.abs() <= Q::ONE {
        return Err(Error::domain("acoth", "|value| > 1"));
    }
    // acoth(x) = atanh(1/x).
    let recip = Q::ONE.div(x);
    Ok(atanh_core(recip))
}
