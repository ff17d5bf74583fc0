//! Exponential and logarithmic functions.

use crate::bounded::{NormalizedLnArg, OpenUnitInterval};
use crate::error::{Error, Result};
use crate::ops::hyperbolic::{atanh_open, sinh_cosh};
use crate::q::Q;

/// Exponential function (`e^x`).
///
/// # Saturation Behavior
///
/// Saturates to [`Q::MAX`]/[`Q::ZERO`] for arguments outside the
/// representable range rather than erroring, per `spec.md` §4.4's
/// "exp by squaring" argument-reduction scheme: `exp(x) = 2^k * exp(r)`
/// with `r` reduced into `(-ln 2, ln 2)`.
#[must_use]
pub fn exp(x: Q) -> Q {
    if x == Q::ZERO {
        return Q::ONE;
    }

    let ln2 = Q::LN_2;
    let mut reduced = x;
    let mut scale: i32 = 0;

    let mut i = 0;
    while reduced > ln2 && i < 64 {
        reduced = reduced.sub(ln2);
        scale += 1;
        i += 1;
    }
    i = 0;
    while reduced < ln2.neg() && i < 64 {
        reduced = reduced.add(ln2);
        scale -= 1;
        i += 1;
    }

    // exp(r) = cosh(r) + sinh(r) for the reduced argument.
    let (sinh_r, cosh_r) = sinh_cosh(reduced);
    let exp_r = cosh_r.add(sinh_r);

    const MAX_SHIFT: i32 = 31;
    if scale >= 0 {
        if scale > MAX_SHIFT {
            Q::MAX
        } else {
            #[allow(clippy::cast_sign_loss, reason = "scale >= 0 checked above")]
            exp_r.arithmetic_shift_left(scale as u32)
        }
    } else {
        let neg_scale = -scale;
        if neg_scale > MAX_SHIFT {
            Q::ZERO
        } else {
            #[allow(clippy::cast_sign_loss, reason = "neg_scale > 0 by construction")]
            exp_r.arithmetic_shift_right(neg_scale as u32)
        }
    }
}

/// Natural logarithm. Domain: `x > 0`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x <= 0`.
#[must_use = "returns the natural logarithm result which should be handled"]
pub fn ln(x: Q) -> Result<Q> {
    if x <= Q::ZERO {
        return Err(Error::domain("ln", "positive value"));
    }
    if x == Q::ONE {
        return Ok(Q::ZERO);
    }

    // Reduce to [0.5, 2] by repeated halving/doubling: ln(x) = ln(x * 2^-k) + k*ln2.
    let ln2 = Q::LN_2;
    let mut normalized = x;
    let mut k_ln2 = Q::ZERO;

    let mut i = 0;
    while normalized > Q::TWO && i < 64 {
        normalized = normalized >> 1;
        k_ln2 = k_ln2.add(ln2);
        i += 1;
    }
    i = 0;
    while normalized < Q::HALF && i < 64 {
        normalized = normalized.add(normalized);
        k_ln2 = k_ln2.sub(ln2);
        i += 1;
    }

    // ln(x) = 2 * atanh((x-1)/(x+1)) for x in [0.5, 2].
    let norm = NormalizedLnArg::from_normalized(normalized);
    let arg = OpenUnitInterval::from_normalized_ln_arg(norm);
    let atanh_val = atanh_open(arg);
    let ln_normalized = atanh_val.add(atanh_val);

    Ok(ln_normalized.add(k_ln2))
}

/// Base-2 logarithm. Domain: `x > 0`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x <= 0`.
#[must_use = "returns the base-2 logarithm result which should be handled"]
pub fn log2(x: Q) -> Result<Q> {
    Ok(ln(x)?.div(Q::LN_2))
}

/// Base-10 logarithm. Domain: `x > 0`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `x <= 0`.
#[must_use = "returns the base-10 logarithm result which should be handled"]
pub fn log10(x: Q) -> Result<Q> {
    Ok(ln(x)?.div(Q::LN_10))
}

/// Power of 2 (`2^x`), computed as `exp(x * ln 2)`.
#[must_use]
pub fn pow2(x: Q) -> Q {
    exp(x.mul(Q::LN_2))
}
