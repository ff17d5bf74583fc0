//! Circular (trigonometric) functions, built on the unified circular CORDIC.
//!
//! # Range
//!
//! - `sin`, `cos`, `tan`, `cot`: accept any angle, with automatic
//!   reduction to `[-π, π]`.
//! - `asin`, `acos`: domain is `[-1, 1]`.
//! - `atan`: accepts any value.
//! - `atan2`: accepts any `(y, x)` pair, including `(0, 0)` (returns `0`).

use crate::bounded::NonNegative;
use crate::error::{Error, Result};
use crate::kernel::{circular_gain_inv, cordic, Coordinate, Mode, DEFAULT_ITERATIONS};
use crate::ops::algebraic::sqrt_nonneg;
use crate::q::Q;

/// Threshold below which `sqrt(1 - x^2)` is treated as zero in `asin`,
/// i.e. `x` close enough to ±1 that the identity's division would blow up.
const ASIN_NEAR_UNITY_THRESHOLD: Q = Q::from_bits(0x0000_0010);

/// Computes sine and cosine of `angle` (radians) simultaneously; this is
/// more efficient than calling [`sin`] and [`cos`] separately since a
/// single CORDIC pass produces both.
#[must_use]
pub fn sin_cos(angle: Q) -> (Q, Q) {
    let pi = Q::PI;
    let two_pi = pi.add(pi);
    let frac_pi_2 = Q::FRAC_PI_2;

    let mut reduced = angle;
    let mut iterations = 0u32;
    while reduced > pi && iterations < 64 {
        reduced = reduced.sub(two_pi);
        iterations += 1;
    }
    while reduced < pi.neg() && iterations < 64 {
        reduced = reduced.add(two_pi);
        iterations += 1;
    }

    let (reduced, negate) = if reduced > frac_pi_2 {
        (reduced.sub(pi), true)
    } else if reduced < frac_pi_2.neg() {
        (reduced.add(pi), true)
    } else {
        (reduced, false)
    };

    let mut x = circular_gain_inv();
    let mut y = Q::ZERO;
    let mut z = reduced;
    cordic(Coordinate::Circular, Mode::Rotation, DEFAULT_ITERATIONS, &mut x, &mut y, &mut z);

    if negate {
        (y.neg(), x.neg())
    } else {
        (y, x)
    }
}

/// Sine of `angle` (radians), in `[-1, 1]`.
#[inline]
#[must_use]
pub fn sin(angle: Q) -> Q {
    sin_cos(angle).0
}

/// Cosine of `angle` (radians), in `[-1, 1]`.
#[inline]
#[must_use]
pub fn cos(angle: Q) -> Q {
    sin_cos(angle).1
}

/// Tangent of `angle` (radians). May saturate for angles near `±π/2`,
/// where the true value diverges.
#[must_use]
pub fn tan(angle: Q) -> Q {
    let (s, c) = sin_cos(angle);
    s.div(c)
}

/// Cotangent of `angle` (radians). Domain: `sin(angle) != 0`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `angle` is a multiple of `π`.
#[must_use = "returns the cotangent result which should be handled"]
pub fn cot(angle: Q) -> Result<Q> {
    let (s, c) = sin_cos(angle);
    if s == Q::ZERO {
        return Err(Error::domain("cot", "angle not a multiple of pi"));
    }
    Ok(c.div(s))
}

/// Arcsine (inverse sine) of `x`. Domain: `[-1, 1]`. Result in `[-π/2, π/2]`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `|x| > 1`.
#[must_use = "returns the arcsine result which should be handled"]
pub fn asin(x: Q) -> Result<Q> {
    let Some(unit) = crate::bounded::UnitInterval::new(x) else {
        return Err(Error::domain("asin", "value in range [-1, 1]"));
    };

    if x == Q::ONE {
        return Ok(Q::FRAC_PI_2);
    }
    if x == Q::ONE.neg() {
        return Ok(Q::FRAC_PI_2.neg());
    }
    if x == Q::ZERO {
        return Ok(Q::ZERO);
    }

    // asin(x) = atan(x / sqrt(1 - x^2)).
    let sqrt_term = sqrt_nonneg(NonNegative::one_minus_square(unit));

    if sqrt_term < ASIN_NEAR_UNITY_THRESHOLD {
        return if x.is_positive() {
            Ok(Q::FRAC_PI_2)
        } else {
            Ok(Q::FRAC_PI_2.neg())
        };
    }

    Ok(atan(x.div(sqrt_term)))
}

/// Arccosine (inverse cosine) of `x`. Domain: `[-1, 1]`. Result in `[0, π]`.
///
/// # Errors
/// Returns [`Error::DomainError`] if `|x| > 1`.
#[must_use = "returns the arccosine result which should be handled"]
pub fn acos(x: Q) -> Result<Q> {
    asin(x).map(|a| Q::FRAC_PI_2.sub(a))
}

/// Arctangent (inverse tangent) of `x`. Result in `(-π/2, π/2)`.
#[must_use]
pub fn atan(x: Q) -> Q {
    if x == Q::ZERO {
        return Q::ZERO;
    }

    let one = Q::ONE;
    let abs_x = x.abs();

    if abs_x > one {
        // atan(x) = sign(x) * pi/2 - atan(1/x), keeping the argument convergent.
        let recip = one.div(x);
        let mut cx = one;
        let mut cy = recip;
        let mut cz = Q::ZERO;
        cordic(Coordinate::Circular, Mode::Vectoring, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
        if x.is_positive() {
            Q::FRAC_PI_2.sub(cz)
        } else {
            Q::FRAC_PI_2.neg().sub(cz)
        }
    } else {
        let mut cx = one;
        let mut cy = x;
        let mut cz = Q::ZERO;
        cordic(Coordinate::Circular, Mode::Vectoring, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
        cz
    }
}

/// `180 / π`, for [`rad2deg`]. Bits precomputed as `round(180/pi * 2^16)`.
const RAD_TO_DEG: Q = Q::from_bits(0x0039_4BB8);

/// Converts an angle in radians to degrees.
#[inline]
#[must_use]
pub fn rad2deg(radians: Q) -> Q {
    radians.mul(RAD_TO_DEG)
}

/// Converts an angle in degrees to radians.
#[inline]
#[must_use]
pub fn deg2rad(degrees: Q) -> Q {
    degrees.mul(Q::PI).div(Q::from_i32(180))
}

/// Four-quadrant arctangent of `y/x`: the angle between the positive
/// x-axis and the point `(x, y)`, in `[-π, π]`.
///
/// `atan2(0, 0)` returns `0` (mathematically undefined, but a defined
/// result is preferable to a trap for this non-`Result` API).
#[must_use]
pub fn atan2(y: Q, x: Q) -> Q {
    let pi = Q::PI;
    let frac_pi_2 = Q::FRAC_PI_2;

    if x == Q::ZERO {
        return if y.is_negative() {
            frac_pi_2.neg()
        } else if y == Q::ZERO {
            Q::ZERO
        } else {
            frac_pi_2
        };
    }
    if y == Q::ZERO {
        return if x.is_negative() { pi } else { Q::ZERO };
    }

    let mut cx = x.abs();
    let mut cy = y.abs();
    let mut cz = Q::ZERO;
    cordic(Coordinate::Circular, Mode::Vectoring, DEFAULT_ITERATIONS, &mut cx, &mut cy, &mut cz);
    let base_angle = cz;

    match (x.is_negative(), y.is_negative()) {
        (false, false) => base_angle,
        (false, true) => base_angle.neg(),
        (true, false) => pi.sub(base_angle),
        (true, true) => base_angle.sub(pi),
    }
}
