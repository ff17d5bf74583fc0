//! Bounded value types that encode mathematical invariants at the type level.
//!
//! These types provide compile-time guarantees about value ranges, removing
//! the need for runtime checks in internal computations where the domain is
//! already established by construction.
//!
//! - [`NonNegative`]: values `>= 0` (sqrt inputs)
//! - [`UnitInterval`]: values in `[-1, 1]` (asin/acos inputs)
//! - [`OpenUnitInterval`]: values in `(-1, 1)` (atanh inputs)
//! - [`AtLeastOne`]: values `>= 1` (acosh inputs)
//! - [`NormalizedLnArg`]: values in `[0.5, 2]` (ln's reduced argument)
//!
//! Rather than `unsafe` or `expect`, these types encode the mathematical
//! relationship between operations directly:
//!
//! - `1 + x^2` is always `>= 1`, so [`NonNegative::one_plus_square`] is infallible.
//! - if `|x| <= 1` then `1 - x^2` is in `[0, 1]`, so [`NonNegative::one_minus_square`] is infallible.
//! - `x / sqrt(1 + x^2)` is always in `(-1, 1)`, so [`OpenUnitInterval::from_div_by_sqrt_one_plus_square`] is infallible.

use crate::q::Q;

/// A value guaranteed to be non-negative (`>= 0`).
#[derive(Clone, Copy, Debug)]
pub struct NonNegative(Q);

impl NonNegative {
    /// Creates a new `NonNegative` if `value >= 0`.
    #[inline]
    #[must_use]
    pub fn new(value: Q) -> Option<Self> {
        (value >= Q::ZERO).then_some(Self(value))
    }

    /// Constructs from `1 + x^2`, always `>= 1`.
    #[inline]
    #[must_use]
    pub fn one_plus_square(x: Q) -> Self {
        Self(Q::ONE.add(x.mul(x)))
    }

    /// Constructs from `1 - x^2` where `|x| <= 1`, always `>= 0`.
    #[inline]
    #[must_use]
    pub fn one_minus_square(x: UnitInterval) -> Self {
        Self(Q::ONE.sub(x.0.mul(x.0)))
    }

    /// Constructs from `x^2 - 1` where `|x| >= 1`, always `>= 0`.
    #[inline]
    #[must_use]
    pub fn square_minus_one(x: AtLeastOne) -> Self {
        Self(x.0.mul(x.0).sub(Q::ONE))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Q {
        self.0
    }
}

/// A value guaranteed to be in the closed interval `[-1, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct UnitInterval(Q);

impl UnitInterval {
    /// Creates a new `UnitInterval` if `value` is in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn new(value: Q) -> Option<Self> {
        (value >= Q::ONE.neg() && value <= Q::ONE).then_some(Self(value))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Q {
        self.0
    }
}

/// A value guaranteed to be in the open interval `(-1, 1)`.
#[derive(Clone, Copy, Debug)]
pub struct OpenUnitInterval(Q);

impl OpenUnitInterval {
    /// Creates a new `OpenUnitInterval` if `value` is in `(-1, 1)`.
    #[inline]
    #[must_use]
    pub fn new(value: Q) -> Option<Self> {
        (value > Q::ONE.neg() && value < Q::ONE).then_some(Self(value))
    }

    /// Constructs from `x / sqrt(1 + x^2)`, always in `(-1, 1)` since
    /// `sqrt(1 + x^2) > |x|` for any real `x`.
    #[inline]
    #[must_use]
    pub fn from_div_by_sqrt_one_plus_square(x: Q, sqrt_one_plus_x_sq: Q) -> Self {
        Self(x.div(sqrt_one_plus_x_sq))
    }

    /// Constructs from `sqrt(x^2 - 1) / x` where `|x| >= 1`, always in
    /// `(-1, 1)` since `sqrt(x^2 - 1) < |x|` for `|x| > 1`.
    #[inline]
    #[must_use]
    pub fn from_sqrt_square_minus_one_div(sqrt_x_sq_minus_one: Q, x: AtLeastOne) -> Self {
        Self(sqrt_x_sq_minus_one.div(x.0))
    }

    /// Constructs from `(x - 1) / (x + 1)` where `x` is in `[0.5, 2]`,
    /// always in `(-1/3, 1/3) ⊂ (-1, 1)`.
    #[inline]
    #[must_use]
    pub fn from_normalized_ln_arg(x: NormalizedLnArg) -> Self {
        let numerator = x.0.sub(Q::ONE);
        let denominator = x.0.add(Q::ONE);
        Self(numerator.div(denominator))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Q {
        self.0
    }
}

/// A value guaranteed to be `>= 1`. Used for `acosh`'s input.
#[derive(Clone, Copy, Debug)]
pub struct AtLeastOne(Q);

impl AtLeastOne {
    /// Creates a new `AtLeastOne` if `value >= 1`.
    #[inline]
    #[must_use]
    pub fn new(value: Q) -> Option<Self> {
        (value >= Q::ONE).then_some(Self(value))
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Q {
        self.0
    }
}

/// A value guaranteed to be in `[0.5, 2]`, produced by `ln`'s argument
/// reduction loop, guaranteeing `(x-1)/(x+1)` lands in `(-1/3, 1/3)`.
#[derive(Clone, Copy, Debug)]
pub struct NormalizedLnArg(Q);

impl NormalizedLnArg {
    /// Wraps a value already known (by the caller's loop invariant) to be
    /// in `[0.5, 2]`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_normalized(value: Q) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Q {
        self.0
    }
}
