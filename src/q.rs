//! The Q16.16 fixed-point value type and its arithmetic primitives.
//!
//! A [`Q`] is a 32-bit signed two's-complement integer interpreted as
//! `value * 2^-16` (one sign bit, fifteen bits of integer magnitude,
//! sixteen bits of fraction). Every binary operation widens both operands
//! to a 64-bit signed intermediate, computes the mathematical result
//! there, and then applies the configured [`OverflowPolicy`].

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use fixed::types::I16F16;

use crate::config::{self, OverflowPolicy};

const UNIT: i64 = 1 << 16;
const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

/// A Q16.16 fixed-point value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(i32);

impl core::fmt::Debug for Q {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Q(0x{:08X})", self.0 as u32)
    }
}

impl core::fmt::Display for Q {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cfg = config::current();
        crate::text::write_q(f, *self, cfg.radix, cfg.decimal_places)
    }
}

/// Clamps or folds a 64-bit intermediate into `i32` range per `policy`.
#[must_use]
const fn apply_policy(v: i64, policy: OverflowPolicy) -> i32 {
    match policy {
        OverflowPolicy::Saturate => {
            if v > I32_MAX {
                i32::MAX
            } else if v < I32_MIN {
                i32::MIN
            } else {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "bounded to i32 range by the preceding checks"
                )]
                {
                    v as i32
                }
            }
        }
        OverflowPolicy::Wrap => {
            let wrapped = if v > I32_MAX {
                I32_MIN + v.rem_euclid(I32_MAX)
            } else if v < I32_MIN {
                let mag = if v < 0 { -v } else { v };
                I32_MAX - mag.rem_euclid(I32_MAX)
            } else {
                v
            };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "wrapped value is constructed to fit i32 range"
            )]
            {
                wrapped as i32
            }
        }
    }
}

/// Floor division for the signed integers, regardless of either sign.
#[must_use]
const fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

impl Q {
    /// The additive identity.
    pub const ZERO: Self = Self(0);
    /// The multiplicative identity.
    pub const ONE: Self = Self(1 << 16);
    /// The value two.
    pub const TWO: Self = Self(2 << 16);
    /// The value one-half.
    pub const HALF: Self = Self(1 << 15);
    /// The smallest representable positive step (one ULP).
    pub const EPSILON: Self = Self(1);
    /// The most-positive representable value.
    pub const MAX: Self = Self(i32::MAX);
    /// The most-negative representable value.
    pub const MIN: Self = Self(i32::MIN);
    /// Number of fractional bits (16).
    pub const FRAC_BITS: u32 = 16;
    /// Number of whole (magnitude) bits, excluding the sign bit (15).
    pub const INT_BITS: u32 = 15;

    /// The mathematical constant π.
    pub const PI: Self = Self(I16F16::PI.to_bits());
    /// π/2.
    pub const FRAC_PI_2: Self = Self(I16F16::FRAC_PI_2.to_bits());
    /// π/4.
    pub const FRAC_PI_4: Self = Self(I16F16::FRAC_PI_4.to_bits());
    /// Euler's number e.
    pub const E: Self = Self(I16F16::E.to_bits());
    /// Natural log of 2.
    pub const LN_2: Self = Self(I16F16::LN_2.to_bits());
    /// Natural log of 10.
    pub const LN_10: Self = Self(I16F16::LN_10.to_bits());
    /// √2.
    pub const SQRT_2: Self = Self(I16F16::SQRT_2.to_bits());
    /// √3 (`fixed` has no built-in constant for this; bits precomputed as
    /// `round(sqrt(3) * 2^16)`).
    pub const SQRT_3: Self = Self::from_bits(0x0001_BB68);

    /// Wraps a raw Q16.16 bit pattern.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the raw Q16.16 bit pattern.
    #[must_use]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    // -- text / display ---------------------------------------------------

    /// Parses `text` as a Q value using the process-wide default radix and
    /// decimal-place limit.
    ///
    /// # Errors
    /// See [`crate::text::parse`].
    pub fn parse(text: &str) -> crate::error::ParseResult<Self> {
        let cfg = config::current();
        crate::text::parse(text, cfg.radix)
    }

    /// Binds `self` to an explicit radix and decimal-place count for
    /// `write!`/`format!`, without touching the process-wide configuration.
    #[must_use]
    pub const fn to_text_with(self, radix: u32, decimal_places: Option<u32>) -> crate::text::Formatted {
        crate::text::Formatted {
            value: self,
            radix,
            decimal_places,
        }
    }

    // -- conversions from/to machine integers ------------------------------

    /// Converts from a signed 8-bit integer.
    #[must_use]
    pub fn from_i8(n: i8) -> Self {
        Self::from_i64(i64::from(n))
    }

    /// Converts from a signed 16-bit integer.
    #[must_use]
    pub fn from_i16(n: i16) -> Self {
        Self::from_i64(i64::from(n))
    }

    /// Converts from a signed 32-bit integer.
    #[must_use]
    pub fn from_i32(n: i32) -> Self {
        Self::from_i64(i64::from(n))
    }

    /// Converts from a signed 64-bit integer, saturating on overflow per
    /// the current configuration.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::from_i64_with(n, config::current().overflow_policy)
    }

    /// Converts from a signed 64-bit integer with an explicit overflow policy.
    #[must_use]
    pub const fn from_i64_with(n: i64, policy: OverflowPolicy) -> Self {
        const LIMIT: i64 = 1 << 47;
        if n > LIMIT {
            return Self(apply_policy(i64::MAX, policy));
        }
        if n < -LIMIT {
            return Self(apply_policy(i64::MIN, policy));
        }
        Self(apply_policy(n << 16, policy))
    }

    /// Truncates to a signed 8-bit integer, saturating if out of range.
    #[must_use]
    pub fn to_i8(self) -> i8 {
        self.to_i64().clamp(i64::from(i8::MIN), i64::from(i8::MAX)) as i8
    }

    /// Truncates to a signed 16-bit integer, saturating if out of range.
    #[must_use]
    pub fn to_i16(self) -> i16 {
        self.to_i64().clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16
    }

    /// Truncates to a signed 32-bit integer, saturating if out of range.
    #[must_use]
    pub fn to_i32(self) -> i32 {
        self.to_i64().clamp(I32_MIN, I32_MAX) as i32
    }

    /// Truncates to a signed 64-bit integer (the integer part, toward zero).
    #[must_use]
    pub const fn to_i64(self) -> i64 {
        i64::from(self.0) / UNIT
    }

    // -- packing ------------------------------------------------------------

    /// Serializes to four little-endian bytes.
    #[must_use]
    pub const fn pack(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Deserializes from a little-endian byte buffer.
    ///
    /// Returns `None` if `buf` is shorter than four bytes.
    #[must_use]
    pub fn unpack(buf: &[u8]) -> Option<Self> {
        let bytes: [u8; 4] = buf.get(..4)?.try_into().ok()?;
        Some(Self(i32::from_le_bytes(bytes)))
    }

    // -- arithmetic (explicit policy) ---------------------------------------

    /// Addition under an explicit overflow policy.
    #[must_use]
    pub const fn add_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        Self(apply_policy(i64::from(self.0) + i64::from(rhs.0), policy))
    }

    /// Subtraction under an explicit overflow policy.
    #[must_use]
    pub const fn sub_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        Self(apply_policy(i64::from(self.0) - i64::from(rhs.0), policy))
    }

    /// Negation under an explicit overflow policy (relevant only for
    /// [`Q::MIN`], whose negation does not fit in range).
    #[must_use]
    pub const fn neg_with(self, policy: OverflowPolicy) -> Self {
        Self(apply_policy(-i64::from(self.0), policy))
    }

    /// Multiplication: `(a*b + 2^15) >> 16`, under an explicit overflow policy.
    #[must_use]
    pub const fn mul_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        let product = i64::from(self.0) * i64::from(rhs.0) + (1 << 15);
        Self(apply_policy(product >> 16, policy))
    }

    /// Fused multiply-add: `(a*b + 2^15) >> 16 + c`, with a single
    /// saturation applied to the whole expression.
    #[must_use]
    pub const fn fma_with(self, rhs: Self, add: Self, policy: OverflowPolicy) -> Self {
        let product = (i64::from(self.0) * i64::from(rhs.0) + (1 << 15)) >> 16;
        Self(apply_policy(product + i64::from(add.0), policy))
    }

    /// Division, rounding half away from zero in the direction of the
    /// quotient's sign.
    ///
    /// Divide-by-zero is a debug-build precondition violation; in release
    /// builds it returns [`Q::MAX`]/[`Q::MIN`]/[`Q::ZERO`] by the sign of
    /// the dividend, per `spec.md` §7.
    #[must_use]
    pub fn div_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        debug_assert!(rhs.0 != 0, "div: divisor must be non-zero");
        if rhs.0 == 0 {
            return match self.0.cmp(&0) {
                Ordering::Less => Self::MIN,
                Ordering::Equal => Self::ZERO,
                Ordering::Greater => Self::MAX,
            };
        }
        let numerator = i64::from(self.0) << 16;
        let denominator = i64::from(rhs.0);
        let quotient_negative = (self.0 < 0) != (rhs.0 < 0);
        let half_denominator = denominator.abs() / 2;
        let biased = if quotient_negative {
            numerator - half_denominator
        } else {
            numerator + half_denominator
        };
        Self(apply_policy(biased / denominator, policy))
    }

    /// Remainder: `a - trunc(a/b) * b`, carrying the sign of the dividend.
    ///
    /// Divide-by-zero is a debug-build precondition violation; release
    /// builds return [`Q::ZERO`].
    #[must_use]
    pub const fn rem_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        debug_assert!(rhs.0 != 0, "rem: divisor must be non-zero");
        if rhs.0 == 0 {
            return Self::ZERO;
        }
        let a = i64::from(self.0);
        let b = i64::from(rhs.0);
        let trunc_quotient = a / b;
        Self(apply_policy(a - trunc_quotient * b, policy))
    }

    /// Modulo: `a - floor(a/b) * b`, carrying the sign of the divisor.
    ///
    /// Divide-by-zero is a debug-build precondition violation; release
    /// builds return [`Q::ZERO`].
    #[must_use]
    pub const fn modulo_with(self, rhs: Self, policy: OverflowPolicy) -> Self {
        debug_assert!(rhs.0 != 0, "mod: divisor must be non-zero");
        if rhs.0 == 0 {
            return Self::ZERO;
        }
        let a = i64::from(self.0);
        let b = i64::from(rhs.0);
        let floor_quotient = floor_div(a, b);
        Self(apply_policy(a - floor_quotient * b, policy))
    }

    /// Absolute value.
    #[must_use]
    pub const fn abs_with(self, policy: OverflowPolicy) -> Self {
        if self.0 < 0 {
            Self(apply_policy(-i64::from(self.0), policy))
        } else {
            self
        }
    }

    /// `self` with the magnitude of `self` and the sign of `sign_source`.
    #[must_use]
    pub const fn copysign_with(self, sign_source: Self, policy: OverflowPolicy) -> Self {
        let magnitude = self.abs_with(policy);
        if sign_source.0 < 0 {
            magnitude.neg_with(policy)
        } else {
            magnitude
        }
    }

    // -- ergonomic wrappers using the process-wide configuration -----------

    /// Addition using the process-wide overflow policy.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        self.add_with(rhs, config::current().overflow_policy)
    }

    /// Subtraction using the process-wide overflow policy.
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        self.sub_with(rhs, config::current().overflow_policy)
    }

    /// Multiplication using the process-wide overflow policy.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        self.mul_with(rhs, config::current().overflow_policy)
    }

    /// Fused multiply-add using the process-wide overflow policy.
    #[must_use]
    pub fn fma(self, rhs: Self, add: Self) -> Self {
        self.fma_with(rhs, add, config::current().overflow_policy)
    }

    /// Division using the process-wide overflow policy.
    #[must_use]
    pub fn div(self, rhs: Self) -> Self {
        self.div_with(rhs, config::current().overflow_policy)
    }

    /// Remainder using the process-wide overflow policy.
    #[must_use]
    pub fn rem(self, rhs: Self) -> Self {
        self.rem_with(rhs, config::current().overflow_policy)
    }

    /// Modulo using the process-wide overflow policy.
    #[must_use]
    pub fn modulo(self, rhs: Self) -> Self {
        self.modulo_with(rhs, config::current().overflow_policy)
    }

    /// Absolute value using the process-wide overflow policy.
    #[must_use]
    pub fn abs(self) -> Self {
        self.abs_with(config::current().overflow_policy)
    }

    /// Negation using the process-wide overflow policy.
    #[must_use]
    pub fn neg(self) -> Self {
        self.neg_with(config::current().overflow_policy)
    }

    /// `self` with the magnitude of `self`, sign of `sign_source`.
    #[must_use]
    pub fn copysign(self, sign_source: Self) -> Self {
        self.copysign_with(sign_source, config::current().overflow_policy)
    }

    /// The smaller of two values.
    #[must_use]
    pub const fn min(self, rhs: Self) -> Self {
        if self.0 <= rhs.0 {
            self
        } else {
            rhs
        }
    }

    /// The larger of two values.
    #[must_use]
    pub const fn max(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            self
        } else {
            rhs
        }
    }

    /// `-1`, `0`, or `1` according to the sign of `self`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        if self.0 < 0 {
            -1
        } else if self.0 > 0 {
            1
        } else {
            0
        }
    }

    /// `-1`, `0`, or `1` (as a `Q`) according to the sign of `self`.
    #[must_use]
    pub const fn signum(self) -> Self {
        match self.sign() {
            -1 => Self(-(1 << 16)),
            1 => Self(1 << 16),
            _ => Self::ZERO,
        }
    }

    // -- rounding family -----------------------------------------------------

    /// Largest integer-valued `Q` less than or equal to `self`.
    #[must_use]
    pub const fn floor(self) -> Self {
        let bits = i64::from(self.0);
        let whole = floor_div(bits, UNIT);
        Self(apply_policy(whole * UNIT, OverflowPolicy::Saturate))
    }

    /// Smallest integer-valued `Q` greater than or equal to `self`.
    #[must_use]
    pub const fn ceil(self) -> Self {
        let bits = i64::from(self.0);
        let whole = -floor_div(-bits, UNIT);
        Self(apply_policy(whole * UNIT, OverflowPolicy::Saturate))
    }

    /// Integer part of `self`, truncated toward zero.
    #[must_use]
    pub const fn trunc(self) -> Self {
        let bits = i64::from(self.0);
        let whole = bits / UNIT;
        Self(apply_policy(whole * UNIT, OverflowPolicy::Saturate))
    }

    /// Rounds to the nearest integer-valued `Q`, ties away from zero.
    #[must_use]
    pub const fn round(self) -> Self {
        let bits = i64::from(self.0);
        let half = UNIT / 2;
        let biased = if bits >= 0 { bits + half } else { bits - half };
        let whole = biased / UNIT;
        Self(apply_policy(whole * UNIT, OverflowPolicy::Saturate))
    }

    // -- bitwise --------------------------------------------------------------

    /// Bitwise AND of the underlying integer representation.
    #[must_use]
    pub const fn bit_and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// Bitwise OR of the underlying integer representation.
    #[must_use]
    pub const fn bit_or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Bitwise XOR of the underlying integer representation.
    #[must_use]
    pub const fn bit_xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Bitwise NOT of the underlying integer representation.
    #[must_use]
    pub const fn bit_not(self) -> Self {
        Self(!self.0)
    }

    /// Arithmetic (sign-preserving) right shift of the underlying bits.
    #[must_use]
    pub const fn arithmetic_shift_right(self, n: u32) -> Self {
        Self(self.0 >> n.min(31))
    }

    /// Logical (zero-filling) right shift of the underlying bits.
    #[must_use]
    pub const fn logical_shift_right(self, n: u32) -> Self {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "round-trips through the same bit width"
        )]
        {
            Self((((self.0 as u32)) >> n.min(31)) as i32)
        }
    }

    /// Logical (zero-filling) left shift of the underlying bits, without
    /// applying an overflow policy (raw bit manipulation).
    #[must_use]
    pub const fn logical_shift_left(self, n: u32) -> Self {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "round-trips through the same bit width"
        )]
        {
            Self((((self.0 as u32)) << n.min(31)) as i32)
        }
    }

    /// Left shift by `n`, multiplying by `2^n` and applying the given
    /// overflow policy.
    #[must_use]
    pub const fn arithmetic_shift_left_with(self, n: u32, policy: OverflowPolicy) -> Self {
        let shift = if n > 62 { 62 } else { n };
        Self(apply_policy(i64::from(self.0) << shift, policy))
    }

    /// Left shift by `n` using the process-wide overflow policy.
    #[must_use]
    pub fn arithmetic_shift_left(self, n: u32) -> Self {
        self.arithmetic_shift_left_with(n, config::current().overflow_policy)
    }

    // -- predicates -----------------------------------------------------------

    /// `true` if `self < 0`.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `true` if `self > 0`.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `true` if `self` has no fractional part.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        (self.0 & 0xFFFF) == 0
    }

    /// `true` if `self`'s truncated integer part is odd.
    #[must_use]
    pub const fn is_odd(self) -> bool {
        (self.trunc().0 / (UNIT as i32)) % 2 != 0
    }

    /// `true` if `self`'s truncated integer part is even.
    #[must_use]
    pub const fn is_even(self) -> bool {
        !self.is_odd()
    }

    /// `true` if `|self - other|` is within `epsilon`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: Self) -> bool {
        self.sub_with(other, OverflowPolicy::Saturate)
            .abs_with(OverflowPolicy::Saturate)
            .0
            <= epsilon.0
    }

    /// `true` if `self` is within the closed interval `[low, high]`
    /// (bounds given in either order).
    #[must_use]
    pub const fn within(self, bound_a: Self, bound_b: Self) -> bool {
        let (low, high) = if bound_a.0 <= bound_b.0 {
            (bound_a.0, bound_b.0)
        } else {
            (bound_b.0, bound_a.0)
        };
        self.0 >= low && self.0 <= high
    }
}

impl Add for Q {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Q::add(self, rhs)
    }
}

impl Sub for Q {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Q::sub(self, rhs)
    }
}

impl Mul for Q {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Q::mul(self, rhs)
    }
}

impl Div for Q {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Q::div(self, rhs)
    }
}

impl Rem for Q {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Q::rem(self, rhs)
    }
}

impl Neg for Q {
    type Output = Self;
    fn neg(self) -> Self {
        Q::neg(self)
    }
}

impl core::ops::Shr<u32> for Q {
    type Output = Self;
    fn shr(self, rhs: u32) -> Self {
        self.arithmetic_shift_right(rhs)
    }
}

impl core::ops::Shl<u32> for Q {
    type Output = Self;
    fn shl(self, rhs: u32) -> Self {
        self.arithmetic_shift_left(rhs)
    }
}
