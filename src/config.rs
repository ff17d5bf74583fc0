//! Process-wide configuration for arithmetic and text conversion.
//!
//! `spec.md` describes a mutable global holding the overflow policy, the
//! default print radix, and the number of decimal places to print. A
//! thread-unsafe global is hostile to reuse, so this module follows the
//! "configuration record" variant from the design notes: a small set of
//! atomics that every caller reads explicitly, with ergonomic wrappers
//! (`Q::add`, `Q::to_text`, ...) that consult them by default. Code that
//! wants a pure, reentrant call passes a [`Configuration`] value directly
//! (`Q::add_with`, `Q::to_text_with`, ...) instead of touching the global.

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

/// What to do when a 64-bit intermediate computation falls outside the
/// range representable by a [`crate::q::Q`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Clamp to the nearest representable extremum. The default.
    #[default]
    Saturate,
    /// Fold the result back into range by modular arithmetic.
    Wrap,
}

/// A snapshot of the process-wide configuration, passed explicitly to
/// arithmetic and text-conversion calls that want to be pure functions of
/// their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Overflow handling for arithmetic primitives.
    pub overflow_policy: OverflowPolicy,
    /// Radix used by default text conversions, in `2..=36`.
    pub radix: u32,
    /// Decimal places to print, or `None` to print until the fractional
    /// residue reaches zero.
    pub decimal_places: Option<u32>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            overflow_policy: OverflowPolicy::default(),
            radix: 10,
            decimal_places: Some(5),
        }
    }
}

static OVERFLOW_POLICY: AtomicU8 = AtomicU8::new(0); // 0 = saturate, 1 = wrap
static RADIX: AtomicU8 = AtomicU8::new(10);
// -1 encodes "until zero residue" (the `dp` sentinel from spec.md §4.2).
static DECIMAL_PLACES: AtomicI32 = AtomicI32::new(5);

/// Reads the current process-wide configuration.
#[must_use]
pub fn current() -> Configuration {
    let overflow_policy = if OVERFLOW_POLICY.load(Ordering::Relaxed) == 0 {
        OverflowPolicy::Saturate
    } else {
        OverflowPolicy::Wrap
    };
    let radix = u32::from(RADIX.load(Ordering::Relaxed));
    let places = DECIMAL_PLACES.load(Ordering::Relaxed);
    let decimal_places = if places < 0 {
        None
    } else {
        Some(places.unsigned_abs())
    };
    Configuration {
        overflow_policy,
        radix,
        decimal_places,
    }
}

/// Sets the process-wide overflow policy.
pub fn set_overflow_policy(policy: OverflowPolicy) {
    let value = match policy {
        OverflowPolicy::Saturate => 0,
        OverflowPolicy::Wrap => 1,
    };
    OVERFLOW_POLICY.store(value, Ordering::Relaxed);
}

/// Sets the process-wide default radix.
///
/// Values outside `2..=36` are clamped into range.
pub fn set_radix(radix: u32) {
    let clamped = radix.clamp(2, 36);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to 2..=36, fits in u8"
    )]
    RADIX.store(clamped as u8, Ordering::Relaxed);
}

/// Sets the process-wide default decimal places to print.
///
/// `None` means "print until the fractional residue reaches zero".
pub fn set_decimal_places(places: Option<u32>) {
    let value = places.map_or(-1, |p| {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "decimal place counts are always small"
        )]
        let v = p.min(i32::MAX.unsigned_abs()) as i32;
        v
    });
    DECIMAL_PLACES.store(value, Ordering::Relaxed);
}
