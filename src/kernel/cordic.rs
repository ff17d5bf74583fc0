//! The unified CORDIC (Coordinate Rotation Digital Computer) engine.
//!
//! A single iteration performs a micro-rotation:
//!
//! ```text
//! x' = x - σ·d·(y >> i)
//! y' = y + σ·(x >> i)
//! z' = z - σ·angle[i]
//! ```
//!
//! where `σ = ±1` is the rotation direction, `d` selects the coordinate
//! system's curvature (`+1` circular, `-1` hyperbolic, `0` linear, which
//! leaves `x` unchanged), and `angle[i]` comes from the table matching
//! `d` (`atan(2^-i)`, `atanh(2^-i)`, or `2^-i`).
//!
//! | Mode | Rotation (z → 0) | Vectoring (y → 0) |
//! |------|-------------------|--------------------|
//! | Circular | sin, cos | atan |
//! | Linear | multiply | divide |
//! | Hyperbolic | sinh, cosh | atanh, ln |
//!
//! Hyperbolic mode repeats iterations 4, 13, 40, 121, 364 for convergence
//! (see [`crate::tables::needs_repeat`]); this is modeled as an explicit
//! loop with an `i`/`repeated` pair of loop variables rather than the
//! `goto`-based repeat the original C used.
//!
//! Callers should go through [`crate::ops`] rather than this engine directly.

use crate::q::Q;
use crate::tables::{needs_repeat, ATAN_TABLE, ATANH_TABLE, CIRCULAR_GAIN_INV, HYPERBOLIC_GAIN, HYPERBOLIC_GAIN_INV, THETA_TABLE};

/// Selects the CORDIC angle table and curvature term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    /// `atan(2^-i)` table, curvature `+1`. Derives sin/cos/atan/sincos.
    Circular,
    /// `2^-i` table, curvature `0` (`x` unchanged). Derives multiply/divide.
    Linear,
    /// `atanh(2^-i)` table, curvature `-1`, with repeated iterations.
    /// Derives sinh/cosh/atanh/ln.
    Hyperbolic,
}

/// Selects which coordinate the iteration drives toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Drives `z` toward zero: rotates `(x, y)` by the angle `z`.
    Rotation,
    /// Drives `y` toward zero: accumulates the traversed angle into `z`.
    Vectoring,
}

const MAX_TABLE_INDEX: u32 = 16;

/// Default iteration count: one per fractional bit plus the i = 0 term,
/// matching the 17-entry tables in [`crate::tables`].
pub const DEFAULT_ITERATIONS: i32 = 17;

#[inline]
const fn table_lookup(table: &[i32; 17], index: u32) -> i32 {
    #[allow(
        clippy::indexing_slicing,
        reason = "index is clamped to the table length immediately before use"
    )]
    {
        table[index.min(MAX_TABLE_INDEX) as usize]
    }
}

#[inline]
const fn sigma(mode: Mode, y: Q, z: Q) -> i64 {
    match mode {
        Mode::Rotation => {
            if z.to_bits() >= 0 {
                1
            } else {
                -1
            }
        }
        Mode::Vectoring => {
            if y.to_bits() < 0 {
                1
            } else {
                -1
            }
        }
    }
}

#[inline]
fn micro_rotate(coord: Coordinate, s: i64, i: u32, angle: Q, x: &mut Q, y: &mut Q, z: &mut Q) {
    let d: i64 = match coord {
        Coordinate::Circular => 1,
        Coordinate::Hyperbolic => -1,
        Coordinate::Linear => 0,
    };
    let x_shifted = x.arithmetic_shift_right(i);
    let y_shifted = y.arithmetic_shift_right(i);

    let new_x = match s * d {
        0 => *x,
        sign if sign > 0 => x.sub(y_shifted),
        _ => x.add(y_shifted),
    };
    let new_y = if s > 0 { y.add(x_shifted) } else { y.sub(x_shifted) };
    let new_z = if s > 0 { z.sub(angle) } else { z.add(angle) };

    *x = new_x;
    *y = new_y;
    *z = new_z;
}

/// Runs the CORDIC engine for `coord`/`mode` on `(x, y, z)` for up to
/// `iterations` steps (negative values behave as zero), and reports how
/// many micro-rotations were actually performed.
///
/// For circular and linear coordinates this equals
/// `min(iterations, 17)`. For hyperbolic coordinates it equals the same
/// bound, but repeated convergence iterations (indices 4, 13, 40, 121,
/// 364) count twice against it, same as the teacher's loop.
pub fn cordic(coord: Coordinate, mode: Mode, iterations: i32, x: &mut Q, y: &mut Q, z: &mut Q) -> u32 {
    let requested = iterations.max(0).unsigned_abs();

    match coord {
        Coordinate::Hyperbolic => {
            let mut i: u32 = 1;
            let mut executed: u32 = 0;
            let mut repeated = false;

            while executed < requested && i <= 64 {
                let table_index = i.saturating_sub(1);
                let angle = Q::from_bits(table_lookup(&ATANH_TABLE, table_index));
                let s = sigma(mode, *y, *z);
                micro_rotate(coord, s, i, angle, x, y, z);
                executed += 1;

                if needs_repeat(i) && !repeated {
                    repeated = true;
                } else {
                    repeated = false;
                    i += 1;
                }
            }
            executed
        }
        Coordinate::Circular | Coordinate::Linear => {
            let limit = requested.min(MAX_TABLE_INDEX + 1);
            for i in 0..limit {
                let angle_bits = match coord {
                    Coordinate::Circular => table_lookup(&ATAN_TABLE, i),
                    Coordinate::Linear => table_lookup(&THETA_TABLE, i),
                    Coordinate::Hyperbolic => unreachable!("handled in the outer match"),
                };
                let angle = Q::from_bits(angle_bits);
                let s = sigma(mode, *y, *z);
                micro_rotate(coord, s, i, angle, x, y, z);
            }
            limit
        }
    }
}

/// The inverse circular CORDIC gain (`1/K ≈ 0.6073`).
#[inline]
#[must_use]
pub const fn circular_gain_inv() -> Q {
    Q::from_bits(CIRCULAR_GAIN_INV)
}

/// The hyperbolic CORDIC gain (`K_h ≈ 0.8282`).
#[inline]
#[must_use]
pub const fn hyperbolic_gain() -> Q {
    Q::from_bits(HYPERBOLIC_GAIN)
}

/// The inverse hyperbolic CORDIC gain (`1/K_h ≈ 1.2075`).
#[inline]
#[must_use]
pub const fn hyperbolic_gain_inv() -> Q {
    Q::from_bits(HYPERBOLIC_GAIN_INV)
}
