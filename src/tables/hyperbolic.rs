//! Hyperbolic arctangent lookup table for hyperbolic CORDIC mode.
//!
//! Contains `atanh(2^-i)` for i = 1, 2, ..., 17 as Q16.16 bit patterns.
//!
//! # Important notes
//!
//! - Hyperbolic CORDIC starts at i = 1, not i = 0, since `atanh(1)` is
//!   undefined.
//! - Certain iterations must be repeated for convergence, at indices
//!   following `k_{n+1} = 3*k_n + 1` (4, 13, 40, 121, 364, ...).

/// Precomputed hyperbolic arctangent values: `atanh(2^-i)` as Q16.16 bit
/// patterns. Index 0 holds `atanh(2^-1)`, index 1 holds `atanh(2^-2)`, etc.
///
/// `atanh(x) = 0.5 * ln((1+x)/(1-x))` for `|x| < 1`.
#[rustfmt::skip]
pub const ATANH_TABLE: [i32; 17] = [
    0x0000_8C9F, // atanh(2^-1)  = 0.5493061443340549
    0x0000_4163, // atanh(2^-2)  = 0.25541281188299536
    0x0000_202B, // atanh(2^-3)  = 0.12565721414045303
    0x0000_1005, // atanh(2^-4)  = 0.06258157147700301
    0x0000_0801, // atanh(2^-5)  = 0.031260178490666993
    0x0000_0400, // atanh(2^-6)  = 0.015626271752052209
    0x0000_0200, // atanh(2^-7)  = 0.0078126589515404
    0x0000_0100, // atanh(2^-8)  = 0.003906269868396826
    0x0000_0080, // atanh(2^-9)  = 0.001953127483532550
    0x0000_0040, // atanh(2^-10) = 0.0009765628104410357
    0x0000_0020, // atanh(2^-11) = 0.0004882812888051129
    0x0000_0010, // atanh(2^-12) = 0.00024414062985063858
    0x0000_0008, // atanh(2^-13) = 0.00012207031310632980
    0x0000_0004, // atanh(2^-14) = 6.103515632579122e-05
    0x0000_0002, // atanh(2^-15) = 3.051757813447391e-05
    0x0000_0001, // atanh(2^-16) = 1.525878906368424e-05
    0x0000_0001, // atanh(2^-17), rounds to the same ULP
];

/// Indices that must be repeated for hyperbolic CORDIC convergence.
///
/// Each subsequent index is `3 * previous + 1`.
pub const REPEAT_INDICES: [u32; 5] = [4, 13, 40, 121, 364];

/// Returns `true` if iteration `index` (1-based) should be performed
/// twice for hyperbolic CORDIC convergence.
#[inline]
#[must_use]
pub const fn needs_repeat(index: u32) -> bool {
    matches!(index, 4 | 13 | 40 | 121 | 364)
}

/// The CORDIC gain factor for hyperbolic mode (`K_h`), including the
/// effect of the repeated iterations.
///
/// `K_h ≈ 0.82815936096021562708`. Stored as a Q16.16 bit pattern.
pub const HYPERBOLIC_GAIN: i32 = 0x0000_D3C9;

/// The inverse CORDIC gain factor for hyperbolic mode (`1/K_h`).
///
/// `1/K_h ≈ 1.2074970677630722`. Stored as a Q16.16 bit pattern; unlike
/// the teacher's I1F63 tables this needs no wider format since Q16.16's
/// integer range comfortably covers a value just above 1.
pub const HYPERBOLIC_GAIN_INV: i32 = 0x0001_3520;

/// `atanh(0.5)`, precomputed for hyperbolic argument reduction:
/// `atanh(x) = atanh(0.5) + atanh((x - 0.5) / (1 - 0.5*x))`.
///
/// Equal to `ATANH_TABLE[0]`, named separately for readability at call sites.
pub const ATANH_HALF: i32 = 0x0000_8C9F;
