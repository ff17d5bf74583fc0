//! Arctangent lookup table for circular CORDIC mode.
//!
//! Contains `atan(2^-i)` for i = 0, 1, ..., 16 as Q16.16 bit patterns. A
//! 16-fractional-bit format never needs more than 17 entries: by i = 16,
//! `atan(2^-16) = 2^-16` to within one ULP, so the angle table has already
//! bottomed out at the representation's own resolution.
//!
//! # Mathematical background
//!
//! In circular CORDIC, we rotate a vector by successively smaller angles.
//! The angle at iteration i is `atan(2^-i)`, which lets the rotation be
//! performed using only shifts and additions.
//!
//! # Gain factor
//!
//! After n iterations, the vector magnitude is scaled by
//! `K = prod(i=0..n-1) sqrt(1 + 2^-2i) ≈ 1.6468`. We store the inverse
//! (1/K ≈ 0.6073) to pre-multiply into the initial vector instead.

/// Precomputed arctangent values: `atan(2^-i)` as Q16.16 bit patterns.
///
/// Index 0: atan(1) = π/4. Index 1: atan(0.5). ... Index 16: atan(2^-16).
#[rustfmt::skip]
pub const ATAN_TABLE: [i32; 17] = [
    0x0000_C910, // atan(2^-0)  = 0.7853981633974483
    0x0000_76B2, // atan(2^-1)  = 0.4636476090008061
    0x0000_3EB7, // atan(2^-2)  = 0.24497866312686414
    0x0000_1FD6, // atan(2^-3)  = 0.12435499454676144
    0x0000_0FFB, // atan(2^-4)  = 0.06241880999595735
    0x0000_07FF, // atan(2^-5)  = 0.031239833430268277
    0x0000_0400, // atan(2^-6)  = 0.015623728620476831
    0x0000_0200, // atan(2^-7)  = 0.007812341060101111
    0x0000_0100, // atan(2^-8)  = 0.0039062301319669718
    0x0000_0080, // atan(2^-9)  = 0.0019531225164788188
    0x0000_0040, // atan(2^-10) = 0.0009765621895593195
    0x0000_0020, // atan(2^-11) = 0.0004882812111948983
    0x0000_0010, // atan(2^-12) = 0.00024414062014936177
    0x0000_0008, // atan(2^-13) = 0.00012207031189367021
    0x0000_0004, // atan(2^-14) = 6.103515617420877e-05
    0x0000_0002, // atan(2^-15) = 3.0517578115526096e-05
    0x0000_0001, // atan(2^-16) = 1.5258789061315762e-05
];

/// The inverse CORDIC gain factor for circular mode (`1/K`).
///
/// `K = prod(i=0..inf) sqrt(1 + 2^-2i) ≈ 1.6467602581210656`,
/// `1/K ≈ 0.6072529350088812561694`. Stored as a Q16.16 bit pattern.
pub const CIRCULAR_GAIN_INV: i32 = 0x0000_9B74;
