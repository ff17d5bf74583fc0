//! Shift-amount table for the linear CORDIC coordinate system.
//!
//! The linear system has no teacher analogue (the source crate only ever
//! needed circular and hyperbolic CORDIC); it is built directly from the
//! CORDIC identities `spec.md` §4.3 names: at iteration i, the rotation
//! angle surrogate is simply `2^-i`, `x` is left unchanged by a rotation
//! step, and the gain is exactly 1 for every iteration count (no
//! correction factor needed), which is what makes linear-mode CORDIC the
//! textbook vehicle for multiply/divide by shift-and-add.

/// `2^-i` for i = 0, 1, ..., 16, as Q16.16 bit patterns.
#[rustfmt::skip]
pub const THETA_TABLE: [i32; 17] = [
    0x0001_0000, // 2^-0
    0x0000_8000, // 2^-1
    0x0000_4000, // 2^-2
    0x0000_2000, // 2^-3
    0x0000_1000, // 2^-4
    0x0000_0800, // 2^-5
    0x0000_0400, // 2^-6
    0x0000_0200, // 2^-7
    0x0000_0100, // 2^-8
    0x0000_0080, // 2^-9
    0x0000_0040, // 2^-10
    0x0000_0020, // 2^-11
    0x0000_0010, // 2^-12
    0x0000_0008, // 2^-13
    0x0000_0004, // 2^-14
    0x0000_0002, // 2^-15
    0x0000_0001, // 2^-16
];
