//! The unified CORDIC (Coordinate Rotation Digital Computer) engine.
//!
//! # Algorithm
//!
//! Iteratively rotates `(x, y, z)` using only shifts and adds:
//!
//! ```text
//! x' = x - σ·d·y·2^(-i)
//! y' = y + σ·x·2^(-i)
//! z' = z - σ·angle[i]
//! ```
//!
//! `d` selects the coordinate system's curvature (circular/linear/
//! hyperbolic); **rotation mode** (z → 0) computes trigonometric values
//! from an angle, **vectoring mode** (y → 0) computes the angle and
//! magnitude from coordinates.
//!
//! | Coordinate | Rotation (z → 0) | Vectoring (y → 0) |
//! |------------|-------------------|--------------------|
//! | Circular | sin, cos | atan |
//! | Linear | multiply | divide |
//! | Hyperbolic | sinh, cosh | atanh, ln |
//!
//! Hyperbolic mode requires repeated iterations at indices 4, 13, 40,
//! 121, 364 for convergence.
//!
//! Callers should go through [`crate::ops`] rather than this engine directly.

mod cordic;

pub use crate::kernel::cordic::{
    circular_gain_inv, cordic, hyperbolic_gain, hyperbolic_gain_inv, Coordinate, Mode,
    DEFAULT_ITERATIONS,
};
