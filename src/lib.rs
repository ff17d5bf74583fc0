//! # `fixed_analytics`
//!
//! Fixed-point mathematical functions using the CORDIC algorithm, over a
//! single concrete Q16.16 value type, [`Q`].
//!
//! This crate provides efficient implementations of trigonometric, hyperbolic,
//! exponential, and algebraic functions for fixed-point numbers. All algorithms
//! use only addition, subtraction, and bit shifts, making them suitable for
//! embedded systems without hardware floating-point support. A bounded,
//! allocation-free expression evaluator ([`eval`]) sits on top of the
//! numeric core for callers that need to parse and evaluate textual
//! expressions rather than call functions directly.
//!
//! ## Features
//!
//! - **No floating-point operations**: All computations use fixed-point arithmetic
//! - **`no_std` compatible**: Works on embedded systems without an allocator
//! - **Comprehensive function coverage**: Trig, hyperbolic, exponential, and more
//! - **Compile-time tables**: Lookup tables are embedded in the binary
//! - **Proper error handling**: Domain errors return `Result` types
//! - **Configurable overflow policy and text formatting**: see [`config`]
//!
//! ## Supported Functions
//!
//! | Category | Functions |
//! |----------|-----------|
//! | Circular | [`sin`], [`cos`], [`tan`], [`cot`], [`sin_cos`], [`asin`], [`acos`], [`atan`], [`atan2`], [`deg2rad`], [`rad2deg`] |
//! | Hyperbolic | [`sinh`], [`cosh`], [`tanh`], [`coth`], [`sinh_cosh`], [`asinh`], [`acosh`], [`atanh`], [`acoth`] |
//! | Exponential | [`exp`], [`ln`], [`log2`], [`log10`], [`pow2`] |
//! | Algebraic | [`sqrt`], [`hypot`], [`pow`], [`pol2rec`], [`rec2pol`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use fixed_analytics::{sin, cos, sqrt, ln, Q};
//!
//! // Compute sin and cos of an angle
//! let angle = Q::HALF; // 0.5 radians
//! let sine = sin(angle);
//! let cosine = cos(angle);
//!
//! // Square root
//! let x = Q::from_i32(2);
//! let root = sqrt(x).unwrap(); // ~= 1.414
//!
//! // Natural logarithm
//! let y = Q::E;
//! let log = ln(y).unwrap(); // ~= 1.0
//! ```
//!
//! ## The `Q` Type
//!
//! Unlike a generic fixed-point library, this crate works with exactly one
//! concrete representation: [`Q`], a 32-bit signed Q16.16 value (one sign
//! bit, fifteen integer bits, sixteen fractional bits). Internally, `Q`
//! borrows its transcendental constants from the [`fixed`] crate's
//! `I16F16`, but that dependency is an implementation detail, not part of
//! this crate's public surface.
//!
//! ## Algorithm Overview
//!
//! CORDIC (Coordinate Rotation Digital Computer) is an iterative algorithm
//! invented by Jack Volder in 1959. It computes trigonometric, hyperbolic,
//! and other functions using only:
//!
//! - Addition and subtraction
//! - Bit shifts (multiplication/division by powers of 2)
//! - Table lookups
//!
//! This makes it ideal for hardware without a hardware multiplier or FPU.
//! See [`kernel`] for the unified rotation/vectoring engine all of the
//! functions above are built on.
//!
//! ### How CORDIC Works
//!
//! The algorithm rotates a vector through a series of predetermined angles.
//! Each rotation uses the identities:
//!
//! ```text
//! x' = x - σ × y × 2^(-i)
//! y' = y + σ × x × 2^(-i)
//! z' = z - σ × angle[i]
//! ```
//!
//! Where σ = ±1 determines the rotation direction. After n iterations:
//!
//! - **Rotation mode** (z → 0): Computes sin and cos of the initial angle
//! - **Vectoring mode** (y → 0): Computes the angle of the initial vector
//!
//! ## Precision
//!
//! `Q` carries 16 fractional bits, giving roughly 4-5 decimal digits of
//! accuracy for well-conditioned inputs; see each function's documentation
//! for the tolerances it was verified against.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables `std::error::Error` implementations for
//!   [`Error`], [`ParseError`], and [`EvalError`]
//! - Without `std`: `#![no_std]` compatible
//!
//! ## References
//!
//! - [CORDIC on Wikipedia](https://en.wikipedia.org/wiki/CORDIC)
//! - Volder, J.E. "The CORDIC Trigonometric Computing Technique" (1959)
//! - Walther, J.S. "A Unified Algorithm for Elementary Functions" (1971)

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

pub mod bounded;
pub mod config;
pub mod error;
pub mod eval;
pub mod kernel;
pub mod ops;
pub mod q;
pub mod tables;
pub mod text;

// Re-export main types
pub use error::{Error, EvalError, ParseError, Result};
pub use q::Q;

// Re-export all mathematical functions at crate root for convenience
pub use ops::algebraic::{hypot, pol2rec, pow, rec2pol, sqrt};
pub use ops::circular::{acos, asin, atan, atan2, cos, cot, deg2rad, rad2deg, sin, sin_cos, tan};
pub use ops::exponential::{exp, ln, log2, log10, pow2};
pub use ops::hyperbolic::{acosh, acoth, asinh, atanh, cosh, coth, sinh, sinh_cosh, tanh};
