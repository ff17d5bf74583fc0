//! High-level mathematical operations built on CORDIC kernels.
//!
//! This module provides user-friendly functions for computing various
//! mathematical operations using the CORDIC algorithm.
//!
//! # Modules
//!
//! - [`circular`]: Trigonometric functions (sin, cos, tan, cot, asin, acos, atan, atan2,
//!   deg2rad, rad2deg)
//! - [`hyperbolic`]: Hyperbolic functions (sinh, cosh, tanh, asinh, acosh, atanh, acoth)
//! - [`exponential`]: Exponential and logarithmic functions (exp, ln, log2, log10, pow2)
//! - [`algebraic`]: Algebraic functions (sqrt, hypot, pow, pol2rec, rec2pol)

pub mod algebraic;
pub mod circular;
pub mod exponential;
pub mod hyperbolic;

// Re-export all public functions
pub use algebraic::{hypot, pol2rec, pow, rec2pol, sqrt};
pub use circular::{acos, asin, atan, atan2, cos, cot, deg2rad, rad2deg, sin, sin_cos, tan};
pub use exponential::{exp, ln, log2, log10, pow2};
pub use hyperbolic::{acosh, acoth, asinh, atanh, cosh, coth, sinh, sinh_cosh, tanh};
