//! Precomputed lookup tables for CORDIC algorithms.
//!
//! Tables are stored as `i32` values representing Q16.16 bit patterns, 17
//! entries deep: at 16 fractional bits, the angle sequences have already
//! collapsed to their own least-significant-bit by the 16th iteration, so
//! no entry beyond that carries information a Q16.16 computation can use.
//!
//! # Table contents
//!
//! - [`circular::ATAN_TABLE`]: `atan(2^-i)` for circular CORDIC mode.
//! - [`hyperbolic::ATANH_TABLE`]: `atanh(2^-i)` for hyperbolic CORDIC mode.
//! - [`linear::THETA_TABLE`]: `2^-i` for linear CORDIC mode.
//! - [`circular::CIRCULAR_GAIN_INV`]: inverse circular gain (`1/K ≈ 0.6073`).
//! - [`hyperbolic::HYPERBOLIC_GAIN`] / [`hyperbolic::HYPERBOLIC_GAIN_INV`]:
//!   hyperbolic gain and its inverse (`K_h ≈ 0.8282`, `1/K_h ≈ 1.2075`).

pub mod circular;
pub mod hyperbolic;
pub mod linear;

pub use circular::{ATAN_TABLE, CIRCULAR_GAIN_INV};
pub use hyperbolic::{needs_repeat, ATANH_HALF, ATANH_TABLE, HYPERBOLIC_GAIN, HYPERBOLIC_GAIN_INV};
pub use linear::THETA_TABLE;
