//! Compile-time verification that the core numeric surface never panics.
//!
//! Each function below is annotated with [`no_panic::no_panic`], which
//! fails the build if the compiler can prove a panicking code path (a
//! `panic!`, indexing bounds check, arithmetic overflow check, or
//! `unwrap`/`expect`) survives optimization. This binary exercises
//! representative calls across the public surface; it is never executed,
//! only compiled, via `cargo build --profile no-panic-check --features
//! verify-no-panic --bin verify_no_panic`.

use fixed_analytics::{
    acos, acosh, acoth, asin, asinh, atan, atan2, atanh, cos, cosh, cot, coth, exp, hypot, ln,
    log2, log10, pol2rec, pow, rec2pol, sin, sin_cos, sinh, sinh_cosh, sqrt, tan, tanh, Q,
};

#[no_panic::no_panic]
fn verify_arithmetic(a: Q, b: Q) -> Q {
    a.add(b).sub(b).mul(b).div(a.max(Q::ONE)).abs().neg()
}

#[no_panic::no_panic]
fn verify_rounding(a: Q) -> Q {
    a.floor().add(a.ceil()).add(a.trunc()).add(a.round())
}

#[no_panic::no_panic]
fn verify_bitwise(a: Q, b: Q) -> Q {
    a.bit_and(b).bit_or(b).bit_xor(b).bit_not().arithmetic_shift_left(1).arithmetic_shift_right(1)
}

#[no_panic::no_panic]
fn verify_circular(x: Q) -> Q {
    let (s, c) = sin_cos(x);
    s.add(c).add(tan(x)).add(cot(x).unwrap_or(Q::ZERO)).add(atan(x)).add(atan2(x, Q::ONE))
}

#[no_panic::no_panic]
fn verify_inverse_circular(x: Q) -> Q {
    asin(x).unwrap_or(Q::ZERO).add(acos(x).unwrap_or(Q::ZERO))
}

#[no_panic::no_panic]
fn verify_hyperbolic(x: Q) -> Q {
    let (s, c) = sinh_cosh(x);
    s.add(c).add(tanh(x)).add(coth(x).unwrap_or(Q::ZERO))
}

#[no_panic::no_panic]
fn verify_inverse_hyperbolic(x: Q) -> Q {
    asinh(x)
        .add(acosh(x).unwrap_or(Q::ZERO))
        .add(atanh(x).unwrap_or(Q::ZERO))
        .add(acoth(x).unwrap_or(Q::ZERO))
}

#[no_panic::no_panic]
fn verify_exponential(x: Q) -> Q {
    exp(x).add(ln(x).unwrap_or(Q::ZERO)).add(log2(x).unwrap_or(Q::ZERO)).add(log10(x).unwrap_or(Q::ZERO))
}

#[no_panic::no_panic]
fn verify_algebraic(a: Q, b: Q) -> Q {
    let polar = rec2pol(a, b);
    let (x, y) = pol2rec(polar.0, polar.1);
    sqrt(a.abs()).unwrap_or(Q::ZERO).add(hypot(a, b)).add(pow(a.abs(), b).unwrap_or(Q::ZERO)).add(x).add(y)
}

fn main() {
    let a = Q::from_i32(2);
    let b = Q::HALF;
    let _ = verify_arithmetic(a, b);
    let _ = verify_rounding(a);
    let _ = verify_bitwise(a, b);
    let _ = verify_circular(b);
    let _ = verify_inverse_circular(b);
    let _ = verify_hyperbolic(b);
    let _ = verify_inverse_hyperbolic(a);
    let _ = verify_exponential(b);
    let _ = verify_algebraic(a, b);
}
