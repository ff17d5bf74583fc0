//! Smoke tests covering the full public API surface in one pass.

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use fixed_analytics::{
        acos, acosh, acoth, asin, asinh, atan, atan2, atanh, cos, cosh, cot, coth, exp, hypot, ln,
        log2, log10, pol2rec, pow, rec2pol, sin, sin_cos, sinh, sinh_cosh, sqrt, tan, tanh, Q,
    };

    #[test]
    fn smoke_test_trig() {
        let angle = Q::HALF;
        let _ = sin(angle);
        let _ = cos(angle);
        let _ = tan(angle);
        let _ = cot(Q::ONE).unwrap();
        let _ = sin_cos(angle);
    }

    #[test]
    fn smoke_test_inverse_trig() {
        let x = Q::HALF;
        let _ = asin(x).unwrap();
        let _ = acos(x).unwrap();
        let _ = atan(x);
        let _ = atan2(x, Q::ONE);
    }

    #[test]
    fn smoke_test_hyperbolic() {
        let x = Q::HALF;
        let _ = sinh(x);
        let _ = cosh(x);
        let _ = tanh(x);
        let _ = coth(x).unwrap();
        let _ = sinh_cosh(x);
    }

    #[test]
    fn smoke_test_inverse_hyperbolic() {
        let x = Q::HALF;
        let _ = asinh(x);
        let _ = atanh(x).unwrap();

        let x_large = Q::from_bits(0x0001_8000); // 1.5
        let _ = acosh(x_large).unwrap();
        let _ = acoth(x_large).unwrap();
    }

    #[test]
    fn smoke_test_exponential() {
        let x = Q::HALF;
        let _ = exp(x);
        let _ = ln(x).unwrap();
        let _ = log2(x).unwrap();
        let _ = log10(x).unwrap();
    }

    #[test]
    fn smoke_test_algebraic() {
        let x = Q::from_i32(2);
        let _ = sqrt(x).unwrap();
        let _ = hypot(Q::from_i32(3), Q::from_i32(4));
        let _ = pow(x, Q::from_i32(3)).unwrap();
        let (rx, ry) = pol2rec(Q::ONE, Q::FRAC_PI_4);
        let _ = rec2pol(rx, ry);
    }
}
