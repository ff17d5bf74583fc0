//! Tests for the unified CORDIC core algorithm

#[cfg(test)]
mod tests {
    use fixed_analytics::kernel::{circular_gain_inv, cordic, hyperbolic_gain, hyperbolic_gain_inv, Coordinate, Mode, DEFAULT_ITERATIONS};
    use fixed_analytics::Q;

    fn to_f64(a: Q) -> f64 {
        f64::from(a.to_bits()) / 65536.0
    }

    #[test]
    fn circular_rotation_zero_angle() {
        let mut x = circular_gain_inv();
        let mut y = Q::ZERO;
        let mut z = Q::ZERO;
        cordic(Coordinate::Circular, Mode::Rotation, DEFAULT_ITERATIONS, &mut x, &mut y, &mut z);

        assert!((to_f64(x) - 1.0).abs() < 0.02, "x = {}", to_f64(x));
        assert!(to_f64(y).abs() < 0.01, "y = {}", to_f64(y));
        assert!(to_f64(z).abs() < 0.01, "z = {}", to_f64(z));
    }

    #[test]
    fn circular_vectoring_atan_one() {
        let mut x = Q::ONE;
        let mut y = Q::ONE;
        let mut z = Q::ZERO;
        cordic(Coordinate::Circular, Mode::Vectoring, DEFAULT_ITERATIONS, &mut x, &mut y, &mut z);

        assert!((to_f64(z) - core::f64::consts::FRAC_PI_4).abs() < 0.01);
        assert!(to_f64(y).abs() < 0.01, "y should converge to 0, got {}", to_f64(y));
    }

    #[test]
    fn hyperbolic_gain_value() {
        let gain = to_f64(hyperbolic_gain());
        assert!((gain - 0.8282).abs() < 0.01, "hyperbolic_gain = {gain}");
    }

    #[test]
    fn hyperbolic_gain_inv_value() {
        let gain_inv = to_f64(hyperbolic_gain_inv());
        assert!((gain_inv - 1.2075).abs() < 0.01, "hyperbolic_gain_inv = {gain_inv}");
    }

    #[test]
    fn hyperbolic_rotation_matches_sinh_cosh() {
        let mut x = hyperbolic_gain_inv();
        let mut y = Q::ZERO;
        let mut z = Q::ONE;
        cordic(Coordinate::Hyperbolic, Mode::Rotation, DEFAULT_ITERATIONS, &mut x, &mut y, &mut z);

        assert!((to_f64(y) - 1.0_f64.sinh()).abs() < 0.01, "sinh(1) got {}", to_f64(y));
        assert!((to_f64(x) - 1.0_f64.cosh()).abs() < 0.01, "cosh(1) got {}", to_f64(x));
    }

    #[test]
    fn linear_rotation_multiplies() {
        let mut x = Q::from_i32(3);
        let mut y = Q::ZERO;
        let mut z = Q::from_i32(4);
        cordic(Coordinate::Linear, Mode::Rotation, DEFAULT_ITERATIONS, &mut x, &mut y, &mut z);

        assert!((to_f64(y) - 12.0).abs() < 0.01, "3*4 got {}", to_f64(y));
    }
}
