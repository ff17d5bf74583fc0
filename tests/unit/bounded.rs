//! Tests for bounded precondition types

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fixed_analytics::bounded::{AtLeastOne, NonNegative, OpenUnitInterval, UnitInterval};
    use fixed_analytics::Q;

    #[test]
    fn non_negative_rejects_negative() {
        assert!(NonNegative::new(Q::from_i32(-1)).is_none());
        assert!(NonNegative::new(Q::ZERO).is_some());
    }

    #[test]
    fn non_negative_one_plus_square_is_infallible_and_correct() {
        let nn = NonNegative::one_plus_square(Q::from_i32(3));
        assert_eq!(nn.get(), Q::from_i32(10));
    }

    #[test]
    fn unit_interval_rejects_out_of_range() {
        assert!(UnitInterval::new(Q::from_i32(2)).is_none());
        assert!(UnitInterval::new(Q::from_i32(-2)).is_none());
        assert!(UnitInterval::new(Q::ONE).is_some());
        assert!(UnitInterval::new(Q::ONE.neg()).is_some());
    }

    #[test]
    fn open_unit_interval_excludes_endpoints() {
        assert!(OpenUnitInterval::new(Q::ONE).is_none());
        assert!(OpenUnitInterval::new(Q::ONE.neg()).is_none());
        assert!(OpenUnitInterval::new(Q::ZERO).is_some());
    }

    #[test]
    fn open_unit_interval_from_div_by_sqrt_stays_in_range() {
        let x = Q::from_i32(5);
        let sqrt_one_plus_x_sq = Q::from_i32(5); // sqrt(26) approx, close enough to exercise the path
        let open = OpenUnitInterval::from_div_by_sqrt_one_plus_square(x, sqrt_one_plus_x_sq);
        assert_eq!(open.get(), Q::ONE);
    }

    #[test]
    fn at_least_one_rejects_below_one() {
        assert!(AtLeastOne::new(Q::from_bits((1 << 16) - 1)).is_none());
        assert!(AtLeastOne::new(Q::ONE).is_some());
    }

    #[test]
    fn non_negative_square_minus_one_matches_identity() {
        let x = AtLeastOne::new(Q::from_i32(3)).unwrap();
        let nn = NonNegative::square_minus_one(x);
        assert_eq!(nn.get(), Q::from_i32(8));
    }
}
