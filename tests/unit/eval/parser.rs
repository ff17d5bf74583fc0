//! Integration-level tests for the expression evaluator, exercising it
//! the way a caller outside the crate would: through `fixed_analytics::eval`
//! alone, with no access to the crate's private modules.

#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod tests {
    use fixed_analytics::eval::{visible_operators, Evaluator};
    use fixed_analytics::{EvalError, Q};

    fn to_f64(a: Q) -> f64 {
        f64::from(a.to_bits()) / 65536.0
    }

    fn approx(a: Q, b: f64) -> bool {
        (to_f64(a) - b).abs() < 0.01
    }

    #[test]
    fn evaluates_a_multi_term_expression() {
        let mut e = Evaluator::new();
        assert_eq!(e.evaluate("2 + 3 * (4 - 1)").unwrap(), Q::from_i32(11));
    }

    #[test]
    fn variables_persist_across_expressions() {
        let mut e = Evaluator::new();
        e.set_variable("radius", Q::from_i32(3)).unwrap();
        let area = e.evaluate("radius * radius").unwrap();
        assert_eq!(area, Q::from_i32(9));
        assert_eq!(e.evaluate("radius + 1").unwrap(), Q::from_i32(4));
    }

    #[test]
    fn named_math_function_matches_direct_call() {
        let mut e = Evaluator::new();
        let via_eval = e.evaluate("sqrt(16)").unwrap();
        let direct = fixed_analytics::sqrt(Q::from_i32(16)).unwrap();
        assert_eq!(via_eval, direct);
    }

    #[test]
    fn first_error_wins_and_is_retrievable() {
        let mut e = Evaluator::new();
        let expected = EvalError::Precondition { operator: "/", expected: "non-zero right operand" };
        assert_eq!(e.evaluate("1 / 0"), Err(expected));
        assert_eq!(e.error(), Some(expected));
    }

    #[test]
    fn malformed_expression_reports_unmatched_parens() {
        let mut e = Evaluator::new();
        assert_eq!(e.evaluate("(1 + 2"), Err(EvalError::UnmatchedLeftParen));
        assert_eq!(e.evaluate("1 + 2)"), Err(EvalError::UnmatchedRightParen));
    }

    #[test]
    fn trig_identity_through_the_evaluator() {
        let mut e = Evaluator::new();
        e.set_variable("a", Q::FRAC_PI_4).unwrap();
        let sum_of_squares = e.evaluate("(sin a) ** 2 + (cos a) ** 2").unwrap();
        assert!(approx(sum_of_squares, 1.0));
    }

    #[test]
    fn visible_operators_excludes_internal_sentinels() {
        // The sentinel used to disambiguate unary minus from binary minus
        // is an implementation detail and must not show up in a listing
        // meant for end users.
        let names: alloc_free::Names = visible_operators().fold(alloc_free::Names::new(), |acc, op| acc.pushed(op.name));
        assert!(names.contains("+"));
        assert!(names.contains("sin"));
        assert!(names.contains("atan2"));
    }

    mod alloc_free {
        // A tiny fixed-capacity collector, avoiding an allocation just for tests.
        pub struct Names {
            buf: [&'static str; 64],
            len: usize,
        }
        impl Names {
            pub fn new() -> Self {
                Self { buf: [""; 64], len: 0 }
            }
            pub fn pushed(mut self, name: &'static str) -> Self {
                self.buf[self.len] = name;
                self.len += 1;
                self
            }
            pub fn contains(&self, name: &str) -> bool {
                self.buf.get(..self.len).unwrap_or(&[]).contains(&name)
            }
        }
    }
}
