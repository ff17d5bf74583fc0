use crate::{Domain, TestedFunction, reference};
use fixed_analytics::Q;
use rug::Float;

pub fn register() -> Vec<Box<dyn TestedFunction>> {
    vec![Box::new(Sqrt)]
}

struct Sqrt;
impl TestedFunction for Sqrt {
    fn name(&self) -> &'static str {
        "sqrt"
    }
    fn domain(&self) -> Domain {
        Domain::Closed(0.0, 10000.0)
    }
    fn reference(&self, x: &Float) -> Float {
        reference::algebraic::sqrt(x)
    }
    fn compute_q(&self, x: Q) -> Q {
        fixed_analytics::sqrt(x).unwrap_or(Q::ZERO)
    }
}
