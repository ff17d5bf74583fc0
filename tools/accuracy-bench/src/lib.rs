//! Accuracy benchmarking framework for fixed_analytics.

pub mod functions;
pub mod metrics;
pub mod reference;
pub mod report;
pub mod sampling;

use fixed_analytics::Q;
use metrics::ErrorStats;
use rug::Float;
use sampling::SampleStrategy;

pub const REFERENCE_PRECISION: u32 = 256;

#[derive(Debug, Clone)]
pub enum Domain {
    Full,
    Open(f64, f64),
    Closed(f64, f64),
    Positive,
    OutsideUnit(f64),
}

impl Domain {
    pub fn contains(&self, x: f64) -> bool {
        match self {
            Domain::Full => true,
            Domain::Open(a, b) => x > *a && x < *b,
            Domain::Closed(a, b) => x >= *a && x <= *b,
            Domain::Positive => x > 0.0,
            Domain::OutsideUnit(bound) => x.abs() > *bound,
        }
    }

    pub fn sampling_bounds(&self) -> (f64, f64) {
        match self {
            Domain::Full => (-100.0, 100.0),
            Domain::Open(a, b) | Domain::Closed(a, b) => (*a, *b),
            Domain::Positive => (1e-6, 1000.0),
            Domain::OutsideUnit(bound) => (*bound + 0.01, 100.0),
        }
    }
}

pub trait TestedFunction: Send + Sync {
    fn name(&self) -> &'static str;
    fn domain(&self) -> Domain;
    fn reference(&self, x: &Float) -> Float;
    fn compute_q(&self, x: Q) -> Q;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionResult {
    pub name: String,
    pub q: ErrorStats,
    pub samples_tested: usize,
}

pub fn test_function(func: &dyn TestedFunction, strategy: &SampleStrategy) -> FunctionResult {
    let domain = func.domain();
    let (lo, hi) = domain.sampling_bounds();
    let points = strategy.generate(lo, hi);

    let mut errors = Vec::new();
    let mut tested = 0;

    for &x_f64 in &points {
        if !domain.contains(x_f64) {
            continue;
        }

        let x_mpfr = Float::with_val(REFERENCE_PRECISION, x_f64);
        let ref_f64 = func.reference(&x_mpfr).to_f64();

        if let Some(x) = try_from_f64(x_f64) {
            let result = to_f64(func.compute_q(x));
            if let Some(err) = metrics::compute_error(result, ref_f64) {
                errors.push(err);
            }
        }

        tested += 1;
    }

    FunctionResult {
        name: func.name().to_string(),
        q: ErrorStats::from_errors(&errors),
        samples_tested: tested,
    }
}

/// Converts an `f64` to `Q`, rejecting values outside its representable range.
fn try_from_f64(x: f64) -> Option<Q> {
    const MAX: f64 = 32768.0;
    const MIN: f64 = -32768.0;
    if x > MAX || x < MIN || !x.is_finite() {
        return None;
    }
    Some(Q::from_bits((x * 65536.0) as i32))
}

fn to_f64(x: Q) -> f64 {
    f64::from(x.to_bits()) / 65536.0
}

pub type FunctionRegistry = Vec<Box<dyn TestedFunction>>;

pub fn build_registry() -> FunctionRegistry {
    let mut reg: FunctionRegistry = Vec::new();
    reg.extend(functions::circular::register());
    reg.extend(functions::hyperbolic::register());
    reg.extend(functions::exponential::register());
    reg.extend(functions::algebraic::register());
    reg
}
