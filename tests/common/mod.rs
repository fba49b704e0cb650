#![allow(dead_code)]

use cauchy::prelude::*;

/// y' = y, exact solution y0 * e^(x - x0)
pub fn growth(y: f64, _x: f64) -> f64 {
    y
}

/// y' = x + y
pub fn linear(y: f64, x: f64) -> f64 {
    x + y
}

/// Exact solution of y' = x + y through (x0, y0).
pub fn linear_exact(x0: f64, y0: f64) -> impl Fn(f64) -> f64 {
    move |x| (y0 + x0 + 1.0) * (x - x0).exp() - x - 1.0
}

/// Reference solver at tolerances well below every fixed-step error in the tests.
pub fn tight_reference() -> Dopri5Reference {
    Dopri5Reference::with_tolerances(1e-12, 1e-12)
}

/// Solve with every scheme and the default reference.
pub fn run(problem: &Problem, f: &(dyn ODE + Sync)) -> Comparison {
    compare(problem, f, &Dopri5Reference::default()).expect("valid problem")
}
