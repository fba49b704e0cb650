//! Classic explicit Runge-Kutta 4 (RK4) fixed-step scheme.

use crate::{Float, core::ode::ODE, methods::scheme::Scheme};

/// Classical explicit Runge-Kutta 4 (RK4).
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl Scheme for Rk4 {
    const NAME: &'static str = "RK4";
    const ORDER: u32 = 4;
    const STAGES: usize = 4;

    fn step<F: ODE + ?Sized>(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        let k1 = h * f.ode(y, x);
        let k2 = h * f.ode(y + A21 * k1, x + C2 * h);
        let k3 = h * f.ode(y + A32 * k2, x + C3 * h);
        let k4 = h * f.ode(y + A43 * k3, x + C4 * h);
        y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_step_matches_taylor_polynomial() {
        // For y' = y one RK4 step is the degree-4 Taylor polynomial of e^h.
        let f = |y: Float, _x: Float| y;
        let h: Float = 0.1;
        let taylor = 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert_relative_eq!(Rk4.step(&f, 0.0, 1.0, h), taylor, max_relative = 1e-15);
    }

    #[test]
    fn exact_for_cubic_quadrature() {
        // y' = 3x^2 integrates to x^3, within RK4's Simpson weights.
        let f = |_y: Float, x: Float| 3.0 * x * x;
        assert_relative_eq!(Rk4.step(&f, 1.0, 1.0, 1.0), 8.0, max_relative = 1e-15);
    }
}
