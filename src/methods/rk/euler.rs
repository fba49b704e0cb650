//! Explicit Euler scheme.

use crate::{Float, core::ode::ODE, methods::scheme::Scheme};

/// Explicit Euler: `y + h f(y, x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Scheme for Euler {
    const NAME: &'static str = "Euler";
    const ORDER: u32 = 1;
    const STAGES: usize = 1;

    fn step<F: ODE + ?Sized>(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        y + h * f.ode(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_step() {
        let f = |y: Float, x: Float| x + y;
        assert_relative_eq!(Euler.step(&f, 0.0, 1.0, 0.1), 1.1);
        assert_relative_eq!(Euler.step(&f, 1.0, 2.0, -0.5), 0.5);
    }
}
