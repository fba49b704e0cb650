//! Built-in right-hand sides.

use crate::{Float, core::ode::ODE};

/// `f(y, x) = (2 - x^2 - y^2) / (2 + x^2 + x y)`.
///
/// The denominator vanishes on the curve `y = -(2 + x^2) / x`, where the
/// value is infinite or NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rational;

impl ODE for Rational {
    fn ode(&self, y: Float, x: Float) -> Float {
        (2.0 - x * x - y * y) / (2.0 + x * x + x * y)
    }
}

/// `f(y, x) = x + y`, solved by `y = (y0 + x0 + 1) e^(x - x0) - x - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl ODE for Linear {
    fn ode(&self, y: Float, x: Float) -> Float {
        x + y
    }
}

/// `f(y, x) = y`, solved by `y = y0 e^(x - x0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Growth;

impl ODE for Growth {
    fn ode(&self, y: Float, _x: Float) -> Float {
        y
    }
}

/// `f(y, x) = 0`, solved by the constant `y0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl ODE for Zero {
    fn ode(&self, _y: Float, _x: Float) -> Float {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_at_origin() {
        assert_eq!(Rational.ode(0.0, 0.0), 1.0);
        assert_eq!(Rational.ode(1.0, 1.0), 0.0);
    }

    #[test]
    fn rational_singularity_is_not_finite() {
        // 2 + x^2 + x y = 0 at x = 1, y = -3
        assert!(!Rational.ode(-3.0, 1.0).is_finite());
    }

    #[test]
    fn simple_right_hand_sides() {
        assert_eq!(Linear.ode(2.0, 3.0), 5.0);
        assert_eq!(Growth.ode(2.0, 3.0), 2.0);
        assert_eq!(Zero.ode(2.0, 3.0), 0.0);
    }
}
