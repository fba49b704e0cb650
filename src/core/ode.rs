//! User-supplied right-hand side of a scalar ODE.

use crate::Float;

/// Right-hand side of the scalar initial value problem `dy/dx = f(y, x)`.
///
/// Implementations must be pure: the integrators call `ode` many times per
/// step and rely on getting the same value for the same arguments. Note the
/// argument order, the state `y` comes first and the abscissa `x` second.
///
/// Any `Fn(Float, Float) -> Float` closure implements this trait, so most
/// callers never implement it by hand.
///
/// # Example
///
/// ```
/// use cauchy::ODE;
///
/// struct Decay {
///     rate: f64,
/// }
///
/// impl ODE for Decay {
///     fn ode(&self, y: f64, _x: f64) -> f64 {
///         -self.rate * y
///     }
/// }
///
/// let growth = |y: f64, _x: f64| y;
/// assert_eq!(Decay { rate: 2.0 }.ode(1.0, 0.0), -2.0);
/// assert_eq!(growth.ode(3.0, 0.0), 3.0);
/// ```
pub trait ODE {
    fn ode(&self, y: Float, x: Float) -> Float;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, y: Float, x: Float) -> Float {
        self(y, x)
    }
}
