//! Interpolation inside an accepted step

use crate::Float;

/// Continuous approximation of the solution inside the last accepted step.
pub trait Interpolate {
    /// Interpolate the solution at the abscissa `xi`.
    fn interpolate(&self, xi: Float) -> Float;
}
