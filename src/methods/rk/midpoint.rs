//! Explicit midpoint scheme.

use crate::{Float, core::ode::ODE, methods::scheme::Scheme};

/// Explicit midpoint: an Euler half step, then a full step with the slope there.
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl Scheme for Midpoint {
    const NAME: &'static str = "Midpoint";
    const ORDER: u32 = 2;
    const STAGES: usize = 2;

    fn step<F: ODE + ?Sized>(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        let k1 = f.ode(y, x);
        let k2 = f.ode(y + C2 * h * k1, x + C2 * h);
        y + h * k2
    }
}

const C2: Float = 0.5;
