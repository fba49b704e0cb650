//! Common driver loop for the fixed-step explicit schemes.

use std::fmt;

use log::debug;

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, trajectory::Trajectory},
    methods::rk::{Euler, Midpoint, Rk4},
};

/// One step of a fixed-step explicit scheme: produce `y(x + h)` from `y(x)`.
pub trait Scheme {
    /// Human readable name used in logs and reports.
    const NAME: &'static str;
    /// Order of the global error, `O(h^ORDER)`.
    const ORDER: u32;
    /// Right-hand side evaluations per step.
    const STAGES: usize;

    fn step<F: ODE + ?Sized>(&self, f: &F, x: Float, y: Float, h: Float) -> Float;
}

/// Integrate `dy/dx = f(y, x)` over every point of `grid` with `scheme`.
///
/// The step size is the grid's uniform spacing and the returned trajectory has
/// one value per grid point, starting with `y0` unchanged. NaN or infinite
/// values produced along the way are carried forward as-is.
pub fn integrate<S, F>(scheme: &S, grid: &Grid, f: &F, y0: Float) -> Trajectory
where
    S: Scheme,
    F: ODE + ?Sized,
{
    let points = grid.points();
    let h = grid.spacing();

    let mut values = Vec::with_capacity(points.len());
    values.push(y0);

    let mut y = y0;
    for &x in &points[..points.len() - 1] {
        y = scheme.step(f, x, y, h);
        values.push(y);
    }

    debug!(
        "{}: {} steps of h = {} from x = {} to x = {}, y = {}",
        S::NAME,
        grid.steps(),
        h,
        grid.begin(),
        grid.end(),
        y
    );

    Trajectory::new(values, S::STAGES * grid.steps())
}

/// Run-time selection of one of the fixed-step schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Explicit Euler, order 1.
    Euler,
    /// Explicit midpoint, order 2.
    Midpoint,
    /// Classical Runge-Kutta, order 4.
    Rk4,
}

impl Method {
    /// All schemes in increasing order of accuracy.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Midpoint, Method::Rk4];

    pub fn integrate<F: ODE + ?Sized>(self, grid: &Grid, f: &F, y0: Float) -> Trajectory {
        match self {
            Method::Euler => integrate(&Euler, grid, f, y0),
            Method::Midpoint => integrate(&Midpoint, grid, f, y0),
            Method::Rk4 => integrate(&Rk4, grid, f, y0),
        }
    }

    pub fn order(self) -> u32 {
        match self {
            Method::Euler => Euler::ORDER,
            Method::Midpoint => Midpoint::ORDER,
            Method::Rk4 => Rk4::ORDER,
        }
    }

    pub fn stages(self) -> usize {
        match self {
            Method::Euler => Euler::STAGES,
            Method::Midpoint => Midpoint::STAGES,
            Method::Rk4 => Rk4::STAGES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => Euler::NAME,
            Method::Midpoint => Midpoint::NAME,
            Method::Rk4 => Rk4::NAME,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
