//! Run the three fixed-step schemes and the reference on one problem.

use std::thread;

use log::{info, warn};

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, problem::Problem, trajectory::Trajectory},
    error::Error,
    methods::scheme::Method,
    solve::reference::{ReferenceSolver, reference},
    utils,
};

/// The four index-aligned trajectories of one run over a shared grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub grid: Grid,
    pub y0: Float,
    pub euler: Trajectory,
    pub midpoint: Trajectory,
    pub rk4: Trajectory,
    pub reference: Trajectory,
}

impl Comparison {
    fn new(
        grid: Grid,
        y0: Float,
        [euler, midpoint, rk4]: [Trajectory; 3],
        reference: Trajectory,
    ) -> Self {
        let comparison = Self {
            grid,
            y0,
            euler,
            midpoint,
            rk4,
            reference,
        };
        comparison.warn_on_degenerate_values();
        comparison
    }

    pub fn trajectory(&self, method: Method) -> &Trajectory {
        match method {
            Method::Euler => &self.euler,
            Method::Midpoint => &self.midpoint,
            Method::Rk4 => &self.rk4,
        }
    }

    /// Pointwise `|method - reference|` at every grid point.
    pub fn deviation(&self, method: Method) -> Vec<Float> {
        utils::abs_deviation(self.trajectory(method), &self.reference)
    }

    /// Largest `|method - reference|` over the grid, NaN if either is degenerate.
    pub fn max_deviation(&self, method: Method) -> Float {
        utils::max_abs_deviation(self.trajectory(method), &self.reference)
    }

    fn warn_on_degenerate_values(&self) {
        let named = Method::ALL
            .iter()
            .map(|&method| (method.name(), self.trajectory(method)))
            .chain([("Reference", &self.reference)]);

        for (name, trajectory) in named {
            if let Some(i) = trajectory.first_non_finite() {
                warn!(
                    "{name} trajectory is not finite from x = {} on (value {})",
                    self.grid.points()[i],
                    trajectory[i]
                );
            }
        }
    }
}

/// Solve `problem` with every fixed-step scheme and with `solver`, one after another.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the problem or solver settings are
/// invalid and [`Error::ContractViolation`] if the reference is misaligned.
/// No partial results are returned.
pub fn compare<F, R>(problem: &Problem, f: &F, solver: &R) -> Result<Comparison, Error>
where
    F: ODE + ?Sized,
    R: ReferenceSolver,
{
    let grid = problem.grid()?;
    info!(
        "comparing schemes on [{}, {}] with {} steps, y0 = {}",
        grid.begin(),
        grid.end(),
        grid.steps(),
        problem.y0
    );

    let reference = reference(&grid, f, problem.y0, solver)?;
    let trajectories = Method::ALL.map(|method| method.integrate(&grid, f, problem.y0));

    Ok(Comparison::new(grid, problem.y0, trajectories, reference))
}

/// Same as [`compare`], with each scheme on its own scoped thread.
///
/// The computations share the grid and `f` by reference and produce the same
/// values as the sequential version.
pub fn compare_parallel<F, R>(problem: &Problem, f: &F, solver: &R) -> Result<Comparison, Error>
where
    F: ODE + Sync + ?Sized,
    R: ReferenceSolver + Sync,
{
    let grid = problem.grid()?;
    let y0 = problem.y0;
    info!(
        "comparing schemes on [{}, {}] with {} steps, y0 = {} (parallel)",
        grid.begin(),
        grid.end(),
        grid.steps(),
        y0
    );

    let (reference, trajectories) = thread::scope(|s| {
        let grid = &grid;
        let handles = Method::ALL.map(|method| s.spawn(move || method.integrate(grid, f, y0)));
        let reference = reference(grid, f, y0, solver);
        let trajectories = handles.map(|handle| {
            handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        });
        (reference, trajectories)
    });

    Ok(Comparison::new(grid, y0, trajectories, reference?))
}
