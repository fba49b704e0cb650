//! Reference trajectories from a high-accuracy adaptive solver.

use log::warn;

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, trajectory::Trajectory},
    error::Error,
    methods::{dp::dopri5, settings::Settings},
    solve::solout::GridSampler,
};

/// An adaptive integrator able to report the solution at given abscissae.
///
/// `sample` must return exactly one value per entry of `points`, the first
/// being (approximately) `y0`. [`reference`] checks the length.
pub trait ReferenceSolver {
    fn sample<F: ODE + ?Sized>(
        &self,
        f: &F,
        y0: Float,
        points: &[Float],
    ) -> Result<Vec<Float>, Error>;
}

/// Sample the solution of `dy/dx = f(y, x), y(grid[0]) = y0` at every grid point.
///
/// # Errors
///
/// Propagates the solver's own errors and returns
/// [`Error::ContractViolation`] when the solver's output is not one value per
/// grid point. The output is never truncated or padded here.
pub fn reference<F, R>(grid: &Grid, f: &F, y0: Float, solver: &R) -> Result<Trajectory, Error>
where
    F: ODE + ?Sized,
    R: ReferenceSolver,
{
    let values = solver.sample(f, y0, grid.points())?;
    if values.len() != grid.len() {
        return Err(Error::ContractViolation {
            expected: grid.len(),
            found: values.len(),
        });
    }
    Ok(Trajectory::new(values, 0))
}

/// Reference solver backed by [`dopri5`].
///
/// Defaults to `rtol = atol = 1e-10`. If the integration stops before the end
/// of the grid (step size underflow, too many steps, stiffness), the points
/// it did not reach are reported as NaN so that the degeneracy shows up in the
/// comparison instead of aborting the run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dopri5Reference {
    pub settings: Settings,
}

impl Dopri5Reference {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn with_tolerances(rtol: Float, atol: Float) -> Self {
        Self::new(Settings::builder().rtol(rtol).atol(atol).build())
    }
}

impl ReferenceSolver for Dopri5Reference {
    fn sample<F: ODE + ?Sized>(
        &self,
        f: &F,
        y0: Float,
        points: &[Float],
    ) -> Result<Vec<Float>, Error> {
        let (x0, xend) = match points {
            [] => return Ok(Vec::new()),
            [_] => return Ok(vec![y0]),
            [first, .., last] => (*first, *last),
        };

        let mut y = y0;
        let mut sampler = GridSampler::new(points);
        let result = dopri5(f, x0, xend, &mut y, &self.settings, Some(&mut sampler))?;

        let mut values = sampler.into_values();
        if values.len() < points.len() {
            warn!(
                "reference solution stopped at x = {} ({:?}); {} of {} points set to NaN",
                result.x,
                result.status,
                points.len() - values.len(),
                points.len()
            );
            values.resize(points.len(), Float::NAN);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    /// Drops the last sample, violating the alignment contract.
    struct Truncating;

    impl ReferenceSolver for Truncating {
        fn sample<F: ODE + ?Sized>(
            &self,
            _f: &F,
            y0: Float,
            points: &[Float],
        ) -> Result<Vec<Float>, Error> {
            Ok(vec![y0; points.len() - 1])
        }
    }

    #[test]
    fn dopri5_samples_every_grid_point() {
        let grid = Grid::new(0.0, 1.0, 0.1).unwrap();
        let f = |y: Float, _x: Float| y;

        let trajectory = reference(&grid, &f, 1.0, &Dopri5Reference::default()).unwrap();

        assert_eq!(trajectory.len(), grid.len());
        assert_eq!(trajectory[0], 1.0);
        for (&x, &y) in grid.iter().zip(trajectory.iter()) {
            assert_abs_diff_eq!(y, x.exp(), epsilon = 1e-8);
        }
    }

    #[test]
    fn length_mismatch_is_a_contract_violation() {
        let grid = Grid::new(0.0, 1.0, 0.25).unwrap();
        let f = |y: Float, _x: Float| y;

        assert_eq!(
            reference(&grid, &f, 1.0, &Truncating),
            Err(Error::ContractViolation {
                expected: 5,
                found: 4,
            })
        );
    }

    #[test]
    fn single_point_grid_returns_initial_value() {
        let grid = Grid::new(1.0, 1.0, 0.1).unwrap();
        let f = |_y: Float, _x: Float| -> Float { panic!("rhs evaluated on an empty interval") };

        let trajectory = reference(&grid, &f, 3.0, &Dopri5Reference::default()).unwrap();
        assert_eq!(trajectory.values(), &[3.0]);
    }

    #[test]
    fn unreached_points_become_nan() {
        let grid = Grid::new(0.0, 1.0, 0.25).unwrap();
        let f = |y: Float, x: Float| if x > 0.5 { Float::NAN } else { y };

        let trajectory = reference(&grid, &f, 1.0, &Dopri5Reference::default()).unwrap();

        assert_eq!(trajectory.len(), 5);
        assert_abs_diff_eq!(trajectory[2], 0.5_f64.exp(), epsilon = 1e-8);
        assert!(trajectory[3].is_nan());
        assert!(trajectory[4].is_nan());
        assert_eq!(trajectory.first_non_finite(), Some(3));
    }

    #[test]
    fn solver_settings_errors_propagate() {
        let grid = Grid::new(0.0, 1.0, 0.5).unwrap();
        let f = |y: Float, _x: Float| y;
        let solver = Dopri5Reference::with_tolerances(-1.0, 1e-6);

        assert!(matches!(
            reference(&grid, &f, 1.0, &solver),
            Err(Error::Configuration(_))
        ));
    }
}
