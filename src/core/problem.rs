//! Immutable run configuration for one initial value problem.

use bon::Builder;

use crate::{
    Float,
    core::grid::Grid,
    error::{ConfigurationError, Error},
};

/// Default upper bound on the number of grid steps.
pub const DEFAULT_NMAX: usize = 100_000;

/// A scalar initial value problem `y(begin) = y0` integrated towards `end`
/// with a fixed step `step`.
///
/// Every field has a default, so a problem can be built from any subset of
/// inputs:
///
/// ```
/// use cauchy::Problem;
///
/// let problem = Problem::builder().end(2.0).y0(1.0).build();
/// assert_eq!(problem.begin, 0.0);
/// assert_eq!(problem.step, 0.1);
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct Problem {
    /// Start of the interval, where the initial value is prescribed. Default: `0.0`.
    #[builder(default = 0.0)]
    pub begin: Float,
    /// End of the interval. Default: `1.0`.
    #[builder(default = 1.0)]
    pub end: Float,
    /// Nominal step size; its sign must point from `begin` to `end`. Default: `0.1`.
    #[builder(default = 0.1)]
    pub step: Float,
    /// Initial value `y(begin)`. Default: `0.0`.
    #[builder(default = 0.0)]
    pub y0: Float,
    /// Maximum number of grid steps. Default: `100_000`.
    #[builder(default = DEFAULT_NMAX)]
    pub nmax: usize,
}

impl Problem {
    pub fn new(begin: Float, end: Float, step: Float, y0: Float) -> Self {
        Self {
            begin,
            end,
            step,
            y0,
            nmax: DEFAULT_NMAX,
        }
    }

    /// Check the problem without building its grid.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.y0.is_finite() {
            return Err(ConfigurationError::NonFiniteInitialValue(self.y0).into());
        }
        if self.nmax == 0 {
            return Err(ConfigurationError::NMaxMustBePositive(self.nmax).into());
        }
        Grid::steps_for(self.begin, self.end, self.step, self.nmax)?;
        Ok(())
    }

    /// Build the sample grid shared by every integrator in a run.
    pub fn grid(&self) -> Result<Grid, Error> {
        self.validate()?;
        Grid::with_nmax(self.begin, self.end, self.step, self.nmax)
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_blank_input() {
        let problem = Problem::default();
        assert_eq!(problem, Problem::new(0.0, 1.0, 0.1, 0.0));
        assert_eq!(problem.nmax, DEFAULT_NMAX);
    }

    #[test]
    fn builder_overrides_single_fields() {
        let problem = Problem::builder().begin(-1.0).step(0.25).build();
        assert_eq!(problem.begin, -1.0);
        assert_eq!(problem.end, 1.0);
        assert_eq!(problem.step, 0.25);
        assert_eq!(problem.grid().unwrap().len(), 9);
    }

    #[test]
    fn zero_step_is_rejected() {
        let problem = Problem::builder().step(0.0).build();
        assert_eq!(
            problem.validate(),
            Err(Error::Configuration(ConfigurationError::InvalidStepSize(0.0)))
        );
    }

    #[test]
    fn non_finite_initial_value_is_rejected() {
        let problem = Problem::builder().y0(Float::NAN).build();
        assert!(matches!(
            problem.grid(),
            Err(Error::Configuration(ConfigurationError::NonFiniteInitialValue(_)))
        ));
    }

    #[test]
    fn nmax_bounds_the_grid() {
        let problem = Problem::builder().step(1e-3).nmax(100).build();
        assert_eq!(
            problem.grid(),
            Err(Error::Configuration(ConfigurationError::GridTooLarge {
                steps: 1000.0,
                nmax: 100,
            }))
        );
    }
}
