//! Uniform sample grid over the integration interval.

use crate::{
    Float,
    core::problem::DEFAULT_NMAX,
    error::{ConfigurationError, Error},
};

/// Ordered sample points `x[0] = begin, ..., x[n] = end` with uniform spacing.
///
/// The number of steps is `n = round((end - begin) / step)`, at least one when
/// the interval is not empty, and the points are `begin + i * (end - begin) / n`
/// with the last point set to `end` exactly. When `step` does not divide the
/// interval the actual spacing differs slightly from `step`; it is available
/// through [`Grid::spacing`].
///
/// ```
/// use cauchy::Grid;
///
/// let grid = Grid::new(0.0, 1.0, 0.3).unwrap();
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.points().last(), Some(&1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    points: Vec<Float>,
    spacing: Float,
}

impl Grid {
    /// Build a grid with at most [`DEFAULT_NMAX`] steps.
    pub fn new(begin: Float, end: Float, step: Float) -> Result<Self, Error> {
        Self::with_nmax(begin, end, step, DEFAULT_NMAX)
    }

    /// Build a grid with at most `nmax` steps.
    pub fn with_nmax(begin: Float, end: Float, step: Float, nmax: usize) -> Result<Self, Error> {
        let n = Self::steps_for(begin, end, step, nmax)?;
        if n == 0 {
            return Ok(Self {
                points: vec![begin],
                spacing: 0.0,
            });
        }

        let spacing = (end - begin) / n as Float;
        let mut points: Vec<Float> = (0..n).map(|i| begin + i as Float * spacing).collect();
        points.push(end);

        // Spacing below the resolution of the bounds would repeat points.
        let direction = (end - begin).signum();
        if points.windows(2).any(|w| (w[1] - w[0]) * direction <= 0.0) {
            return Err(ConfigurationError::InvalidStepSize(step).into());
        }

        Ok(Self { points, spacing })
    }

    /// Number of steps a grid over `[begin, end]` with nominal `step` would have.
    pub(crate) fn steps_for(
        begin: Float,
        end: Float,
        step: Float,
        nmax: usize,
    ) -> Result<usize, Error> {
        for bound in [begin, end] {
            if !bound.is_finite() {
                return Err(ConfigurationError::NonFiniteBound(bound).into());
            }
        }
        if step == 0.0 || !step.is_finite() {
            return Err(ConfigurationError::InvalidStepSize(step).into());
        }
        if begin == end {
            return Ok(0);
        }

        let direction = (end - begin).signum();
        if step.signum() != direction {
            return Err(ConfigurationError::InvalidStepSize(step).into());
        }

        let steps = ((end - begin) / step).round().max(1.0);
        if !steps.is_finite() || steps > nmax as Float {
            return Err(ConfigurationError::GridTooLarge { steps, nmax }.into());
        }

        Ok(steps as usize)
    }

    pub fn points(&self) -> &[Float] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a grid holds at least its starting point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of steps between the first and last point.
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Signed distance between consecutive points, `0.0` for a single-point grid.
    pub fn spacing(&self) -> Float {
        self.spacing
    }

    pub fn begin(&self) -> Float {
        self.points[0]
    }

    pub fn end(&self) -> Float {
        self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Float> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Float;
    type IntoIter = std::slice::Iter<'a, Float>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
