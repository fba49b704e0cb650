//! SolOut that samples the dense output at prescribed abscissae.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        solout::{ControlFlag, SolOut},
    },
};

/// Collects the solution at every point of a monotonic sequence of abscissae.
///
/// The starting point takes the initial value. Every later point in
/// `(xold, x]` of an accepted step is interpolated from that step's dense
/// output, which reproduces the step's end value at `x`.
pub struct GridSampler<'a> {
    points: &'a [Float],
    direction: Float,
    next_idx: usize,
    values: Vec<Float>,
}

impl<'a> GridSampler<'a> {
    pub fn new(points: &'a [Float]) -> Self {
        let direction = match (points.first(), points.last()) {
            (Some(first), Some(last)) if last < first => -1.0,
            _ => 1.0,
        };
        Self {
            points,
            direction,
            next_idx: 0,
            values: Vec::with_capacity(points.len()),
        }
    }

    /// Number of points sampled so far.
    pub fn sampled(&self) -> usize {
        self.next_idx
    }

    pub fn into_values(self) -> Vec<Float> {
        self.values
    }

    /// The final point may differ from the integrator's end by rounding,
    /// measured against the length of the step that reached it.
    fn is_final_point(&self, idx: usize, xi: Float, xold: Float, x: Float) -> bool {
        idx + 1 == self.points.len() && (xi - x).abs() <= 1e-12 * (x - xold).abs()
    }
}

impl SolOut for GridSampler<'_> {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: Float,
        interpolator: Option<&I>,
    ) -> ControlFlag {
        let mut i = self.next_idx;
        while let Some(&xi) = self.points.get(i) {
            let value = match interpolator {
                // Initial call: only the starting point can be sampled
                None if xi == x => y,
                None => break,
                Some(_) if xi == x => y,
                Some(interp) if (xi - x) * self.direction < 0.0 => interp.interpolate(xi),
                Some(_) if self.is_final_point(i, xi, xold, x) => y,
                Some(_) => break,
            };
            self.values.push(value);
            i += 1;
        }
        self.next_idx = i;

        ControlFlag::Continue
    }
}
