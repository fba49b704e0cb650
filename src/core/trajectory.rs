//! Sampled solution values aligned with a grid.

use std::ops::Deref;

use crate::Float;

/// One solution value per grid point, `values[0]` being the initial value.
///
/// Dereferences to `[Float]`, so indexing, `len`, `last` and `iter` work as on
/// a slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    values: Vec<Float>,
    nfev: usize,
}

impl Trajectory {
    pub fn new(values: Vec<Float>, nfev: usize) -> Self {
        Self { values, nfev }
    }

    /// Number of right-hand side evaluations spent producing the values.
    pub fn nfev(&self) -> usize {
        self.nfev
    }

    pub fn values(&self) -> &[Float] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Float> {
        self.values
    }

    /// Index of the first NaN or infinite value, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_finite())
    }
}

impl Deref for Trajectory {
    type Target = [Float];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[Float]> for Trajectory {
    fn as_ref(&self) -> &[Float] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_slice() {
        let trajectory = Trajectory::new(vec![1.0, 2.0, 4.0], 3);
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory[1], 2.0);
        assert_eq!(trajectory.last(), Some(&4.0));
        assert_eq!(trajectory.nfev(), 3);
        assert_eq!(trajectory.into_values(), vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn locates_degenerate_values() {
        let trajectory = Trajectory::new(vec![1.0, 2.0, Float::INFINITY, Float::NAN], 0);
        assert_eq!(trajectory.first_non_finite(), Some(2));

        let trajectory = Trajectory::new(vec![0.0; 4], 0);
        assert_eq!(trajectory.first_non_finite(), None);
    }
}
