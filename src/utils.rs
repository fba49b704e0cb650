//! Shared numeric helpers for comparing trajectories.

use crate::Float;

/// Pointwise `|a[i] - b[i]|`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn abs_deviation(a: &[Float], b: &[Float]) -> Vec<Float> {
    assert_eq!(a.len(), b.len(), "sequences must be index-aligned");
    a.iter().zip(b).map(|(a, b)| (a - b).abs()).collect()
}

/// Largest pointwise `|a[i] - b[i]|`, NaN if any difference is NaN.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn max_abs_deviation(a: &[Float], b: &[Float]) -> Float {
    assert_eq!(a.len(), b.len(), "sequences must be index-aligned");
    nan_max(a.iter().zip(b).map(|(a, b)| (a - b).abs()))
}

/// Largest deviation of `values` from a closed-form solution sampled at `points`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn max_abs_error<E>(points: &[Float], values: &[Float], exact: E) -> Float
where
    E: Fn(Float) -> Float,
{
    assert_eq!(points.len(), values.len(), "sequences must be index-aligned");
    nan_max(points.iter().zip(values).map(|(&x, y)| (y - exact(x)).abs()))
}

fn nan_max(values: impl Iterator<Item = Float>) -> Float {
    values.fold(0.0, |max, v| if v.is_nan() || v > max { v } else { max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deviation_is_pointwise() {
        assert_eq!(
            abs_deviation(&[1.0, 2.0, 3.0], &[1.5, 2.0, 1.0]),
            vec![0.5, 0.0, 2.0]
        );
        assert_eq!(max_abs_deviation(&[1.0, 2.0, 3.0], &[1.5, 2.0, 1.0]), 2.0);
    }

    #[test]
    fn nan_is_not_hidden() {
        assert!(max_abs_deviation(&[Float::NAN, 0.0], &[0.0, 5.0]).is_nan());
        assert!(max_abs_deviation(&[0.0, Float::NAN], &[5.0, 0.0]).is_nan());
    }

    #[test]
    fn error_against_closed_form() {
        let points = [0.0, 1.0, 2.0];
        let values = [0.0, 1.5, 4.0];
        assert_eq!(max_abs_error(&points, &values, |x| x * x), 0.5);
    }

    #[test]
    #[should_panic(expected = "index-aligned")]
    fn misaligned_inputs_panic() {
        max_abs_deviation(&[1.0], &[1.0, 2.0]);
    }
}
