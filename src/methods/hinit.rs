//! Compute an initial step size guess

use crate::{Float, core::ode::ODE};

/// Compute an initial step size guess for an explicit method of order `iord`.
///
/// `f0` is the slope at `(y, x)`; one additional right-hand side evaluation is
/// spent on an explicit Euler step to estimate the second derivative.
#[allow(clippy::too_many_arguments)]
pub fn hinit<F>(
    f: &F,
    x: Float,
    y: Float,
    posneg: Float,
    f0: Float,
    iord: i32,
    hmax: Float,
    rtol: Float,
    atol: Float,
) -> Float
where
    F: ODE + ?Sized,
{
    let sk = atol + rtol * y.abs();
    let dnf = (f0 / sk) * (f0 / sk);
    let dny = (y / sk) * (y / sk);

    // Degenerate or non-finite norms fall back to a tiny first guess.
    let mut h = if dnf > 1.0e-10 && dny > 1.0e-10 {
        (dny / dnf).sqrt() * 0.01
    } else {
        1.0e-6
    };
    h = h.min(hmax) * posneg;

    // Explicit Euler step to estimate the second derivative
    let y1 = y + h * f0;
    let f1 = f.ode(y1, x + h);
    let der2 = ((f1 - f0) / sk).abs() / h.abs();

    let der12 = der2.max(dnf.sqrt());
    let h1 = if der12 <= 1.0e-15 {
        (1.0e-6 as Float).max(h.abs() * 1.0e-3)
    } else {
        (0.01 / der12).powf(1.0 / iord as Float)
    };

    (100.0 * h.abs()).min(h1).min(hmax) * posneg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_is_positive_and_bounded() {
        let f = |y: Float, _x: Float| y;
        let h = hinit(&f, 0.0, 1.0, 1.0, 1.0, 5, 1.0, 1e-6, 1e-6);
        assert!(h > 0.0 && h <= 1.0);
    }

    #[test]
    fn follows_integration_direction() {
        let f = |y: Float, _x: Float| -y;
        let h = hinit(&f, 1.0, 1.0, -1.0, -1.0, 5, 1.0, 1e-6, 1e-6);
        assert!(h < 0.0);
    }

    #[test]
    fn respects_hmax() {
        let f = |_y: Float, _x: Float| 0.0;
        let h = hinit(&f, 0.0, 0.0, 1.0, 0.0, 5, 1e-8, 1e-6, 1e-6);
        assert!(h <= 1e-8);
    }

    #[test]
    fn non_finite_slope_gives_finite_guess() {
        let f = |_y: Float, _x: Float| Float::NAN;
        let h = hinit(&f, 0.0, 1.0, 1.0, Float::NAN, 5, 1.0, 1e-6, 1e-6);
        assert!(h.is_finite() && h > 0.0);
    }
}
