use cauchy::{prelude::*, utils::max_abs_error};

mod common;
use common::{growth, linear, linear_exact, tight_reference};

/// Max error over the grid against the closed form, for step `h` and `h / 2`.
fn errors_on_halving<F>(f: &F, exact: &dyn Fn(f64) -> f64, y0: f64, h: f64, method: Method) -> (f64, f64)
where
    F: ODE,
{
    let error = |h: f64| {
        let grid = Grid::new(0.0, 1.0, h).unwrap();
        let trajectory = method.integrate(&grid, f, y0);
        max_abs_error(grid.points(), &trajectory, exact)
    };
    (error(h), error(h / 2.0))
}

#[test]
fn halving_the_step_divides_error_by_two_to_the_order() {
    let exact = |x: f64| x.exp();
    let expected = [(Method::Euler, 2.0), (Method::Midpoint, 4.0), (Method::Rk4, 16.0)];

    for (method, ratio) in expected {
        let (coarse, fine) = errors_on_halving(&growth, &exact, 1.0, 0.1, method);
        let observed = coarse / fine;
        assert!(
            (observed / ratio - 1.0).abs() < 0.1,
            "{method}: error ratio {observed}, expected about {ratio}"
        );
    }
}

#[test]
fn order_holds_for_non_autonomous_rhs() {
    let exact = linear_exact(0.0, 0.5);
    for method in Method::ALL {
        let (coarse, fine) = errors_on_halving(&linear, &exact, 0.5, 0.05, method);
        let observed = (coarse / fine).log2();
        assert!(
            (observed - method.order() as f64).abs() < 0.15,
            "{method}: observed order {observed}"
        );
    }
}

#[test]
fn reference_is_more_accurate_than_every_scheme() {
    let problem = Problem::new(0.0, 1.0, 0.1, 0.5);
    let comparison = compare(&problem, &linear, &tight_reference()).unwrap();
    let exact = linear_exact(0.0, 0.5);

    let reference_error = max_abs_error(comparison.grid.points(), &comparison.reference, &exact);
    assert!(reference_error < 1e-9, "reference error {reference_error}");
    for method in Method::ALL {
        let error = max_abs_error(comparison.grid.points(), comparison.trajectory(method), &exact);
        assert!(error > 100.0 * reference_error);
    }
}
