//! # Example: Exponential Growth
//!
//! Compare Euler, midpoint and RK4 with the DOPRI5 reference and the exact
//! solution, halving the step each time.
//!
//! Equation:
//! dy/dx = y
//!
//! Initial condition: y(0) = 1.0, exact solution y = e^x
//!

use cauchy::{prelude::*, utils::max_abs_error};

struct Growth;

impl ODE for Growth {
    fn ode(&self, y: f64, _x: f64) -> f64 {
        y
    }
}

fn main() {
    let solver = Dopri5Reference::default();

    for step in [0.1, 0.05, 0.025] {
        let problem = Problem::new(0.0, 1.0, step, 1.0);
        match compare(&problem, &Growth, &solver) {
            Ok(comparison) => {
                println!("h = {step}");
                for method in Method::ALL {
                    let error = max_abs_error(
                        comparison.grid.points(),
                        comparison.trajectory(method),
                        f64::exp,
                    );
                    println!(
                        "  {method:<8} max |y - e^x| = {error:.3e}, |y - reference| = {:.3e}, nfev = {}",
                        comparison.max_deviation(method),
                        comparison.trajectory(method).nfev(),
                    );
                }
                let error = max_abs_error(comparison.grid.points(), &comparison.reference, f64::exp);
                println!("  reference max |y - e^x| = {error:.3e}");
            }
            Err(e) => eprintln!("Comparison failed: {e}"),
        }
    }
}
