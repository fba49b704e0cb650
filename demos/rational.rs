//! # Example: Rational Right-Hand Side
//!
//! Print the four-way comparison table for the built-in rational right-hand side.
//!
//! Equation:
//! dy/dx = (2 - x^2 - y^2) / (2 + x^2 + x y)
//!
//! Initial condition: y(0) = 0.0, x in [0, 1], h = 0.1
//!

use cauchy::{functions::Rational, prelude::*, report::Table};

fn main() {
    let problem = Problem::default();

    match compare_parallel(&problem, &Rational, &Dopri5Reference::default()) {
        Ok(comparison) => print!("{}", Table(&comparison)),
        Err(e) => eprintln!("Comparison failed: {e}"),
    }
}
