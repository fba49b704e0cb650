//! Text renderings of a [`Comparison`].

use std::fmt;

use crate::{methods::scheme::Method, solve::compare::Comparison};

/// Aligned table of the grid and the four trajectories, followed by the
/// largest deviation of each scheme from the reference.
pub struct Table<'a>(pub &'a Comparison);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(
            f,
            "{:>12} {:>16} {:>16} {:>16} {:>16}",
            "x", "Euler", "Midpoint", "RK4", "Reference"
        )?;
        for (i, x) in c.grid.iter().enumerate() {
            writeln!(
                f,
                "{:>12.6} {:>16.10} {:>16.10} {:>16.10} {:>16.10}",
                x, c.euler[i], c.midpoint[i], c.rk4[i], c.reference[i]
            )?;
        }
        writeln!(f)?;
        for method in Method::ALL {
            writeln!(
                f,
                "max |{} - Reference| = {:.3e}",
                method,
                c.max_deviation(method)
            )?;
        }
        Ok(())
    }
}

/// Comma-separated values with a header row, at full precision.
pub struct Csv<'a>(pub &'a Comparison);

impl fmt::Display for Csv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(f, "x,euler,midpoint,rk4,reference")?;
        for (i, x) in c.grid.iter().enumerate() {
            writeln!(
                f,
                "{},{},{},{},{}",
                x, c.euler[i], c.midpoint[i], c.rk4[i], c.reference[i]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Float, Problem, solve::compare, solve::reference::Dopri5Reference};

    fn constant_run() -> Comparison {
        let f = |_y: Float, _x: Float| 0.0;
        compare(&Problem::new(0.0, 1.0, 0.5, 2.0), &f, &Dopri5Reference::default()).unwrap()
    }

    #[test]
    fn table_has_header_rows_and_summary() {
        let text = Table(&constant_run()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].trim_start().starts_with('x'));
        assert!(lines[0].ends_with("Reference"));
        assert_eq!(lines.len(), 1 + 3 + 1 + 3);
        assert_eq!(lines[7], "max |RK4 - Reference| = 0.000e0");
    }

    #[test]
    fn csv_rows_match_grid() {
        let text = Csv(&constant_run()).to_string();
        assert_eq!(
            text,
            "x,euler,midpoint,rk4,reference\n0,2,2,2,2\n0.5,2,2,2,2\n1,2,2,2,2\n"
        );
    }
}
