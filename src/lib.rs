//! Fixed-step explicit integrators for scalar initial value problems,
//! compared against a high-accuracy adaptive reference.
//!
//! A [`Problem`] `dy/dx = f(y, x), y(a) = y0` on `[a, b]` with step `h` is
//! sampled on a uniform [`Grid`]. Three fixed-step schemes of increasing
//! order ([`Method::Euler`], [`Method::Midpoint`], [`Method::Rk4`]) and an
//! adaptive Dormand-Prince reference ([`Dopri5Reference`]) each produce one
//! [`Trajectory`] aligned with that grid.
//!
//! ```
//! use cauchy::prelude::*;
//!
//! let problem = Problem::builder().y0(1.0).build();
//! let growth = |y: f64, _x: f64| y;
//!
//! let comparison = compare(&problem, &growth, &Dopri5Reference::default()).unwrap();
//! let rk4_end = *comparison.rk4.last().unwrap();
//! assert!((rk4_end - std::f64::consts::E).abs() < 1e-4);
//! ```

mod error;

pub mod core;
pub mod functions;
pub mod methods;
pub mod prelude;
pub mod report;
pub mod solve;
pub mod utils;

pub use crate::core::{
    grid::Grid,
    interpolate::Interpolate,
    ode::ODE,
    problem::Problem,
    solout::{ControlFlag, SolOut},
    status::Status,
    trajectory::Trajectory,
};
pub use error::{ConfigurationError, Error};
pub use methods::{
    scheme::{Method, Scheme, integrate},
    settings::Settings,
};
pub use solve::{Comparison, Dopri5Reference, ReferenceSolver, compare, compare_parallel, reference};

/// Floating point type used throughout the crate.
pub type Float = f64;
