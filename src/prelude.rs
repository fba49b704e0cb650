//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use cauchy::prelude::*;
//! ```
//!

pub use crate::core::{
    grid::Grid,
    interpolate::Interpolate,
    ode::ODE,
    problem::Problem,
    solout::{ControlFlag, SolOut},
    status::Status,
    trajectory::Trajectory,
};
pub use crate::error::{ConfigurationError, Error};
pub use crate::methods::{scheme::Method, settings::Settings};
pub use crate::solve::{
    Comparison, Dopri5Reference, ReferenceSolver, compare, compare_parallel, reference,
};
