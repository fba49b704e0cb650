//! Dormand-Prince Runge Kutta method

mod dopri5;

pub use dopri5::{DenseOutput, contdp5, dopri5};
