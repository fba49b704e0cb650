//! Fixed-step explicit Runge-Kutta schemes (Euler, midpoint, RK4)

mod euler;
mod midpoint;
mod rk4;

pub use euler::Euler;
pub use midpoint::Midpoint;
pub use rk4::Rk4;
