//! Numerical methods: the fixed-step schemes and the adaptive reference integrator.

pub mod dp;
pub mod hinit;
pub mod result;
pub mod rk;
pub mod scheme;
pub mod settings;

pub use hinit::hinit;
