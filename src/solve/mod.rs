//! High-level solve module: reference sampling and the four-way comparison.

pub mod compare;
pub mod reference;
pub mod solout;

pub use compare::{Comparison, compare, compare_parallel};
pub use reference::{Dopri5Reference, ReferenceSolver, reference};
pub use solout::GridSampler;
