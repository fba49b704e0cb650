//! Status codes for integrators

/// How an adaptive integration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the interval.
    Success,
    /// A [`SolOut`](crate::SolOut) callback asked to stop.
    Interrupted,
    /// Ran out of the allowed number of steps.
    NeedLargerNMax,
    /// The step size underflowed relative to `x`.
    StepSizeTooSmall,
    /// The stiffness test fired repeatedly.
    ProbablyStiff,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}
